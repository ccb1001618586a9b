//! Applies or clears DNS servers on an interface.
//!
//! Neither operation re-reads the interface afterwards; call
//! [`crate::reader::observe`] for confirmation.

use dnswitch_common::network::platform::Platform;
use dnswitch_common::network::provider::Provider;
use dnswitch_common::{DnsError, Result};
use tracing::debug;

use crate::dispatcher::Dispatcher;
use crate::registry::ProviderRegistry;

pub fn set_dns(dispatcher: &Dispatcher, interface: &str, addresses: &[String]) -> Result<()> {
    if addresses.is_empty() && dispatcher.platform() != Platform::Unsupported {
        return Err(DnsError::EmptyAddressList);
    }
    dispatcher.set_dns(interface, addresses)?;
    debug!(interface, addresses = %addresses.join(", "), "DNS servers applied");
    Ok(())
}

/// Looks `name` up in `registry` and applies its addresses.
///
/// Returns `Ok(None)` when the registry has no such provider.
pub fn apply_provider(
    dispatcher: &Dispatcher,
    registry: &ProviderRegistry,
    interface: &str,
    name: &str,
) -> Result<Option<Provider>> {
    let Some(provider) = registry.provider(name) else {
        return Ok(None);
    };
    set_dns(dispatcher, interface, &provider.addresses)?;
    Ok(Some(provider))
}

pub fn clear_dns(dispatcher: &Dispatcher, interface: &str) -> Result<()> {
    dispatcher.clear_dns(interface)?;
    debug!(interface, "DNS servers reset to automatic");
    Ok(())
}
