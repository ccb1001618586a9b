//! Interface discovery for the running platform.
//!
//! Snapshots are never cached; each call asks the OS again.

use dnswitch_common::network::interface::NetworkInterface;
use dnswitch_common::{DnsError, Result};
use tracing::debug;

use crate::dispatcher::Dispatcher;

/// Failures to run the enumeration commands become [`DnsError::InterfaceEnumerationFailed`].
fn enumeration_error(err: DnsError) -> DnsError {
    match err {
        DnsError::ExternalCommandFailed { diagnostic } => {
            DnsError::InterfaceEnumerationFailed { diagnostic }
        }
        other => other,
    }
}

/// Every non-loopback interface with its active flag and kind.
pub fn list_interfaces(dispatcher: &Dispatcher) -> Result<Vec<NetworkInterface>> {
    let interfaces = dispatcher.list_interfaces().map_err(enumeration_error)?;
    debug!(count = interfaces.len(), "enumerated interfaces");
    Ok(interfaces)
}

/// The first active, non-loopback interface with an IPv4 address.
pub fn active_interface(dispatcher: &Dispatcher) -> Result<NetworkInterface> {
    let interface = dispatcher.active_interface().map_err(enumeration_error)?;
    debug!(interface = %interface.system_name, "detected active interface");
    Ok(interface)
}

/// Finds `name` in a fresh snapshot, matching either the system or display name.
pub fn find_interface(dispatcher: &Dispatcher, name: &str) -> Result<Option<NetworkInterface>> {
    Ok(list_interfaces(dispatcher)?
        .into_iter()
        .find(|iface| iface.system_name == name || iface.display_name == name))
}
