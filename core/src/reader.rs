//! Reports which provider, if any, is configured on an interface.

use std::collections::HashSet;

use dnswitch_common::network::provider::{DnsObservation, UNKNOWN_PROVIDER};
use tracing::{debug, warn};

use crate::dispatcher::Dispatcher;
use crate::registry::ProviderRegistry;

/// Splits raw command output on whitespace and drops repeats, keeping first-seen order.
pub fn normalize(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split_whitespace()
        .filter(|addr| seen.insert(*addr))
        .map(str::to_string)
        .collect()
}

/// Name of the first provider sharing at least one address with `addresses`.
///
/// Providers are tried in [`ProviderRegistry::ordered_names`] order.
pub fn identify(addresses: &[String], registry: &ProviderRegistry) -> String {
    registry
        .providers()
        .into_iter()
        .find(|provider| provider.matches_any(addresses))
        .map(|provider| provider.name)
        .unwrap_or_else(|| UNKNOWN_PROVIDER.to_string())
}

/// Reads the DNS servers on `interface` and matches them against `registry`.
///
/// Never fails: a read error is logged and reported as an unknown provider with no
/// addresses, so displaying DNS state cannot halt the caller.
pub fn observe(
    dispatcher: &Dispatcher,
    registry: &ProviderRegistry,
    interface: &str,
) -> DnsObservation {
    let raw = match dispatcher.read_dns(interface) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(interface, "could not read current DNS: {err}");
            return DnsObservation::unknown();
        }
    };

    let addresses = normalize(&raw);
    let provider = identify(&addresses, registry);
    debug!(interface, %provider, ?addresses, "observed DNS");

    DnsObservation {
        provider,
        addresses,
    }
}
