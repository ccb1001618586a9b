//! Fallback for operating systems without a DNS strategy.

use dnswitch_common::network::interface::NetworkInterface;
use dnswitch_common::network::platform::Platform;
use dnswitch_common::{DnsError, Result};

use crate::platform::DnsPlatform;

/// Fails every operation without touching the OS.
pub struct UnsupportedDns;

fn unsupported<T>() -> Result<T> {
    Err(DnsError::UnsupportedPlatform {
        os: std::env::consts::OS.to_string(),
    })
}

impl DnsPlatform for UnsupportedDns {
    fn platform(&self) -> Platform {
        Platform::Unsupported
    }

    fn list_interfaces(&self) -> Result<Vec<NetworkInterface>> {
        unsupported()
    }

    fn active_interface(&self) -> Result<NetworkInterface> {
        unsupported()
    }

    fn read_dns(&self, _interface: &str) -> Result<String> {
        unsupported()
    }

    fn set_dns(&self, _interface: &str, _addresses: &[String]) -> Result<()> {
        unsupported()
    }

    fn clear_dns(&self, _interface: &str) -> Result<()> {
        unsupported()
    }
}
