//! Platform abstraction layer for OS-specific DNS handling.
//!
//! Each supported OS gets one [`DnsPlatform`] implementation:
//! - Windows: the DNS client PowerShell cmdlets (`Get-NetAdapter`, `*-DnsClientServerAddress`)
//! - macOS: `networksetup` network services
//! - Linux: kernel links via pnet, `/etc/resolv.conf`
//!
//! The strategy is picked once by [`strategy_for`] and never changes for the
//! lifetime of the process.

pub mod linux;
pub mod macos;
pub mod unsupported;
pub mod windows;

use dnswitch_common::Result;
use dnswitch_common::network::interface::NetworkInterface;
use dnswitch_common::network::platform::Platform;

use crate::command::CommandRunner;

/// Interface discovery and DNS changes for one operating system.
pub trait DnsPlatform {
    fn platform(&self) -> Platform;

    /// Every interface the OS reports, loopback excluded.
    fn list_interfaces(&self) -> Result<Vec<NetworkInterface>>;

    /// The first active, non-loopback interface carrying an IPv4 address.
    fn active_interface(&self) -> Result<NetworkInterface>;

    /// Raw text listing the DNS servers configured for `interface`, whitespace separated.
    fn read_dns(&self, interface: &str) -> Result<String>;

    fn set_dns(&self, interface: &str, addresses: &[String]) -> Result<()>;

    /// Reverts `interface` to automatic (or empty) DNS.
    fn clear_dns(&self, interface: &str) -> Result<()>;
}

/// Builds the strategy for `platform`, backed by `runner` for every external call.
pub fn strategy_for(platform: Platform, runner: Box<dyn CommandRunner>) -> Box<dyn DnsPlatform> {
    match platform {
        Platform::Windows => Box::new(windows::WindowsDns::new(runner)),
        Platform::MacOS => Box::new(macos::MacDns::new(runner)),
        #[cfg(unix)]
        Platform::Linux => Box::new(linux::LinuxDns::new(runner, Box::new(linux::PnetLinks))),
        #[cfg(not(unix))]
        Platform::Linux => Box::new(unsupported::UnsupportedDns),
        Platform::Unsupported => Box::new(unsupported::UnsupportedDns),
    }
}
