//! Routes every interface and DNS operation to the strategy chosen at startup.

use std::fmt;

use dnswitch_common::network::interface::NetworkInterface;
use dnswitch_common::network::platform::Platform;
use dnswitch_common::Result;
use tracing::{debug, debug_span};

use crate::command::{CommandRunner, SystemRunner};
use crate::platform::{self, DnsPlatform};

/// The operations a strategy can be asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformOp {
    ListInterfaces,
    ActiveInterface,
    ReadDns,
    SetDns,
    ClearDns,
}

impl fmt::Display for PlatformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlatformOp::ListInterfaces => "list-interfaces",
            PlatformOp::ActiveInterface => "active-interface",
            PlatformOp::ReadDns => "read-dns",
            PlatformOp::SetDns => "set-dns",
            PlatformOp::ClearDns => "clear-dns",
        };
        f.write_str(name)
    }
}

/// Holds the single strategy for this process.
pub struct Dispatcher {
    strategy: Box<dyn DnsPlatform>,
}

impl Dispatcher {
    pub fn new(platform: Platform, runner: Box<dyn CommandRunner>) -> Self {
        Self::with_strategy(platform::strategy_for(platform, runner))
    }

    /// Strategy for the running OS, executing real processes.
    pub fn detect() -> Self {
        let platform = Platform::detect();
        debug!(%platform, "selected platform strategy");
        Self::new(platform, Box::new(SystemRunner))
    }

    pub fn with_strategy(strategy: Box<dyn DnsPlatform>) -> Self {
        Self { strategy }
    }

    pub fn platform(&self) -> Platform {
        self.strategy.platform()
    }

    fn traced<T>(
        &self,
        op: PlatformOp,
        interface: Option<&str>,
        f: impl FnOnce(&dyn DnsPlatform) -> Result<T>,
    ) -> Result<T> {
        let span = debug_span!("dispatch", %op, interface = interface.unwrap_or("-"));
        let _guard = span.enter();
        let result = f(self.strategy.as_ref());
        if let Err(err) = &result {
            debug!(%err, "operation failed");
        }
        result
    }

    pub fn list_interfaces(&self) -> Result<Vec<NetworkInterface>> {
        self.traced(PlatformOp::ListInterfaces, None, |s| s.list_interfaces())
    }

    pub fn active_interface(&self) -> Result<NetworkInterface> {
        self.traced(PlatformOp::ActiveInterface, None, |s| s.active_interface())
    }

    pub fn read_dns(&self, interface: &str) -> Result<String> {
        self.traced(PlatformOp::ReadDns, Some(interface), |s| s.read_dns(interface))
    }

    pub fn set_dns(&self, interface: &str, addresses: &[String]) -> Result<()> {
        self.traced(PlatformOp::SetDns, Some(interface), |s| {
            s.set_dns(interface, addresses)
        })
    }

    pub fn clear_dns(&self, interface: &str) -> Result<()> {
        self.traced(PlatformOp::ClearDns, Some(interface), |s| s.clear_dns(interface))
    }
}
