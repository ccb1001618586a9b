//! Linux DNS handling via kernel links and `/etc/resolv.conf`.
//!
//! resolv.conf is system wide, so the interface argument only matters for
//! discovery; every read and write targets the same file. Writes go through
//! `sudo`.

use dnswitch_common::network::interface::{InterfaceKind, NetworkInterface};
use dnswitch_common::network::platform::Platform;
use dnswitch_common::{DnsError, Result};

use crate::command::{CommandRunner, Invocation, execute};
use crate::platform::DnsPlatform;

pub const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

/// The parts of a kernel link the probe cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub name: String,
    pub is_up: bool,
    pub is_loopback: bool,
    pub has_routable_ipv4: bool,
}

/// Source of the kernel's link table.
pub trait LinkSource {
    fn links(&self) -> Result<Vec<Link>>;
}

/// Reads links with `pnet::datalink::interfaces`.
#[cfg(unix)]
pub struct PnetLinks;

#[cfg(unix)]
impl LinkSource for PnetLinks {
    fn links(&self) -> Result<Vec<Link>> {
        use dnswitch_common::utils::interface::NetworkInterfaceExtension;

        Ok(pnet::datalink::interfaces()
            .into_iter()
            .map(|iface| Link {
                is_up: iface.is_up(),
                is_loopback: iface.is_loopback(),
                has_routable_ipv4: iface.get_routable_ipv4().is_some(),
                name: iface.name,
            })
            .collect())
    }
}

pub struct LinuxDns {
    runner: Box<dyn CommandRunner>,
    links: Box<dyn LinkSource>,
}

impl LinuxDns {
    pub fn new(runner: Box<dyn CommandRunner>, links: Box<dyn LinkSource>) -> Self {
        Self { runner, links }
    }

    fn read_resolv_conf(&self) -> Result<String> {
        let invocation = Invocation::new("cat").arg(RESOLV_CONF_PATH);
        let stdout = execute(self.runner.as_ref(), &invocation)?;
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }

    fn privileged_shell(&self, script: String) -> Result<()> {
        let invocation = Invocation::new("sudo").args(["sh", "-c"]).arg(script);
        execute(self.runner.as_ref(), &invocation)?;
        Ok(())
    }

    /// Every link except loopback. A table without even `lo` means the kernel could not be read.
    fn non_loopback_links(&self) -> Result<Vec<Link>> {
        let links = self.links.links()?;
        if links.is_empty() {
            return Err(DnsError::enumeration_failed("no network links reported"));
        }
        Ok(links.into_iter().filter(|link| !link.is_loopback).collect())
    }
}

/// resolv.conf body with one `nameserver` line per address.
fn resolv_conf_body(addresses: &[String]) -> String {
    addresses
        .iter()
        .map(|addr| format!("nameserver {addr}\n"))
        .collect()
}

/// Wraps `value` in single quotes for `sh`, closing and reopening around embedded quotes.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Second field of every line whose first field is exactly `nameserver`.
fn parse_nameservers(resolv_conf: &str) -> Vec<&str> {
    resolv_conf
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some("nameserver"), Some(addr)) => Some(addr),
                _ => None,
            }
        })
        .collect()
}

impl DnsPlatform for LinuxDns {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn list_interfaces(&self) -> Result<Vec<NetworkInterface>> {
        Ok(self
            .non_loopback_links()?
            .into_iter()
            .map(|link| {
                let kind = InterfaceKind::from_device_name(&link.name);
                NetworkInterface::new(link.name, link.is_up, kind)
            })
            .collect())
    }

    fn active_interface(&self) -> Result<NetworkInterface> {
        self.non_loopback_links()?
            .into_iter()
            .find(|link| link.is_up && link.has_routable_ipv4)
            .map(|link| {
                let kind = InterfaceKind::from_device_name(&link.name);
                NetworkInterface::new(link.name, true, kind)
            })
            .ok_or(DnsError::NoActiveInterface)
    }

    fn read_dns(&self, _interface: &str) -> Result<String> {
        let resolv_conf = self.read_resolv_conf()?;
        Ok(parse_nameservers(&resolv_conf).join("\n"))
    }

    fn set_dns(&self, _interface: &str, addresses: &[String]) -> Result<()> {
        self.privileged_shell(format!(
            "echo {} > {RESOLV_CONF_PATH}",
            shell_quote(&resolv_conf_body(addresses))
        ))
    }

    fn clear_dns(&self, _interface: &str) -> Result<()> {
        self.privileged_shell(format!("echo '' > {RESOLV_CONF_PATH}"))
    }
}
