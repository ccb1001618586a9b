//! macOS DNS handling through `networksetup` network services.
//!
//! On macOS the "interface" handed to every command is a network service name
//! (`Wi-Fi`, `Thunderbolt Ethernet`, ...), not a BSD device name.

use dnswitch_common::network::interface::{InterfaceKind, NetworkInterface};
use dnswitch_common::network::platform::Platform;
use dnswitch_common::{DnsError, Result};
use tracing::debug;

use crate::command::{CommandRunner, Invocation, execute};
use crate::platform::DnsPlatform;

const NETWORKSETUP: &str = "networksetup";

/// Printed by `-getdnsservers` when the service has no manual DNS servers.
const NO_DNS_SERVERS: &str = "There aren't any DNS Servers set";

/// Marks a disabled service in `-listallnetworkservices` output.
const DISABLED_MARKER: char = '*';

pub struct MacDns {
    runner: Box<dyn CommandRunner>,
}

impl MacDns {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    fn networksetup<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let invocation = Invocation::new(NETWORKSETUP).args(args);
        let stdout = execute(self.runner.as_ref(), &invocation)?;
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }

    /// A service is active when `-getinfo` reports an IPv4 address.
    ///
    /// Configured DNS servers are deliberately not consulted: a service can hold
    /// an address without any DNS override.
    fn has_ip_address(&self, service: &str) -> bool {
        match self.networksetup(["-getinfo", service]) {
            Ok(info) => parse_ip_address(&info).is_some(),
            Err(err) => {
                debug!(service, %err, "could not query service info");
                false
            }
        }
    }
}

/// Enabled service names, header line and disabled services removed.
fn parse_services(output: &str) -> Vec<String> {
    output
        .trim()
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|service| !service.is_empty() && !service.starts_with(DISABLED_MARKER))
        .map(str::to_string)
        .collect()
}

/// The `IP address:` value from `-getinfo` output, if it is a real address.
fn parse_ip_address(info: &str) -> Option<String> {
    info.lines()
        .filter_map(|line| line.trim().strip_prefix("IP address:"))
        .map(str::trim)
        .find(|value| !value.is_empty() && *value != "(null)" && *value != "none")
        .map(str::to_string)
}

impl DnsPlatform for MacDns {
    fn platform(&self) -> Platform {
        Platform::MacOS
    }

    fn list_interfaces(&self) -> Result<Vec<NetworkInterface>> {
        let output = self.networksetup(["-listallnetworkservices"])?;

        Ok(parse_services(&output)
            .into_iter()
            .map(|service| {
                let is_active = self.has_ip_address(&service);
                let kind = InterfaceKind::from_service_name(&service);
                NetworkInterface::new(service, is_active, kind)
            })
            .collect())
    }

    fn active_interface(&self) -> Result<NetworkInterface> {
        let output = self.networksetup(["-listallnetworkservices"])?;

        parse_services(&output)
            .into_iter()
            .find(|service| self.has_ip_address(service))
            .map(|service| {
                let kind = InterfaceKind::from_service_name(&service);
                NetworkInterface::new(service, true, kind)
            })
            .ok_or(DnsError::NoActiveInterface)
    }

    fn read_dns(&self, interface: &str) -> Result<String> {
        let output = self.networksetup(["-getdnsservers", interface])?;
        if output.contains(NO_DNS_SERVERS) {
            return Ok(String::new());
        }
        Ok(output)
    }

    fn set_dns(&self, interface: &str, addresses: &[String]) -> Result<()> {
        let args = ["-setdnsservers", interface]
            .into_iter()
            .map(str::to_string)
            .chain(addresses.iter().cloned());
        self.networksetup(args)?;
        Ok(())
    }

    fn clear_dns(&self, interface: &str) -> Result<()> {
        self.networksetup(["-setdnsservers", interface, "Empty"])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeRunner;

    const SERVICES: &str = "An asterisk (*) denotes that a network service is disabled.\n\
                            USB 10/100/1000 LAN\n\
                            Wi-Fi\n\
                            *Bluetooth PAN\n\
                            Thunderbolt Bridge\n";

    const WIFI_INFO: &str = "DHCP Configuration\n\
                             IP address: 192.168.1.23\n\
                             Subnet mask: 255.255.255.0\n\
                             Router: 192.168.1.1\n\
                             Client ID:\n\
                             IPv6: Automatic\n\
                             IPv6 IP address: none\n\
                             IPv6 Router: none\n\
                             Wi-Fi ID: a4:83:e7:00:00:01\n";

    const LAN_INFO: &str = "DHCP Configuration\n\
                            IP address: (null)\n\
                            IPv6 IP address: none\n";

    fn mac(runner: &FakeRunner) -> MacDns {
        MacDns::new(Box::new(runner.clone()))
    }

    #[test]
    fn services_skip_header_and_disabled() {
        assert_eq!(
            parse_services(SERVICES),
            vec!["USB 10/100/1000 LAN", "Wi-Fi", "Thunderbolt Bridge"]
        );
    }

    #[test]
    fn ip_address_ignores_ipv6_line() {
        assert_eq!(parse_ip_address(WIFI_INFO).as_deref(), Some("192.168.1.23"));
        assert_eq!(parse_ip_address(LAN_INFO), None);
        assert_eq!(parse_ip_address("IP address: none\n"), None);
        assert_eq!(parse_ip_address("Manual Configuration\n"), None);
    }

    #[test]
    fn list_marks_services_with_an_address_active() {
        let runner = FakeRunner::new()
            .on("-listallnetworkservices", SERVICES)
            .on("-getinfo Wi-Fi", WIFI_INFO)
            .on("-getinfo USB 10/100/1000 LAN", LAN_INFO)
            .fail_on("-getinfo Thunderbolt Bridge", 4, "** Error: The parameters were not valid.");

        let services = mac(&runner).list_interfaces().unwrap();
        let summary: Vec<(&str, bool, InterfaceKind)> = services
            .iter()
            .map(|s| (s.system_name.as_str(), s.is_active, s.kind))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("USB 10/100/1000 LAN", false, InterfaceKind::Unknown),
                ("Wi-Fi", true, InterfaceKind::WiFi),
                ("Thunderbolt Bridge", false, InterfaceKind::Unknown),
            ]
        );
    }

    #[test]
    fn active_interface_ignores_dns_configuration() {
        // USB LAN has DNS servers set but no address; it must not be picked.
        let runner = FakeRunner::new()
            .on("-listallnetworkservices", SERVICES)
            .on("-getdnsservers", "1.1.1.1\n")
            .on("-getinfo Wi-Fi", WIFI_INFO)
            .on("-getinfo", LAN_INFO);

        let active = mac(&runner).active_interface().unwrap();
        assert_eq!(active.system_name, "Wi-Fi");
        assert!(runner.calls().iter().all(|c| c.args[0] != "-getdnsservers"));
    }

    #[test]
    fn active_interface_fails_without_addresses() {
        let runner = FakeRunner::new()
            .on("-listallnetworkservices", SERVICES)
            .on("-getinfo", LAN_INFO);
        assert_eq!(
            mac(&runner).active_interface().unwrap_err(),
            DnsError::NoActiveInterface
        );
    }

    #[test]
    fn read_dns_without_servers_is_empty() {
        let runner = FakeRunner::new().on(
            "-getdnsservers",
            "There aren't any DNS Servers set on Wi-Fi.\n",
        );
        assert_eq!(mac(&runner).read_dns("Wi-Fi").unwrap(), "");
    }

    #[test]
    fn set_dns_passes_each_address_as_an_argument() {
        let runner = FakeRunner::new();
        let addresses = vec!["185.55.226.26".to_string(), "185.55.225.25".to_string()];
        mac(&runner).set_dns("Wi-Fi", &addresses).unwrap();

        let call = &runner.calls()[0];
        assert_eq!(call.program, "networksetup");
        assert_eq!(
            call.args,
            vec!["-setdnsservers", "Wi-Fi", "185.55.226.26", "185.55.225.25"]
        );
    }

    #[test]
    fn clear_dns_sets_empty() {
        let runner = FakeRunner::new();
        mac(&runner).clear_dns("Wi-Fi").unwrap();
        assert_eq!(runner.calls()[0].args, vec!["-setdnsservers", "Wi-Fi", "Empty"]);
    }
}
