use std::collections::HashMap;

use dnswitch_common::network::interface::{InterfaceKind, NetworkInterface};
use dnswitch_common::network::platform::Platform;
use dnswitch_common::{DnsError, Result};
use dnswitch_core::Dispatcher;
use dnswitch_core::platform::DnsPlatform;
use dnswitch_core::platform::linux::LinuxDns;
use dnswitch_core::testing::{FakeRunner, StaticLinks, link};

pub const MAC_SERVICES: &str = "An asterisk (*) denotes that a network service is disabled.\n\
                                USB 10/100/1000 LAN\n\
                                Wi-Fi\n\
                                *Bluetooth PAN\n";

pub const MAC_WIFI_INFO: &str = "DHCP Configuration\n\
                                 IP address: 192.168.1.23\n\
                                 Subnet mask: 255.255.255.0\n\
                                 Router: 192.168.1.1\n\
                                 IPv6: Automatic\n\
                                 IPv6 IP address: none\n";

pub const MAC_IDLE_INFO: &str = "DHCP Configuration\n\
                                 IP address: none\n\
                                 IPv6 IP address: none\n";

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A macOS host whose Wi-Fi service is up and resolves through `dns_output`.
pub fn mac_host(dns_output: &str) -> (Dispatcher, FakeRunner) {
    let runner = FakeRunner::new()
        .on("-listallnetworkservices", MAC_SERVICES)
        .on("-getinfo Wi-Fi", MAC_WIFI_INFO)
        .on("-getinfo USB", MAC_IDLE_INFO)
        .on("-getdnsservers", dns_output);
    let dispatcher = Dispatcher::new(Platform::MacOS, Box::new(runner.clone()));
    (dispatcher, runner)
}

/// A Linux host with loopback, one wired link and a docker bridge.
pub fn linux_host(runner: FakeRunner) -> Dispatcher {
    let links = StaticLinks(vec![
        link("lo", true, false),
        link("eth0", true, true),
        link("docker0", true, false),
    ]);
    Dispatcher::with_strategy(Box::new(LinuxDns::new(Box::new(runner), Box::new(links))))
}

/// A host described directly by its interfaces and per-interface DNS output.
pub struct Snapshot {
    pub interfaces: Vec<NetworkInterface>,
    pub dns: HashMap<String, String>,
}

impl DnsPlatform for Snapshot {
    fn platform(&self) -> Platform {
        Platform::MacOS
    }

    fn list_interfaces(&self) -> Result<Vec<NetworkInterface>> {
        Ok(self.interfaces.clone())
    }

    fn active_interface(&self) -> Result<NetworkInterface> {
        self.interfaces
            .iter()
            .find(|i| i.is_active)
            .cloned()
            .ok_or(DnsError::NoActiveInterface)
    }

    fn read_dns(&self, interface: &str) -> Result<String> {
        Ok(self.dns.get(interface).cloned().unwrap_or_default())
    }

    fn set_dns(&self, _interface: &str, _addresses: &[String]) -> Result<()> {
        Ok(())
    }

    fn clear_dns(&self, _interface: &str) -> Result<()> {
        Ok(())
    }
}

/// en0 on Wi-Fi and up, en1 wired and down.
pub fn en0_en1(en0_dns: &str) -> Dispatcher {
    let snapshot = Snapshot {
        interfaces: vec![
            NetworkInterface::new("en0", true, InterfaceKind::WiFi),
            NetworkInterface::new("en1", false, InterfaceKind::Ethernet),
        ],
        dns: HashMap::from([("en0".to_string(), en0_dns.to_string())]),
    };
    Dispatcher::with_strategy(Box::new(snapshot))
}
