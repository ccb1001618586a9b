use crate::terminal::colors;
use colored::*;
use dnswitch_common::network::interface::NetworkInterface;
use dnswitch_common::network::provider::DnsObservation;

type Detail = (String, ColoredString);

pub fn join_addresses(addresses: &[String]) -> String {
    addresses.join(", ")
}

pub fn interface_to_details(interface: &NetworkInterface) -> Vec<Detail> {
    let status: ColoredString = if interface.is_active {
        "active".color(colors::ACTIVE)
    } else {
        "inactive".color(colors::INACTIVE)
    };

    let mut details: Vec<Detail> = vec![
        ("Kind".to_string(), interface.kind.to_string().normal()),
        ("Status".to_string(), status),
    ];
    if interface.display_name != interface.system_name {
        details.insert(
            0,
            ("Name".to_string(), interface.display_name.as_str().normal()),
        );
    }
    details
}

/// Provider name coloured by whether it was recognised.
pub fn provider_name(observation: &DnsObservation) -> ColoredString {
    if observation.is_unknown() {
        observation.provider.as_str().color(colors::UNKNOWN)
    } else {
        observation.provider.as_str().color(colors::PRIMARY).bold()
    }
}

pub fn observed_addresses(observation: &DnsObservation) -> ColoredString {
    join_addresses(&observation.addresses).color(colors::IPV4_ADDR)
}
