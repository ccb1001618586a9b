#![cfg(test)]
use dnswitch_common::DnsError;
use dnswitch_common::network::platform::Platform;
use dnswitch_core::testing::FakeRunner;
use dnswitch_core::{Dispatcher, ProviderRegistry, probe, reader, writer};

use crate::util::{en0_en1, linux_host, mac_host, strings};

/*************************************************************
                     Reading and identifying
**************************************************************/

#[test]
fn en0_on_403_is_identified() {
    let dispatcher = en0_en1("10.202.10.202 10.202.10.102");
    let registry = ProviderRegistry::with_defaults();

    let interfaces = probe::list_interfaces(&dispatcher).unwrap();
    assert_eq!(interfaces.len(), 2);
    let active = probe::active_interface(&dispatcher).unwrap();
    assert_eq!(active.system_name, "en0");

    let observation = reader::observe(&dispatcher, &registry, &active.system_name);
    assert_eq!(observation.provider, "403");
    assert_eq!(observation.addresses, strings(&["10.202.10.202", "10.202.10.102"]));
}

#[test]
fn every_default_provider_matches_in_either_order() {
    let registry = ProviderRegistry::with_defaults();
    for provider in registry.providers() {
        let mut reversed = provider.addresses.clone();
        reversed.reverse();
        for order in [&provider.addresses, &reversed] {
            let dispatcher = en0_en1(&order.join("\n"));
            let observation = reader::observe(&dispatcher, &registry, "en0");
            assert_eq!(observation.provider, provider.name, "{order:?}");
        }
    }
}

#[test]
fn mac_wifi_on_403_is_identified() {
    let (dispatcher, _) = mac_host("10.202.10.202\n10.202.10.102\n");
    let registry = ProviderRegistry::with_defaults();

    let interface = probe::active_interface(&dispatcher).unwrap();
    assert_eq!(interface.system_name, "Wi-Fi");

    let observation = reader::observe(&dispatcher, &registry, &interface.system_name);
    assert_eq!(observation.provider, "403");
    assert_eq!(observation.addresses, strings(&["10.202.10.202", "10.202.10.102"]));
}

#[test]
fn public_resolver_is_unknown() {
    let (dispatcher, _) = mac_host("8.8.8.8\n");
    let registry = ProviderRegistry::with_defaults();

    let observation = reader::observe(&dispatcher, &registry, "Wi-Fi");
    assert!(observation.is_unknown());
    assert_eq!(observation.addresses, strings(&["8.8.8.8"]));
}

#[test]
fn identification_ignores_address_order() {
    let registry = ProviderRegistry::with_defaults();
    for output in ["185.51.200.2 178.22.122.100", "178.22.122.100\n185.51.200.2"] {
        let (dispatcher, _) = mac_host(output);
        let observation = reader::observe(&dispatcher, &registry, "Wi-Fi");
        assert_eq!(observation.provider, "Shecan", "{output:?}");
    }
}

#[test]
fn repeated_servers_are_reported_once() {
    let (dispatcher, _) = mac_host("78.157.42.101\n78.157.42.101\n78.157.42.100\n");
    let registry = ProviderRegistry::with_defaults();

    let observation = reader::observe(&dispatcher, &registry, "Wi-Fi");
    assert_eq!(observation.provider, "electrotm");
    assert_eq!(observation.addresses, strings(&["78.157.42.101", "78.157.42.100"]));
}

#[test]
fn failed_read_degrades_to_unknown() {
    let runner = FakeRunner::new().fail_on(
        "resolv.conf",
        1,
        "cat: /etc/resolv.conf: No such file or directory",
    );
    let dispatcher = linux_host(runner);
    let registry = ProviderRegistry::with_defaults();

    let observation = reader::observe(&dispatcher, &registry, "eth0");
    assert!(observation.is_unknown());
    assert!(observation.addresses.is_empty());
}

/*************************************************************
                        Writing
**************************************************************/

#[test]
fn applying_a_provider_writes_resolv_conf() {
    let runner = FakeRunner::new();
    let dispatcher = linux_host(runner.clone());
    let registry = ProviderRegistry::with_defaults();

    let interface = probe::active_interface(&dispatcher).unwrap();
    assert_eq!(interface.system_name, "eth0");

    let applied = writer::apply_provider(&dispatcher, &registry, &interface.system_name, "Begzar")
        .unwrap()
        .unwrap();
    assert_eq!(applied.addresses, strings(&["185.55.226.26", "185.55.225.25"]));

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "sudo");
    assert!(calls[0].args[2].contains("nameserver 185.55.226.26\nnameserver 185.55.225.25\n"));
}

#[test]
fn unknown_provider_runs_nothing() {
    let (dispatcher, runner) = mac_host("");
    let registry = ProviderRegistry::with_defaults();

    let applied = writer::apply_provider(&dispatcher, &registry, "Wi-Fi", "Cloudflare").unwrap();
    assert!(applied.is_none());
    assert_eq!(runner.call_count(), 0);
}

#[test]
fn clearing_twice_issues_two_identical_commands() {
    let (dispatcher, runner) = mac_host("");

    writer::clear_dns(&dispatcher, "Wi-Fi").unwrap();
    writer::clear_dns(&dispatcher, "Wi-Fi").unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
    assert_eq!(calls[0].args, strings(&["-setdnsservers", "Wi-Fi", "Empty"]));
}

#[test]
fn rejected_write_carries_the_tool_output() {
    let runner = FakeRunner::new().fail_on("-setdnsservers", 1, "You must be root to do that.\n");
    let dispatcher = Dispatcher::new(Platform::MacOS, Box::new(runner));

    let err = writer::set_dns(&dispatcher, "Wi-Fi", &strings(&["1.1.1.1"])).unwrap_err();
    match err {
        DnsError::ExternalCommandFailed { diagnostic } => {
            assert!(diagnostic.contains("You must be root to do that."), "{diagnostic}")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/*************************************************************
                     Unsupported hosts
**************************************************************/

#[test]
fn unsupported_host_never_touches_the_os() {
    let runner = FakeRunner::new();
    let dispatcher = Dispatcher::new(Platform::Unsupported, Box::new(runner.clone()));
    let registry = ProviderRegistry::with_defaults();

    assert!(matches!(
        probe::active_interface(&dispatcher),
        Err(DnsError::UnsupportedPlatform { .. })
    ));
    assert!(reader::observe(&dispatcher, &registry, "en0").is_unknown());
    assert!(matches!(
        writer::set_dns(&dispatcher, "en0", &[]),
        Err(DnsError::UnsupportedPlatform { .. })
    ));
    assert!(matches!(
        writer::clear_dns(&dispatcher, "en0"),
        Err(DnsError::UnsupportedPlatform { .. })
    ));
    assert_eq!(runner.call_count(), 0);
}
