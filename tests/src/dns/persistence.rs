#![cfg(test)]
use std::fs;

use dnswitch_common::network::platform::Platform;
use dnswitch_core::store::ProviderStore;
use dnswitch_core::{Dispatcher, ProviderRegistry, reader};
use dnswitch_core::testing::FakeRunner;
use tempfile::TempDir;

use crate::util::strings;

fn store_in(dir: &TempDir) -> ProviderStore {
    ProviderStore::new(dir.path().join("custom_dns.json"))
}

#[test]
fn custom_provider_survives_a_restart() {
    let dir = TempDir::new().unwrap();

    let mut registry = ProviderRegistry::open(store_in(&dir));
    registry.add("Cloudflare", "1.1.1.1", "1.0.0.1").unwrap();

    let reopened = ProviderRegistry::open(store_in(&dir));
    assert_eq!(
        reopened.addresses("Cloudflare"),
        Some(strings(&["1.1.1.1", "1.0.0.1"]).as_slice())
    );
    assert_eq!(reopened.custom_names(), strings(&["Cloudflare"]));
}

#[test]
fn defaults_are_never_written() {
    let dir = TempDir::new().unwrap();

    let mut registry = ProviderRegistry::open(store_in(&dir));
    registry.add("Quad9", "9.9.9.9", "149.112.112.112").unwrap();

    let saved = fs::read_to_string(dir.path().join("custom_dns.json")).unwrap();
    assert!(saved.contains("Quad9"));
    for name in ["403", "Shecan", "Begzar", "electrotm"] {
        assert!(!saved.contains(&format!("\"{name}\"")), "{name} leaked into {saved}");
    }
}

#[test]
fn removal_is_persisted() {
    let dir = TempDir::new().unwrap();

    let mut registry = ProviderRegistry::open(store_in(&dir));
    registry.add("Cloudflare", "1.1.1.1", "1.0.0.1").unwrap();
    assert!(registry.remove("Cloudflare").unwrap());

    let reopened = ProviderRegistry::open(store_in(&dir));
    assert!(reopened.addresses("Cloudflare").is_none());
    assert!(reopened.custom_names().is_empty());
}

#[test]
fn default_names_cannot_be_removed() {
    let dir = TempDir::new().unwrap();
    let mut registry = ProviderRegistry::open(store_in(&dir));

    assert!(ProviderRegistry::is_default("Shecan"));
    assert!(!ProviderRegistry::is_default("shecan"));
    assert!(!registry.remove("Shecan").unwrap());
    assert!(registry.addresses("Shecan").is_some());
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("custom_dns.json"), "{ not json").unwrap();

    let registry = ProviderRegistry::open(store_in(&dir));
    assert!(registry.custom_names().is_empty());
    assert_eq!(
        registry.ordered_names(),
        strings(&["403", "Shecan", "Begzar", "electrotm"])
    );
}

#[test]
fn loaded_custom_provider_is_identified() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("custom_dns.json"),
        r#"{ "Cloudflare": ["1.1.1.1", "1.0.0.1"] }"#,
    )
    .unwrap();

    let runner = FakeRunner::new().on("-getdnsservers", "1.0.0.1\n");
    let dispatcher = Dispatcher::new(Platform::MacOS, Box::new(runner));
    let registry = ProviderRegistry::open(store_in(&dir));

    let observation = reader::observe(&dispatcher, &registry, "Wi-Fi");
    assert_eq!(observation.provider, "Cloudflare");
}
