//! Built-in and operator-defined DNS providers.

use std::collections::BTreeMap;

use dnswitch_common::Result;
use dnswitch_common::network::provider::Provider;
use tracing::{debug, warn};

use crate::store::{ProviderStore, ProviderTable};

/// Providers shipped with the tool, in menu order.
pub const DEFAULT_PROVIDERS: [(&str, [&str; 2]); 4] = [
    ("403", ["10.202.10.202", "10.202.10.102"]),
    ("Shecan", ["178.22.122.100", "185.51.200.2"]),
    ("Begzar", ["185.55.226.26", "185.55.225.25"]),
    ("electrotm", ["78.157.42.101", "78.157.42.100"]),
];

/// Name → address list lookup, optionally mirrored to a [`ProviderStore`].
///
/// Keys are case sensitive. A custom provider added under a built-in name
/// replaces the built-in entry for this run, but is never persisted because
/// only non-default names are saved.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    table: BTreeMap<String, Vec<String>>,
    store: Option<ProviderStore>,
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ProviderRegistry {
    /// Built-in providers only, not backed by a file.
    pub fn with_defaults() -> Self {
        let table = DEFAULT_PROVIDERS
            .iter()
            .map(|(name, addrs)| {
                (
                    name.to_string(),
                    addrs.iter().map(|a| a.to_string()).collect(),
                )
            })
            .collect();
        Self { table, store: None }
    }

    /// Built-in providers plus whatever `store` holds; later changes are saved back to it.
    ///
    /// An unreadable file is reported and treated as empty so the tool can still start.
    pub fn open(store: ProviderStore) -> Self {
        let mut registry = Self::with_defaults();
        match store.load() {
            Ok(custom) => registry.table.extend(custom),
            Err(err) => warn!("Error loading custom DNS: {err}"),
        }
        registry.store = Some(store);
        registry
    }

    /// True for the built-in names, whatever is currently stored under them.
    pub fn is_default(name: &str) -> bool {
        DEFAULT_PROVIDERS.iter().any(|(default, _)| *default == name)
    }

    /// Built-in names in canonical order, then custom names.
    pub fn ordered_names(&self) -> Vec<String> {
        let defaults = DEFAULT_PROVIDERS
            .iter()
            .map(|(name, _)| name.to_string())
            .filter(|name| self.table.contains_key(name));
        defaults.chain(self.custom_names()).collect()
    }

    pub fn custom_names(&self) -> Vec<String> {
        self.table
            .keys()
            .filter(|name| !Self::is_default(name))
            .cloned()
            .collect()
    }

    pub fn addresses(&self, name: &str) -> Option<&[String]> {
        self.table.get(name).map(Vec::as_slice)
    }

    pub fn provider(&self, name: &str) -> Option<Provider> {
        self.table
            .get(name)
            .map(|addresses| Provider::new(name, addresses.clone()))
    }

    /// Every provider in [`Self::ordered_names`] order.
    pub fn providers(&self) -> Vec<Provider> {
        self.ordered_names()
            .iter()
            .filter_map(|name| self.provider(name))
            .collect()
    }

    /// Inserts or overwrites `name` with two addresses, then persists.
    pub fn add(&mut self, name: &str, first: &str, second: &str) -> Result<()> {
        self.insert(name, vec![first.to_string(), second.to_string()])
    }

    pub fn insert(&mut self, name: &str, addresses: Vec<String>) -> Result<()> {
        if Self::is_default(name) {
            warn!(name, "custom provider replaces a built-in provider for this session");
        }
        self.table.insert(name.to_string(), addresses);
        debug!(name, "provider saved");
        self.persist()
    }

    /// Removes a custom provider and persists. Built-in names are refused.
    ///
    /// Returns whether anything was removed; unknown names are a no-op.
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        if Self::is_default(name) {
            return Ok(false);
        }
        if self.table.remove(name).is_none() {
            return Ok(false);
        }
        debug!(name, "provider removed");
        self.persist()?;
        Ok(true)
    }

    /// The non-default part of the table, as written to disk.
    pub fn custom_table(&self) -> ProviderTable {
        self.table
            .iter()
            .filter(|(name, _)| !Self::is_default(name))
            .map(|(name, addrs)| (name.clone(), addrs.clone()))
            .collect()
    }

    fn persist(&self) -> Result<()> {
        match &self.store {
            Some(store) => store.save(&self.custom_table()),
            None => Ok(()),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
