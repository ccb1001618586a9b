//! On-disk mirror of the custom providers.
//!
//! The file is a JSON object mapping provider name to its address list. Only
//! custom providers are written; the built-in ones are never persisted.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use dnswitch_common::{DnsError, Result};
use tracing::debug;

pub type ProviderTable = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone)]
pub struct ProviderStore {
    path: PathBuf,
}

impl ProviderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the saved providers. A missing file is an empty table.
    pub fn load(&self) -> Result<ProviderTable> {
        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no providers file yet");
                return Ok(ProviderTable::new());
            }
            Err(err) => return Err(DnsError::persistence(&self.path, err)),
        };

        serde_json::from_slice(&data).map_err(|err| DnsError::persistence(&self.path, err))
    }

    /// Replaces the file with `table`.
    ///
    /// Writes a `.tmp` sibling first and renames it over the target, so an
    /// interrupted save leaves the previous file intact.
    pub fn save(&self, table: &ProviderTable) -> Result<()> {
        let json =
            serde_json::to_vec_pretty(table).map_err(|err| DnsError::persistence(&self.path, err))?;

        let tmp_path = self.path.with_extension("tmp");
        std::fs::write(&tmp_path, &json).map_err(|err| DnsError::persistence(&tmp_path, err))?;
        std::fs::rename(&tmp_path, &self.path)
            .map_err(|err| DnsError::persistence(&self.path, err))?;

        debug!(path = %self.path.display(), providers = table.len(), "providers saved");
        Ok(())
    }
}
