use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DnsError>;

/// Everything that can go wrong while probing interfaces or touching DNS state.
///
/// Each variant renders as a single line suitable for showing to the operator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DnsError {
    /// The running OS has no DNS strategy. No external command was attempted.
    #[error("OS {os} is not supported")]
    UnsupportedPlatform { os: String },

    /// An external utility could not be launched or exited non-zero.
    #[error("external command failed: {diagnostic}")]
    ExternalCommandFailed { diagnostic: String },

    #[error("failed to enumerate network interfaces: {diagnostic}")]
    InterfaceEnumerationFailed { diagnostic: String },

    #[error("no active network interface found")]
    NoActiveInterface,

    #[error("at least one DNS server address is required")]
    EmptyAddressList,

    #[error("failed to persist providers to {}: {diagnostic}", path.display())]
    Persistence { path: PathBuf, diagnostic: String },
}

impl DnsError {
    pub fn command_failed(diagnostic: impl Into<String>) -> Self {
        Self::ExternalCommandFailed {
            diagnostic: diagnostic.into(),
        }
    }

    pub fn enumeration_failed(diagnostic: impl Into<String>) -> Self {
        Self::InterfaceEnumerationFailed {
            diagnostic: diagnostic.into(),
        }
    }

    pub fn persistence(path: impl Into<PathBuf>, diagnostic: impl ToString) -> Self {
        Self::Persistence {
            path: path.into(),
            diagnostic: diagnostic.to_string(),
        }
    }
}
