//! Shared models, configuration and the error taxonomy used by every
//! `dnswitch` crate.

pub mod config;
pub mod error;
pub mod network;
pub mod utils;

pub use error::{DnsError, Result};
