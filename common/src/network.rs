//! Network-facing value types: interfaces, platforms and DNS providers.

pub mod interface;
pub mod platform;
pub mod provider;
