#[cfg(unix)]
pub mod interface;
