//! # dnswitch core
//!
//! Platform abstraction for network-interface discovery and DNS configuration.
//!
//! ## Layout
//! * **[`command`]**: The narrow "run an external program" capability and its real implementation.
//! * **[`platform`]**: One [`platform::DnsPlatform`] strategy per operating system (Windows, macOS, Linux).
//! * **[`dispatcher`]**: Selects a strategy once at startup and routes every operation through it.
//! * **[`probe`]**, **[`reader`]**, **[`writer`]**: Interface discovery, DNS observation, and DNS changes.
//! * **[`registry`]**, **[`store`]**: Known providers and their on-disk mirror.
//!
//! Everything that touches the OS goes through a [`command::CommandRunner`], so the
//! whole crate can be driven by `testing::FakeRunner` (behind the `testing`
//! feature) in tests.

pub mod command;
pub mod dispatcher;
pub mod platform;
pub mod probe;
pub mod reader;
pub mod registry;
pub mod store;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod writer;

pub use dispatcher::Dispatcher;
pub use registry::ProviderRegistry;
