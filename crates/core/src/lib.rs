//! # Console Core
//!
//! Core models, wire translation, and configuration for Sensor Console.
//!
//! This crate provides the foundation shared by the API clients and the UI:
//!
//! - **Models**: `Endpoint`, `Schedule`, `StoreEntry` and the endpoint wire
//!   record with its encoded-field translation
//! - **Configuration**: TOML-backed `ConsoleConfig` with per-family base URLs
//! - **Errors**: Unified error handling with `ConsoleError` and `ConsoleResult`
//! - **Timestamps**: tolerant parsing and UTC display formatting
//!

pub mod config;
pub mod endpoint;
pub mod error;
pub mod schedule;
pub mod store;
pub mod timestamp;

// Re-export commonly used items at crate root
pub use config::{ApiConfig, CONFIG_PATH_ENV, ConsoleConfig, WindowConfig};
pub use endpoint::{Endpoint, EndpointRecord};
pub use error::{ConsoleError, ConsoleResult, ResultExt};
pub use schedule::{SCHEDULE_FUNC, SCHEDULE_TRIGGER, Schedule};
pub use store::StoreEntry;
pub use timestamp::format_utc;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
