//! # Console API
//!
//! HTTP client layer for Sensor Console: a thin [`ApiClient`] transport
//! plus one typed client per backend resource family.
//!
//! ## Core Concepts
//!
//! - **ApiClient**: reqwest wrapper bound to one base URL, maps failures
//!   into `ConsoleError`
//! - **EndpointClient**: `/endpoints` CRUD with record decoding and the
//!   `{event:{endpoint:...}}` write envelope
//! - **ScheduleClient**: `/jobs` CRUD, plain objects
//! - **StoreClient**: `/entries` listing plus `/entry/{key}` update/delete
//!

// Module declarations
pub mod client;
pub mod endpoints;
pub mod schedules;
pub mod store;

// Re-export commonly used types at crate root
pub use client::ApiClient;
pub use endpoints::EndpointClient;
pub use schedules::ScheduleClient;
pub use store::StoreClient;

// Re-export core types that are commonly used with the clients
pub use console_core::{ConsoleError, ConsoleResult, Endpoint, Schedule, StoreEntry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
