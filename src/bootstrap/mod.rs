//! Process bootstrap: config, tracing and dependency wiring.

pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{resolve_config, ConfigSource};
pub use wiring::{wire, AppRuntime};
