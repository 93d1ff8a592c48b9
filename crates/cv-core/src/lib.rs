//! # cv-core
//!
//! Core domain models and business logic for clipview.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the clipboard entry model, the JSON search filter, the editing-lock
//! transition table and the ports through which the host collaborator is reached.

// Public module exports
pub mod clipboard;
pub mod config;
pub mod editing;
pub mod ids;
pub mod json;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipboardEntry, ContentType, HostEvent, OperationResult};
pub use config::AppConfig;
pub use editing::{EditingEvent, EditingState, EditingStateMachine};
pub use ids::EntryId;
pub use json::{FilterOutcome, JsonValidationResult};
