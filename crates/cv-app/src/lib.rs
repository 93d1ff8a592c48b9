//! clipview Application Orchestration Layer
//!
//! This crate owns the session state of the front-end: the entry list and its
//! selection, the editing lock that holds off live clipboard updates while the
//! user types, and the JSON pipeline that validates, reformats and searches
//! the selected entry. Everything runs on one logical execution context, the
//! [`SessionController`] actor.

pub mod deps;
pub mod editing_lock;
pub mod error;
pub mod pipeline;
pub mod session;
pub mod store;

pub use deps::SessionDeps;
pub use editing_lock::{EditingLock, LockExpired};
pub use error::SessionError;
pub use pipeline::{JsonPipelineAdapter, ToolbarAction};
pub use session::{SessionCommand, SessionController, SessionHandle, ViewState};
pub use store::{EntryListStore, Inspection};
