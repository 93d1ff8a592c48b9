//! In-process host for clipview.
//!
//! Implements every `cv-core` port without a desktop shell: JSON processing
//! through serde_json, an in-memory history store that pushes capture events,
//! a memory clipboard sink and the TOML config loader.

pub mod clipboard;
pub mod config;
pub mod confirm;
pub mod host;
pub mod json;
pub mod time;

pub use clipboard::MemoryClipboard;
pub use confirm::AutoConfirm;
pub use host::InMemoryHost;
pub use json::SerdeJsonProcessor;
pub use time::SystemClock;
