//! Port interfaces for the application layer
//!
//! Ports define the contract between the session logic and the host
//! collaborator that owns capture, persistence and JSON processing. Every
//! outbound call is a suspension point; implementations report transport
//! failures as `Err` and logical refusals inside `OperationResult`.

mod clipboard_writer;
mod clock;
mod confirm;
mod entry_admin;
mod history;
mod json_processor;
mod sample_seeder;

pub use clipboard_writer::ClipboardWriterPort;
pub use clock::ClockPort;
pub use confirm::ConfirmPort;
pub use entry_admin::EntryAdminPort;
pub use history::HistoryPort;
pub use json_processor::JsonProcessorPort;
pub use sample_seeder::SampleSeederPort;
