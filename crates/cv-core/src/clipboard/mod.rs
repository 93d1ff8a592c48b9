//! Clipboard domain models.
mod content_type;
mod entry;
mod event;
mod operation;

pub use content_type::{ContentType, ContentTypeParseError};
pub use entry::ClipboardEntry;
pub use event::HostEvent;
pub use operation::OperationResult;
