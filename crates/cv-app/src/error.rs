//! Session error taxonomy.
//!
//! None of these are fatal. Transport and logical failures are logged and
//! swallowed by the controller; index errors are not surfaced at all.

use cv_core::JsonValidationResult;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The collaborator call itself failed (rejected, channel gone, I/O).
    #[error("host call failed: {0}")]
    Transport(#[source] anyhow::Error),

    /// The collaborator answered with `success = false`.
    #[error("{0}")]
    Logical(String),

    /// Well-formed validator answer reporting invalid JSON.
    #[error("invalid JSON: {message}")]
    Validation {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("session is closed")]
    Closed,
}

impl SessionError {
    /// `None` when the result is valid.
    pub fn from_validation(result: &JsonValidationResult) -> Option<Self> {
        if result.is_valid {
            return None;
        }
        Some(Self::Validation {
            message: result
                .error_message
                .clone()
                .unwrap_or_else(|| "unknown error".to_string()),
            line: result.line,
            column: result.column,
        })
    }

    /// Whether the presentation layer should hear about this failure.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, Self::IndexOutOfRange { .. })
    }
}
