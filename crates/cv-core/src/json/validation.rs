use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of validating a piece of text as JSON.
///
/// JSON 校验结果。
///
/// Produced by the host validator. `line`/`column` are 1-based and only set
/// for parse failures that carry a position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JsonValidationResult {
    pub is_valid: bool,
    pub error_message: Option<String>,
    pub formatted_content: Option<String>,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub parsed_value: Option<Value>,
}

impl JsonValidationResult {
    pub fn valid(formatted_content: String, parsed_value: Value) -> Self {
        Self {
            is_valid: true,
            formatted_content: Some(formatted_content),
            parsed_value: Some(parsed_value),
            ..Self::default()
        }
    }

    pub fn invalid(
        error_message: impl Into<String>,
        line: Option<usize>,
        column: Option<usize>,
    ) -> Self {
        Self {
            is_valid: false,
            error_message: Some(error_message.into()),
            line,
            column,
            ..Self::default()
        }
    }
}
