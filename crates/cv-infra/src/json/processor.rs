use anyhow::{Context, Result};
use async_trait::async_trait;
use cv_core::ports::JsonProcessorPort;
use cv_core::JsonValidationResult;
use serde_json::Value;
use tracing::debug;

/// JSON validation and reformatting backed by serde_json.
///
/// 基于 serde_json 的 JSON 校验与格式化。
///
/// Output keeps object key order from the input. Pretty printing uses a
/// two-space indent.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerdeJsonProcessor;

impl SerdeJsonProcessor {
    pub fn new() -> Self {
        Self
    }

    fn parse(text: &str) -> Result<Value> {
        serde_json::from_str(text).map_err(|e| anyhow::anyhow!("Invalid JSON: {e}"))
    }

    /// Synchronous form of [`JsonProcessorPort::validate`].
    pub fn validate_text(text: &str) -> JsonValidationResult {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => {
                // Serializing a parsed Value cannot fail; fall back to the input regardless.
                let formatted =
                    serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string());
                JsonValidationResult::valid(formatted, value)
            }
            Err(err) => {
                debug!(line = err.line(), column = err.column(), "json parse failed");
                JsonValidationResult::invalid(
                    format!("JSON Parse Error: {err}"),
                    Some(err.line()),
                    Some(err.column()),
                )
            }
        }
    }
}

#[async_trait]
impl JsonProcessorPort for SerdeJsonProcessor {
    async fn validate(&self, text: &str) -> Result<JsonValidationResult> {
        Ok(Self::validate_text(text))
    }

    async fn format(&self, text: &str) -> Result<String> {
        let value = Self::parse(text)?;
        serde_json::to_string_pretty(&value).context("Failed to format JSON")
    }

    async fn minify(&self, text: &str) -> Result<String> {
        let value = Self::parse(text)?;
        serde_json::to_string(&value).context("Failed to minify JSON")
    }
}
