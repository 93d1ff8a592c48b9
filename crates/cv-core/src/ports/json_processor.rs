use anyhow::Result;
use async_trait::async_trait;

use crate::json::JsonValidationResult;

/// JSON processing performed by the host.
///
/// 由宿主执行的 JSON 处理。
#[async_trait]
pub trait JsonProcessorPort: Send + Sync {
    /// A well-formed result, valid or not. `Err` only for transport failures.
    async fn validate(&self, text: &str) -> Result<JsonValidationResult>;

    async fn format(&self, text: &str) -> Result<String>;

    async fn minify(&self, text: &str) -> Result<String>;
}
