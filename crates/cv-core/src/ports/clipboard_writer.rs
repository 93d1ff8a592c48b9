use anyhow::Result;
use async_trait::async_trait;

/// Writes text back to the system clipboard.
#[async_trait]
pub trait ClipboardWriterPort: Send + Sync {
    async fn copy_text(&self, text: &str) -> Result<()>;
}
