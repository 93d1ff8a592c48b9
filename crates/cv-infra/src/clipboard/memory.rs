use anyhow::Result;
use async_trait::async_trait;
use cv_core::ports::ClipboardWriterPort;
use tokio::sync::Mutex;
use tracing::debug;

/// Clipboard sink that keeps the last written text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contents(&self) -> Option<String> {
        self.contents.lock().await.clone()
    }
}

#[async_trait]
impl ClipboardWriterPort for MemoryClipboard {
    async fn copy_text(&self, text: &str) -> Result<()> {
        *self.contents.lock().await = Some(text.to_string());
        debug!(len = text.len(), "clipboard written");
        Ok(())
    }
}
