use anyhow::Result;
use async_trait::async_trait;

use crate::clipboard::ClipboardEntry;

/// Read access to the host's stored clipboard history.
///
/// 读取宿主保存的剪贴板历史。
#[async_trait]
pub trait HistoryPort: Send + Sync {
    /// Newest-first, at most `limit` entries.
    async fn fetch_history(&self, limit: usize) -> Result<Vec<ClipboardEntry>>;
}
