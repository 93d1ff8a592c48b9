use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ContentType;
use crate::ids::EntryId;

/// One captured clipboard payload with its metadata.
///
/// 一条捕获的剪贴板内容及其元数据。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipboardEntry {
    pub id: EntryId,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub content_type: ContentType,
}

impl ClipboardEntry {
    pub fn new(id: EntryId, content: String, timestamp: DateTime<Utc>) -> Self {
        let content_type = ContentType::detect(&content);
        Self {
            id,
            content,
            timestamp,
            content_type,
        }
    }

    /// Build an entry from a millisecond Unix timestamp, as handed out by `ClockPort`.
    pub fn captured_at_ms(id: EntryId, content: String, now_ms: i64) -> Self {
        let timestamp = DateTime::<Utc>::from_timestamp_millis(now_ms).unwrap_or_default();
        Self::new(id, content, timestamp)
    }
}
