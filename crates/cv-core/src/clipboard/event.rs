use serde::{Deserialize, Serialize};

use super::ClipboardEntry;

/// Events pushed by the host collaborator.
///
/// 宿主推送的事件。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum HostEvent {
    /// `clipboard-update`: a new live capture.
    ClipboardUpdate(String),
    /// `clipboard-history`: one record replayed from storage.
    ClipboardHistory(ClipboardEntry),
}
