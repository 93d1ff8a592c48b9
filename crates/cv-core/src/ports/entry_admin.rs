use anyhow::Result;
use async_trait::async_trait;

use crate::clipboard::OperationResult;
use crate::ids::EntryId;

/// Destructive operations on stored entries.
///
/// 对已保存条目的破坏性操作。
///
/// # Behavior / 行为
/// - `Err` means the request never completed (transport failure).
/// - `Ok` with `success = false` means the host refused or failed to apply it.
#[async_trait]
pub trait EntryAdminPort: Send + Sync {
    async fn delete_entry(&self, id: EntryId) -> Result<OperationResult>;

    async fn clear_all(&self) -> Result<OperationResult>;
}
