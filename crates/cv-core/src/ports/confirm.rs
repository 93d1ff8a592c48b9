use async_trait::async_trait;

/// Asks the user to confirm a destructive action.
///
/// 请求用户确认破坏性操作。
#[async_trait]
pub trait ConfirmPort: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}
