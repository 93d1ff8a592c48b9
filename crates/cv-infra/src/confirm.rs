use async_trait::async_trait;
use cv_core::ports::ConfirmPort;
use tracing::info;

/// Answers every confirmation prompt with a fixed choice.
///
/// 对所有确认提示返回固定答案。
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm {
    answer: bool,
}

impl AutoConfirm {
    pub fn new(answer: bool) -> Self {
        Self { answer }
    }
}

#[async_trait]
impl ConfirmPort for AutoConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        info!(prompt, answer = self.answer, "auto-confirmed");
        self.answer
    }
}
