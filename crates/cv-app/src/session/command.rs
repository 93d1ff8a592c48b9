use cv_core::HostEvent;
use tokio::sync::oneshot;

use super::ViewState;

/// Everything the session reacts to, in arrival order.
///
/// 会话按到达顺序处理的全部输入。
#[derive(Debug)]
pub enum SessionCommand {
    /// Pushed by the host.
    Host(HostEvent),

    Select(usize),
    Edit(String),
    Save,
    Validate,
    Format,
    Minify,
    SetAutoValidate(bool),
    Search(String),
    /// Copy the entry at this index to the system clipboard.
    Copy(usize),
    Delete(usize),
    ClearAll,
    RefreshHistory,
    SeedSamples,

    /// Reply with the view once every earlier command has been handled.
    Sync(oneshot::Sender<ViewState>),
    Shutdown,
}

impl SessionCommand {
    /// Host pushes do not reset the last reported user-facing error.
    pub fn is_user_action(&self) -> bool {
        !matches!(self, Self::Host(_) | Self::Sync(_) | Self::Shutdown)
    }
}
