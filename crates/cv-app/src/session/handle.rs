use tokio::sync::{mpsc, oneshot, watch};

use super::{SessionCommand, ViewState};
use crate::error::SessionError;

/// Cloneable front door to a running session.
///
/// 运行中会话的可克隆入口。
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<SessionCommand>,
    view: watch::Receiver<ViewState>,
}

impl SessionHandle {
    pub(crate) fn new(
        commands: mpsc::UnboundedSender<SessionCommand>,
        view: watch::Receiver<ViewState>,
    ) -> Self {
        Self { commands, view }
    }

    pub fn send(&self, command: SessionCommand) -> Result<(), SessionError> {
        self.commands.send(command).map_err(|_| SessionError::Closed)
    }

    pub fn select(&self, index: usize) -> Result<(), SessionError> {
        self.send(SessionCommand::Select(index))
    }

    pub fn edit(&self, content: impl Into<String>) -> Result<(), SessionError> {
        self.send(SessionCommand::Edit(content.into()))
    }

    pub fn save(&self) -> Result<(), SessionError> {
        self.send(SessionCommand::Save)
    }

    pub fn search(&self, query: impl Into<String>) -> Result<(), SessionError> {
        self.send(SessionCommand::Search(query.into()))
    }

    pub fn delete(&self, index: usize) -> Result<(), SessionError> {
        self.send(SessionCommand::Delete(index))
    }

    pub fn clear_all(&self) -> Result<(), SessionError> {
        self.send(SessionCommand::ClearAll)
    }

    /// Latest published view, without waiting for queued commands.
    pub fn current(&self) -> ViewState {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.view.clone()
    }

    /// View after every command sent so far has been handled.
    pub async fn sync(&self) -> Result<ViewState, SessionError> {
        let (tx, rx) = oneshot::channel();
        self.send(SessionCommand::Sync(tx))?;
        rx.await.map_err(|_| SessionError::Closed)
    }

    /// Stop the session. The pending editing timer, if any, is cancelled.
    pub fn shutdown(&self) -> Result<(), SessionError> {
        self.send(SessionCommand::Shutdown)
    }
}
