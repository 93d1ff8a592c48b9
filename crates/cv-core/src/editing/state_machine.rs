//! Editing lock state machine.
//!
//! Defines a pure state transition function for the editing lock.

use serde::{Deserialize, Serialize};

/// Inactivity window after the most recent edit.
pub const DEFAULT_IDLE_TIMEOUT_MS: u64 = 3000;

/// Editing lock state.
///
/// 编辑锁状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditingState {
    /// No edit in progress; live clipboard updates are admitted.
    ///
    /// 空闲：接受外部剪贴板更新。
    #[default]
    Idle,
    /// The user is composing; live clipboard updates are dropped.
    ///
    /// 编辑中：丢弃外部剪贴板更新。
    Editing,
}

/// Events that drive the editing lock.
///
/// 驱动编辑锁的事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditingEvent {
    /// Content of the selected entry was changed.
    Edit,
    /// The inactivity timer fired.
    IdleTimeout,
    /// The user saved explicitly.
    Save,
    /// The session is being torn down or the list was cleared.
    Reset,
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditingAction {
    /// Cancel any pending timer and start a fresh inactivity window.
    RestartTimer,
    /// Cancel the pending timer, if any.
    CancelTimer,
}

/// Pure editing lock state machine.
///
/// 纯状态机：不包含副作用。
pub struct EditingStateMachine;

impl EditingStateMachine {
    pub fn transition(
        state: EditingState,
        event: EditingEvent,
    ) -> (EditingState, Option<EditingAction>) {
        match (state, event) {
            (_, EditingEvent::Edit) => (EditingState::Editing, Some(EditingAction::RestartTimer)),
            // The timer is already gone when it fires.
            (EditingState::Editing, EditingEvent::IdleTimeout) => (EditingState::Idle, None),
            (EditingState::Editing, EditingEvent::Save | EditingEvent::Reset) => {
                (EditingState::Idle, Some(EditingAction::CancelTimer))
            }
            (EditingState::Idle, _) => (EditingState::Idle, None),
        }
    }
}
