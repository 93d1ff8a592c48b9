//! Runtime side of the editing lock.
//!
//! 编辑锁的运行时部分。
//!
//! Transitions come from [`EditingStateMachine`]; this type owns the single
//! inactivity timer those transitions schedule. The timer task does not touch
//! session state: when it fires it posts a [`LockExpired`] message carrying the
//! generation it was armed for, and the controller feeds that back through
//! [`EditingLock::expire`] on the session's own execution context.

use std::time::Duration;

use cv_core::editing::{EditingAction, EditingEvent, EditingState, EditingStateMachine};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::debug;

/// Posted by the inactivity timer when it runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockExpired {
    pub generation: u64,
}

/// The live inactivity timer. Dropping it cancels the timer.
struct EditSession {
    generation: u64,
    timer: AbortHandle,
}

impl Drop for EditSession {
    fn drop(&mut self) {
        self.timer.abort();
    }
}

pub struct EditingLock {
    state: EditingState,
    idle_timeout: Duration,
    generation: u64,
    session: Option<EditSession>,
    expiry_tx: mpsc::UnboundedSender<LockExpired>,
}

impl EditingLock {
    pub fn new(idle_timeout: Duration, expiry_tx: mpsc::UnboundedSender<LockExpired>) -> Self {
        Self {
            state: EditingState::Idle,
            idle_timeout,
            generation: 0,
            session: None,
            expiry_tx,
        }
    }

    pub fn state(&self) -> EditingState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == EditingState::Editing
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Start or extend the edit session. Must run inside a tokio runtime.
    pub fn touch(&mut self) {
        self.apply(EditingEvent::Edit);
    }

    /// Explicit save: release the lock now.
    pub fn save(&mut self) {
        self.apply(EditingEvent::Save);
    }

    /// Release the lock without a save (list cleared, edited entry gone).
    pub fn reset(&mut self) {
        self.apply(EditingEvent::Reset);
    }

    /// Handle a timer expiry. Returns `true` when the lock was released.
    ///
    /// Expiries from a timer that has since been replaced or cancelled are
    /// ignored: aborting a task cannot recall a message it already sent.
    pub fn expire(&mut self, expired: LockExpired) -> bool {
        let current = self.session.as_ref().map(|s| s.generation);
        if current != Some(expired.generation) {
            debug!(
                generation = expired.generation,
                current = ?current,
                "ignoring stale editing timer"
            );
            return false;
        }
        self.session = None;
        self.apply(EditingEvent::IdleTimeout);
        true
    }

    fn apply(&mut self, event: EditingEvent) {
        let (next, action) = EditingStateMachine::transition(self.state, event);
        match action {
            Some(EditingAction::RestartTimer) => self.restart_timer(),
            Some(EditingAction::CancelTimer) => self.session = None,
            None => {}
        }
        if next != self.state {
            debug!(from = ?self.state, to = ?next, ?event, "editing lock transition");
        }
        self.state = next;
    }

    fn restart_timer(&mut self) {
        // Drop the old session first so at most one timer is ever live.
        self.session = None;
        self.generation += 1;

        // The window runs from the edit, not from when the task is first polled.
        let deadline = tokio::time::Instant::now() + self.idle_timeout;
        let generation = self.generation;
        let tx = self.expiry_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send(LockExpired { generation });
        });

        self.session = Some(EditSession {
            generation,
            timer: handle.abort_handle(),
        });
    }
}
