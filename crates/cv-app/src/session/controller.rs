//! Session controller actor.
//!
//! 会话控制器（actor）。
//!
//! One task owns the store, the editing lock and the pipeline. Each mailbox
//! (timer expiries, user commands, host pushes) is drained in arrival order;
//! when several are ready, expiries go first, then commands, then host
//! pushes. Host calls are awaited inline, so anything that arrives meanwhile
//! waits and then runs against whatever state the finished call left behind.
//! Results of in-flight host calls are not checked for staleness.
//!
//! The session ends when every [`SessionHandle`] is gone or on `Shutdown`,
//! whether or not the host is still pushing.

use std::sync::Arc;
use std::time::Duration;

use cv_core::ports::{ClipboardWriterPort, HistoryPort, SampleSeederPort};
use cv_core::{AppConfig, HostEvent};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{SessionCommand, SessionHandle, ViewState};
use crate::deps::SessionDeps;
use crate::editing_lock::{EditingLock, LockExpired};
use crate::error::SessionError;
use crate::pipeline::JsonPipelineAdapter;
use crate::store::EntryListStore;

pub struct SessionController {
    store: EntryListStore,
    pipeline: JsonPipelineAdapter,
    history: Arc<dyn HistoryPort>,
    clipboard: Arc<dyn ClipboardWriterPort>,
    seeder: Arc<dyn SampleSeederPort>,
    history_limit: usize,
    auto_validate: bool,
    last_error: Option<String>,
    revision: u64,
    commands: mpsc::UnboundedReceiver<SessionCommand>,
    host_events: mpsc::UnboundedReceiver<HostEvent>,
    host_open: bool,
    expiries: mpsc::UnboundedReceiver<LockExpired>,
    view_tx: watch::Sender<ViewState>,
}

impl SessionController {
    /// Spawn the session task. `host_events` is polled by the same task.
    pub fn spawn(
        deps: SessionDeps,
        config: &AppConfig,
        host_events: mpsc::UnboundedReceiver<HostEvent>,
    ) -> (SessionHandle, JoinHandle<()>) {
        let (command_tx, commands) = mpsc::unbounded_channel();
        let (expiry_tx, expiries) = mpsc::unbounded_channel();
        let (view_tx, view_rx) = watch::channel(ViewState::empty(config.session.auto_validate));

        let lock = EditingLock::new(
            Duration::from_millis(config.editing.idle_timeout_ms),
            expiry_tx,
        );
        let store = EntryListStore::new(lock, deps.clock, deps.entry_admin, deps.confirm);

        let controller = Self {
            store,
            pipeline: JsonPipelineAdapter::new(deps.json),
            history: deps.history,
            clipboard: deps.clipboard,
            seeder: deps.seeder,
            history_limit: config.session.history_limit,
            auto_validate: config.session.auto_validate,
            last_error: None,
            revision: 0,
            commands,
            host_events,
            host_open: true,
            expiries,
            view_tx,
        };

        let task = tokio::spawn(controller.run());
        (SessionHandle::new(command_tx, view_rx), task)
    }

    async fn run(mut self) {
        info!(
            history_limit = self.history_limit,
            auto_validate = self.auto_validate,
            idle_timeout_ms = self.store.lock().idle_timeout().as_millis() as u64,
            "session started"
        );
        if let Err(err) = self.refresh_history().await {
            self.report(err);
        }
        self.publish();

        loop {
            tokio::select! {
                // A timer that already fired predates anything still queued.
                biased;
                Some(expired) = self.expiries.recv() => {
                    if self.store.expire_edit(expired) {
                        info!("editing lock released after inactivity");
                        self.publish();
                    }
                }
                command = self.commands.recv() => match command {
                    Some(SessionCommand::Shutdown) | None => break,
                    Some(command) => self.handle(command).await,
                },
                event = self.host_events.recv(), if self.host_open => match event {
                    Some(event) => self.handle(SessionCommand::Host(event)).await,
                    None => {
                        debug!("host event stream ended");
                        self.host_open = false;
                    }
                },
            }
        }

        // Dropping the store drops the lock, which aborts any pending timer.
        info!(entries = self.store.len(), "session stopped");
    }

    #[tracing::instrument(name = "session.handle", skip_all, fields(command = command_name(&command)))]
    async fn handle(&mut self, command: SessionCommand) {
        if command.is_user_action() {
            self.last_error = None;
        }

        let outcome = match command {
            SessionCommand::Host(HostEvent::ClipboardUpdate(text)) => {
                if self.store.ingest_live_update(text) && self.store.selected_index() == Some(0) {
                    self.auto_validate_selected().await;
                }
                Ok(())
            }
            SessionCommand::Host(HostEvent::ClipboardHistory(entry)) => {
                self.store.ingest_historical_batch([entry]);
                Ok(())
            }
            SessionCommand::Select(index) => {
                if self.store.select(index) {
                    self.auto_validate_selected().await;
                }
                Ok(())
            }
            SessionCommand::Edit(content) => {
                if self.store.edit(content) {
                    self.auto_validate_selected().await;
                }
                Ok(())
            }
            SessionCommand::Save => {
                self.store.save();
                Ok(())
            }
            SessionCommand::Validate => {
                self.pipeline.validate_selected(&mut self.store).await;
                Ok(())
            }
            SessionCommand::Format => self.reformat(false).await,
            SessionCommand::Minify => self.reformat(true).await,
            SessionCommand::SetAutoValidate(enabled) => {
                self.auto_validate = enabled;
                if enabled {
                    self.auto_validate_selected().await;
                }
                Ok(())
            }
            SessionCommand::Search(query) => {
                self.store.set_query(query);
                Ok(())
            }
            SessionCommand::Copy(index) => self.copy(index).await,
            SessionCommand::Delete(index) => self.store.delete_at(index).await,
            SessionCommand::ClearAll => self.store.clear_all().await,
            SessionCommand::RefreshHistory => self.refresh_history().await,
            SessionCommand::SeedSamples => self
                .seeder
                .seed_samples()
                .await
                .map_err(SessionError::Transport),
            SessionCommand::Sync(reply) => {
                let _ = reply.send(self.view_tx.borrow().clone());
                return;
            }
            // Intercepted by `run`.
            SessionCommand::Shutdown => return,
        };

        if let Err(err) = outcome {
            self.report(err);
        }
        self.publish();
    }

    async fn auto_validate_selected(&mut self) {
        let shaped = self
            .store
            .selected_entry()
            .is_some_and(|e| JsonPipelineAdapter::is_json_shaped(&e.content));
        if self.auto_validate && shaped {
            self.pipeline.validate_selected(&mut self.store).await;
        }
    }

    async fn reformat(&mut self, minify: bool) -> Result<(), SessionError> {
        let changed = if minify {
            self.pipeline.minify_selected(&mut self.store).await?
        } else {
            self.pipeline.format_selected(&mut self.store).await?
        };
        if changed {
            self.auto_validate_selected().await;
        }
        Ok(())
    }

    async fn copy(&self, index: usize) -> Result<(), SessionError> {
        let entry = self
            .store
            .entries()
            .get(index)
            .ok_or(SessionError::IndexOutOfRange {
                index,
                len: self.store.len(),
            })?;
        self.clipboard
            .copy_text(&entry.content)
            .await
            .map_err(SessionError::Transport)?;
        debug!(entry_id = %entry.id, "copied entry to clipboard");
        Ok(())
    }

    async fn refresh_history(&mut self) -> Result<(), SessionError> {
        let entries = self
            .history
            .fetch_history(self.history_limit)
            .await
            .map_err(SessionError::Transport)?;
        let fetched = entries.len();
        let added = self.store.ingest_historical_batch(entries);
        info!(fetched, added, "history loaded");
        Ok(())
    }

    fn report(&mut self, err: SessionError) {
        if !err.is_reportable() {
            debug!(error = %err, "ignored");
            return;
        }
        warn!(error = %err, "session action failed");
        self.last_error = Some(err.to_string());
    }

    fn publish(&mut self) {
        self.revision += 1;
        let inspection = self.store.inspection();
        let selected = self.store.selected_entry();

        let view = ViewState {
            revision: self.revision,
            entries: self.store.entries().to_vec(),
            selected_index: self.store.selected_index().map_or(-1, |i| i as i64),
            editing: self.store.lock().state(),
            auto_validate: self.auto_validate,
            validation: inspection.validation().cloned(),
            search_query: inspection.query().to_string(),
            filtered: inspection.filtered().cloned(),
            toolbar_action: selected.and_then(|e| JsonPipelineAdapter::toolbar_action(&e.content)),
            last_error: self.last_error.clone(),
        };
        self.view_tx.send_replace(view);
    }
}

fn command_name(command: &SessionCommand) -> &'static str {
    match command {
        SessionCommand::Host(HostEvent::ClipboardUpdate(_)) => "host.clipboard_update",
        SessionCommand::Host(HostEvent::ClipboardHistory(_)) => "host.clipboard_history",
        SessionCommand::Select(_) => "select",
        SessionCommand::Edit(_) => "edit",
        SessionCommand::Save => "save",
        SessionCommand::Validate => "validate",
        SessionCommand::Format => "format",
        SessionCommand::Minify => "minify",
        SessionCommand::SetAutoValidate(_) => "set_auto_validate",
        SessionCommand::Search(_) => "search",
        SessionCommand::Copy(_) => "copy",
        SessionCommand::Delete(_) => "delete",
        SessionCommand::ClearAll => "clear_all",
        SessionCommand::RefreshHistory => "refresh_history",
        SessionCommand::SeedSamples => "seed_samples",
        SessionCommand::Sync(_) => "sync",
        SessionCommand::Shutdown => "shutdown",
    }
}
