//! End-to-end tests for the session controller against a scripted host.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use cv_app::{SessionCommand, SessionController, SessionDeps, SessionHandle, ViewState};
use cv_core::ports::*;
use cv_core::{
    AppConfig, ClipboardEntry, EditingState, EntryId, FilterOutcome, HostEvent,
    JsonValidationResult, OperationResult,
};
use serde_json::{json, Value};
use tokio::sync::mpsc;

/// Scripted host: stored history, JSON processing via serde_json, switchable failures.
struct FakeHost {
    history: Vec<ClipboardEntry>,
    fail_history: AtomicBool,
    fail_delete: AtomicBool,
    refuse_clear: AtomicBool,
    copied: Mutex<Vec<String>>,
    events: mpsc::UnboundedSender<HostEvent>,
}

impl FakeHost {
    fn new(history: Vec<ClipboardEntry>) -> (Arc<Self>, mpsc::UnboundedReceiver<HostEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let host = Arc::new(Self {
            history,
            fail_history: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
            refuse_clear: AtomicBool::new(false),
            copied: Mutex::new(Vec::new()),
            events: tx,
        });
        (host, rx)
    }
}

#[async_trait]
impl HistoryPort for FakeHost {
    async fn fetch_history(&self, limit: usize) -> anyhow::Result<Vec<ClipboardEntry>> {
        if self.fail_history.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("history unavailable"));
        }
        Ok(self.history.iter().take(limit).cloned().collect())
    }
}

#[async_trait]
impl ClipboardWriterPort for FakeHost {
    async fn copy_text(&self, text: &str) -> anyhow::Result<()> {
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[async_trait]
impl EntryAdminPort for FakeHost {
    async fn delete_entry(&self, id: EntryId) -> anyhow::Result<OperationResult> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Ok(OperationResult::failed(format!("cannot delete {id}")));
        }
        Ok(OperationResult::ok(format!("Successfully deleted entry with ID {id}")))
    }

    async fn clear_all(&self) -> anyhow::Result<OperationResult> {
        if self.refuse_clear.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("host went away"));
        }
        Ok(OperationResult::ok("All clipboard entries cleared"))
    }
}

#[async_trait]
impl ConfirmPort for FakeHost {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

#[async_trait]
impl JsonProcessorPort for FakeHost {
    async fn validate(&self, text: &str) -> anyhow::Result<JsonValidationResult> {
        Ok(match serde_json::from_str::<Value>(text) {
            Ok(value) => JsonValidationResult::valid(serde_json::to_string_pretty(&value)?, value),
            Err(err) => JsonValidationResult::invalid(
                format!("JSON Parse Error: {err}"),
                Some(err.line()),
                Some(err.column()),
            ),
        })
    }

    async fn format(&self, text: &str) -> anyhow::Result<String> {
        let value: Value = serde_json::from_str(text)?;
        Ok(serde_json::to_string_pretty(&value)?)
    }

    async fn minify(&self, text: &str) -> anyhow::Result<String> {
        let value: Value = serde_json::from_str(text)?;
        Ok(serde_json::to_string(&value)?)
    }
}

#[async_trait]
impl SampleSeederPort for FakeHost {
    async fn seed_samples(&self) -> anyhow::Result<()> {
        for sample in ["seed one", "{\"seed\": 2}"] {
            self.events.send(HostEvent::ClipboardUpdate(sample.to_string()))?;
        }
        Ok(())
    }
}

impl ClockPort for FakeHost {
    fn now_ms(&self) -> i64 {
        1_705_314_600_000
    }
}

fn stored(id: i64, content: &str) -> ClipboardEntry {
    ClipboardEntry::captured_at_ms(EntryId::new(id), content.to_string(), 0)
}

fn deps(host: &Arc<FakeHost>) -> SessionDeps {
    SessionDeps {
        history: host.clone(),
        clipboard: host.clone(),
        entry_admin: host.clone(),
        confirm: host.clone(),
        json: host.clone(),
        seeder: host.clone(),
        clock: host.clone(),
    }
}

fn start(host: &Arc<FakeHost>, events: mpsc::UnboundedReceiver<HostEvent>) -> SessionHandle {
    let (handle, _task) = SessionController::spawn(deps(host), &AppConfig::default(), events);
    handle
}

fn ids(view: &ViewState) -> Vec<i64> {
    view.entries.iter().map(|e| e.id.value()).collect()
}

/// Let the paused clock run timers that are already due.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

#[tokio::test]
async fn startup_loads_history_and_selects_newest() {
    let (host, events) = FakeHost::new(vec![stored(3, "newest"), stored(2, "b"), stored(1, "a")]);
    let handle = start(&host, events);

    let view = handle.sync().await.unwrap();
    assert_eq!(ids(&view), vec![3, 2, 1]);
    assert_eq!(view.selected_index, 0);
    assert_eq!(view.editing, EditingState::Idle);
}

#[tokio::test]
async fn replayed_history_records_are_deduplicated() {
    let (host, events) = FakeHost::new(vec![stored(2, "b"), stored(1, "a")]);
    let handle = start(&host, events);

    handle
        .send(SessionCommand::Host(HostEvent::ClipboardHistory(stored(2, "b"))))
        .unwrap();
    handle
        .send(SessionCommand::Host(HostEvent::ClipboardHistory(stored(7, "x"))))
        .unwrap();
    handle.send(SessionCommand::RefreshHistory).unwrap();

    let view = handle.sync().await.unwrap();
    assert_eq!(ids(&view), vec![2, 1, 7]);
}

#[tokio::test]
async fn live_updates_are_dropped_while_editing_then_accepted_after_idle() {
    tokio::time::pause();
    let (host, events) = FakeHost::new(vec![stored(1, "draft")]);
    let handle = start(&host, events);

    handle.edit("draft, revised").unwrap();
    for n in 0..3 {
        handle
            .send(SessionCommand::Host(HostEvent::ClipboardUpdate(format!("capture {n}"))))
            .unwrap();
    }
    let view = handle.sync().await.unwrap();
    assert_eq!(view.editing, EditingState::Editing);
    assert_eq!(ids(&view), vec![1]);
    assert_eq!(view.entries[0].content, "draft, revised");

    tokio::time::advance(Duration::from_millis(3000)).await;
    settle().await;

    let view = handle.sync().await.unwrap();
    assert_eq!(view.editing, EditingState::Idle);

    handle
        .send(SessionCommand::Host(HostEvent::ClipboardUpdate("after idle".into())))
        .unwrap();
    let view = handle.sync().await.unwrap();
    assert_eq!(view.entries.len(), 2);
    assert_eq!(view.entries[0].content, "after idle");
    assert!(view.entries[0].id.is_provisional());
    // The edited entry is still selected, shifted down by the insert.
    assert_eq!(view.selected_index, 1);
}

#[tokio::test]
async fn save_releases_the_lock_immediately() {
    tokio::time::pause();
    let (host, events) = FakeHost::new(vec![stored(1, "a")]);
    let handle = start(&host, events);

    handle.edit("b").unwrap();
    handle.save().unwrap();
    handle
        .send(SessionCommand::Host(HostEvent::ClipboardUpdate("c".into())))
        .unwrap();

    let view = handle.sync().await.unwrap();
    assert_eq!(view.editing, EditingState::Idle);
    assert_eq!(view.entries[0].content, "c");
}

#[tokio::test]
async fn selecting_json_validates_and_search_narrows_the_tree() {
    let (host, events) = FakeHost::new(vec![
        stored(2, "plain text"),
        stored(1, r#"{"a":"hello","b":{"c":"world"}}"#),
    ]);
    let handle = start(&host, events);

    handle.select(1).unwrap();
    handle.search("HELLO").unwrap();
    let view = handle.sync().await.unwrap();

    let validation = view.validation.as_ref().expect("auto-validated");
    assert!(validation.is_valid);
    assert_eq!(view.filtered, Some(FilterOutcome::Match(json!({"a": "hello"}))));

    handle.search("nothing here").unwrap();
    let view = handle.sync().await.unwrap();
    assert_eq!(view.filtered, Some(FilterOutcome::NoMatch));
}

#[tokio::test]
async fn selecting_plain_text_skips_validation() {
    let (host, events) = FakeHost::new(vec![
        stored(2, r#"{"a":1}"#),
        stored(1, "plain text"),
    ]);
    let handle = start(&host, events);

    handle.send(SessionCommand::Validate).unwrap();
    let view = handle.sync().await.unwrap();
    assert!(view.validation.is_some());

    handle.select(1).unwrap();
    handle.search("a").unwrap();
    let view = handle.sync().await.unwrap();
    assert_eq!(view.selected_index, 1);
    assert!(view.validation.is_none());
    assert!(view.filtered.is_none());
}

#[tokio::test]
async fn auto_validate_off_skips_validation_until_asked() {
    let (host, events) = FakeHost::new(vec![stored(1, "{invalid")]);
    let handle = start(&host, events);

    handle.send(SessionCommand::SetAutoValidate(false)).unwrap();
    handle.edit("{invalid}").unwrap();
    let view = handle.sync().await.unwrap();
    assert!(view.validation.is_none());

    handle.send(SessionCommand::Validate).unwrap();
    let view = handle.sync().await.unwrap();
    let validation = view.validation.unwrap();
    assert!(!validation.is_valid);
    assert!(!validation.error_message.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_selected_entry_clears_selection_and_inspection() {
    let (host, events) = FakeHost::new(vec![stored(3, "[1]"), stored(2, "{}"), stored(1, "c")]);
    let handle = start(&host, events);

    handle.select(1).unwrap();
    handle.search("x").unwrap();
    handle.delete(1).unwrap();

    let view = handle.sync().await.unwrap();
    assert_eq!(ids(&view), vec![3, 1]);
    assert_eq!(view.selected_index, -1);
    assert!(view.validation.is_none());
    assert!(view.filtered.is_none());
    assert_eq!(view.search_query, "");
}

#[tokio::test]
async fn deleting_before_selection_keeps_the_same_entry_selected() {
    let (host, events) = FakeHost::new(vec![stored(3, "a"), stored(2, "b"), stored(1, "c")]);
    let handle = start(&host, events);

    handle.select(2).unwrap();
    handle.delete(0).unwrap();

    let view = handle.sync().await.unwrap();
    assert_eq!(view.selected_index, 1);
    assert_eq!(view.selected().unwrap().id, EntryId::new(1));
}

#[tokio::test]
async fn refused_delete_is_reported_and_list_kept() {
    let (host, events) = FakeHost::new(vec![stored(1, "a")]);
    host.fail_delete.store(true, Ordering::SeqCst);
    let handle = start(&host, events);

    handle.delete(0).unwrap();
    let view = handle.sync().await.unwrap();
    assert_eq!(ids(&view), vec![1]);
    assert_eq!(view.last_error.as_deref(), Some("cannot delete 1"));

    // Out-of-range requests are swallowed silently.
    handle.delete(9).unwrap();
    let view = handle.sync().await.unwrap();
    assert!(view.last_error.is_none());
}

#[tokio::test]
async fn clear_all_empties_and_failed_clear_keeps_state() {
    let (host, events) = FakeHost::new(vec![stored(2, "a"), stored(1, "b")]);
    let handle = start(&host, events);

    host.refuse_clear.store(true, Ordering::SeqCst);
    handle.clear_all().unwrap();
    let view = handle.sync().await.unwrap();
    assert_eq!(view.entries.len(), 2);
    assert!(view.last_error.is_some());

    host.refuse_clear.store(false, Ordering::SeqCst);
    handle.clear_all().unwrap();
    let view = handle.sync().await.unwrap();
    assert!(view.entries.is_empty());
    assert_eq!(view.selected_index, -1);
}

#[tokio::test]
async fn format_then_minify_round_trips_and_holds_the_lock() {
    tokio::time::pause();
    let (host, events) = FakeHost::new(vec![stored(1, r#"{"a":[1,2],"b":{"c":null}}"#)]);
    let handle = start(&host, events);

    handle.send(SessionCommand::Format).unwrap();
    let view = handle.sync().await.unwrap();
    let formatted = view.entries[0].content.clone();
    assert!(formatted.contains('\n'));
    assert_eq!(view.editing, EditingState::Editing);
    assert_eq!(view.toolbar_action, Some(cv_app::ToolbarAction::Minify));

    handle.send(SessionCommand::Minify).unwrap();
    handle.send(SessionCommand::Format).unwrap();
    let view = handle.sync().await.unwrap();
    assert_eq!(view.entries[0].content, formatted);
    assert!(view.validation.unwrap().is_valid);
}

#[tokio::test]
async fn copy_hands_entry_content_to_the_host() {
    let (host, events) = FakeHost::new(vec![stored(2, "first"), stored(1, "second")]);
    let handle = start(&host, events);

    handle.send(SessionCommand::Copy(1)).unwrap();
    handle.sync().await.unwrap();
    assert_eq!(*host.copied.lock().unwrap(), vec!["second".to_string()]);
}

#[tokio::test]
async fn history_failure_is_non_fatal() {
    let (host, events) = FakeHost::new(vec![stored(1, "a")]);
    host.fail_history.store(true, Ordering::SeqCst);
    let handle = start(&host, events);

    let view = handle.sync().await.unwrap();
    assert!(view.entries.is_empty());
    assert!(view.last_error.is_some());

    handle
        .send(SessionCommand::Host(HostEvent::ClipboardUpdate("still alive".into())))
        .unwrap();
    let view = handle.sync().await.unwrap();
    assert_eq!(view.entries.len(), 1);
}

#[tokio::test]
async fn seeded_samples_arrive_as_live_updates() {
    let (host, events) = FakeHost::new(Vec::new());
    let handle = start(&host, events);
    let mut view_rx = handle.subscribe();

    handle.send(SessionCommand::SeedSamples).unwrap();
    let view = tokio::time::timeout(
        Duration::from_secs(5),
        view_rx.wait_for(|v| v.entries.len() == 2),
    )
    .await
    .expect("samples should arrive")
    .unwrap()
    .clone();

    assert_eq!(view.entries[0].content, "{\"seed\": 2}");
    assert_eq!(view.entries[1].content, "seed one");
}

#[tokio::test]
async fn shutdown_closes_the_handle() {
    let (host, events) = FakeHost::new(Vec::new());
    let (handle, task) = SessionController::spawn(deps(&host), &AppConfig::default(), events);

    handle.shutdown().unwrap();
    task.await.unwrap();
    assert!(handle.sync().await.is_err());
}

#[tokio::test]
async fn dropping_every_handle_ends_the_session() {
    // The host keeps its event sender, so only the handles keep the session alive.
    let (host, events) = FakeHost::new(vec![stored(1, "a")]);
    let (handle, task) = SessionController::spawn(deps(&host), &AppConfig::default(), events);

    handle.edit("b").unwrap();
    handle.sync().await.unwrap();
    drop(handle);

    tokio::time::timeout(Duration::from_secs(2), task)
        .await
        .expect("session should end once its handles are gone")
        .unwrap();
    // The session took its host-event receiver down with it.
    assert!(host.events.is_closed());
}
