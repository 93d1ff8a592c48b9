//! # In-memory history host / 内存历史宿主
//!
//! Stores captured entries in memory and pushes a `ClipboardUpdate` event
//! for every capture. Ids are assigned in capture order starting at 1.
//!
//! ## Behavior / 行为
//!
//! - A capture equal to the most recent stored entry is not stored again,
//!   but is still pushed to subscribers.
//! - `fetch_history` returns newest first.
//! - Deleting an unknown id succeeds; there is nothing left to remove.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use cv_core::ports::{ClockPort, EntryAdminPort, HistoryPort, SampleSeederPort};
use cv_core::{ClipboardEntry, EntryId, HostEvent, OperationResult};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info};

use super::samples::SAMPLE_ENTRIES;

#[derive(Default)]
struct HistoryTable {
    /// Oldest first.
    rows: Vec<ClipboardEntry>,
    next_id: i64,
}

impl HistoryTable {
    fn insert(&mut self, content: &str, now_ms: i64) -> Option<EntryId> {
        if self.rows.last().is_some_and(|last| last.content == content) {
            return None;
        }
        self.next_id += 1;
        let id = EntryId::new(self.next_id);
        self.rows
            .push(ClipboardEntry::captured_at_ms(id, content.to_string(), now_ms));
        Some(id)
    }
}

pub struct InMemoryHost {
    table: Mutex<HistoryTable>,
    clock: Arc<dyn ClockPort>,
    events: mpsc::UnboundedSender<HostEvent>,
}

impl InMemoryHost {
    /// Create a host and the receiving end of its event stream.
    pub fn new(clock: Arc<dyn ClockPort>) -> (Self, mpsc::UnboundedReceiver<HostEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let host = Self {
            table: Mutex::new(HistoryTable::default()),
            clock,
            events,
        };
        (host, rx)
    }

    /// Record a clipboard capture and push it to subscribers.
    ///
    /// Returns the id of the stored row, or `None` when the text repeats the
    /// most recent entry.
    #[tracing::instrument(name = "host.capture", skip_all, fields(len = text.len()))]
    pub async fn capture(&self, text: &str) -> Result<Option<EntryId>> {
        let now_ms = self.clock.now_ms();
        let stored = self.table.lock().await.insert(text, now_ms);
        match stored {
            Some(id) => debug!(entry_id = %id, "capture stored"),
            None => debug!("capture repeats latest entry, not stored"),
        }
        self.emit(HostEvent::ClipboardUpdate(text.to_string()))?;
        Ok(stored)
    }

    pub async fn len(&self) -> usize {
        self.table.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn emit(&self, event: HostEvent) -> Result<()> {
        self.events
            .send(event)
            .map_err(|_| anyhow::anyhow!("host event receiver dropped"))
    }
}

#[async_trait]
impl HistoryPort for InMemoryHost {
    async fn fetch_history(&self, limit: usize) -> Result<Vec<ClipboardEntry>> {
        let table = self.table.lock().await;
        Ok(table.rows.iter().rev().take(limit).cloned().collect())
    }
}

#[async_trait]
impl EntryAdminPort for InMemoryHost {
    async fn delete_entry(&self, id: EntryId) -> Result<OperationResult> {
        let mut table = self.table.lock().await;
        let before = table.rows.len();
        table.rows.retain(|row| row.id != id);
        info!(entry_id = %id, removed = before - table.rows.len(), "deleted clipboard entry");
        Ok(OperationResult::ok(format!(
            "Successfully deleted entry with ID {id}"
        )))
    }

    async fn clear_all(&self) -> Result<OperationResult> {
        let mut table = self.table.lock().await;
        let removed = table.rows.len();
        table.rows.clear();
        info!(removed, "cleared all clipboard entries");
        Ok(OperationResult::ok("All clipboard entries cleared"))
    }
}

#[async_trait]
impl SampleSeederPort for InMemoryHost {
    /// Samples are pushed as live updates only; they are not stored.
    async fn seed_samples(&self) -> Result<()> {
        for sample in SAMPLE_ENTRIES {
            self.emit(HostEvent::ClipboardUpdate(sample.to_string()))?;
        }
        debug!(count = SAMPLE_ENTRIES.len(), "sample entries pushed");
        Ok(())
    }
}
