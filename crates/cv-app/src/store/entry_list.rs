//! Ordered clipboard entries with selection maintenance.
//!
//! 有序剪贴板条目列表及选中项维护。
//!
//! Invariants:
//! - no two entries share an id;
//! - `selected` is `None` or a valid index, and structural changes re-derive
//!   it so it keeps pointing at the same logical entry (or at nothing).

use std::collections::HashSet;
use std::sync::Arc;

use cv_core::ports::{ClockPort, ConfirmPort, EntryAdminPort};
use cv_core::{ClipboardEntry, EntryId, JsonValidationResult};
use tracing::{debug, info, warn};

use super::Inspection;
use crate::editing_lock::{EditingLock, LockExpired};
use crate::error::SessionError;

const CLEAR_PROMPT: &str = "Clear all clipboard entries? This cannot be undone.";

pub struct EntryListStore {
    entries: Vec<ClipboardEntry>,
    selected: Option<usize>,
    lock: EditingLock,
    inspection: Inspection,
    provisional_seq: u64,
    clock: Arc<dyn ClockPort>,
    entry_admin: Arc<dyn EntryAdminPort>,
    confirm: Arc<dyn ConfirmPort>,
}

impl EntryListStore {
    pub fn new(
        lock: EditingLock,
        clock: Arc<dyn ClockPort>,
        entry_admin: Arc<dyn EntryAdminPort>,
        confirm: Arc<dyn ConfirmPort>,
    ) -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
            lock,
            inspection: Inspection::default(),
            provisional_seq: 0,
            clock,
            entry_admin,
            confirm,
        }
    }

    pub fn entries(&self) -> &[ClipboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&ClipboardEntry> {
        self.selected.and_then(|i| self.entries.get(i))
    }

    pub fn lock(&self) -> &EditingLock {
        &self.lock
    }

    pub fn inspection(&self) -> &Inspection {
        &self.inspection
    }

    /// Accept a live capture pushed by the host.
    ///
    /// Dropped (not queued) while the user is editing. Returns whether the
    /// capture was admitted.
    pub fn ingest_live_update(&mut self, raw_text: String) -> bool {
        if self.lock.is_editing() {
            debug!(len = raw_text.len(), "live update dropped while editing");
            return false;
        }

        self.provisional_seq += 1;
        let id = EntryId::provisional(self.provisional_seq);
        let entry = ClipboardEntry::captured_at_ms(id, raw_text, self.clock.now_ms());
        self.entries.insert(0, entry);

        self.selected = Some(match self.selected {
            Some(i) => i + 1,
            None => 0,
        });
        debug!(entry_id = %id, total = self.entries.len(), "live update admitted");
        true
    }

    /// Append stored entries, skipping ids already present. Returns how many were added.
    pub fn ingest_historical_batch(
        &mut self,
        batch: impl IntoIterator<Item = ClipboardEntry>,
    ) -> usize {
        let was_empty = self.entries.is_empty();
        let mut known: HashSet<EntryId> = self.entries.iter().map(|e| e.id).collect();

        let mut added = 0;
        for entry in batch {
            if known.insert(entry.id) {
                self.entries.push(entry);
                added += 1;
            }
        }

        if was_empty && added > 0 && self.selected.is_none() {
            self.selected = Some(0);
        }
        debug!(added, total = self.entries.len(), "historical batch ingested");
        added
    }

    /// Select the entry at `index`. Out of range is a silent no-op.
    ///
    /// Returns `true` when `index` is now selected. Choosing a different entry
    /// drops the cached validation.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            debug!(index, len = self.entries.len(), "select out of range");
            return false;
        }
        if self.selected != Some(index) {
            self.selected = Some(index);
            self.inspection.invalidate();
        }
        true
    }

    /// Overwrite the selected entry's content and (re)start the edit session.
    ///
    /// The write is visible immediately. Returns `false` without a selection.
    pub fn edit(&mut self, new_content: String) -> bool {
        let Some(entry) = self.selected.and_then(|i| self.entries.get_mut(i)) else {
            debug!("edit ignored without a selection");
            return false;
        };
        entry.content = new_content;
        self.lock.touch();
        self.inspection.invalidate();
        true
    }

    /// Explicit save: the edit is already committed, only the lock is released.
    pub fn save(&mut self) {
        self.lock.save();
    }

    /// Feed a timer expiry back into the lock. Returns `true` when it released.
    pub fn expire_edit(&mut self, expired: LockExpired) -> bool {
        self.lock.expire(expired)
    }

    pub fn set_validation(&mut self, result: JsonValidationResult) {
        self.inspection.set_validation(result);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.inspection.set_query(query);
    }

    /// Ask the host to delete the entry at `index`, then drop it locally.
    ///
    /// Any failure leaves the list untouched.
    pub async fn delete_at(&mut self, index: usize) -> Result<(), SessionError> {
        let id = self
            .entries
            .get(index)
            .map(|e| e.id)
            .ok_or(SessionError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })?;

        let outcome = self
            .entry_admin
            .delete_entry(id)
            .await
            .map_err(SessionError::Transport)?;
        if !outcome.success {
            return Err(SessionError::Logical(outcome.message));
        }

        // Resolve by id: the answer applies to whatever the list holds now.
        let Some(position) = self.entries.iter().position(|e| e.id == id) else {
            warn!(entry_id = %id, "deleted entry already gone locally");
            return Ok(());
        };
        self.remove_at(position);
        info!(entry_id = %id, remaining = self.entries.len(), "entry deleted");
        Ok(())
    }

    /// Clear every entry after the user confirms. Declining is not an error.
    pub async fn clear_all(&mut self) -> Result<(), SessionError> {
        if !self.confirm.confirm(CLEAR_PROMPT).await {
            info!("clear all declined");
            return Ok(());
        }

        let outcome = self
            .entry_admin
            .clear_all()
            .await
            .map_err(SessionError::Transport)?;
        if !outcome.success {
            return Err(SessionError::Logical(outcome.message));
        }

        let removed = self.entries.len();
        self.entries.clear();
        self.selected = None;
        self.lock.reset();
        self.inspection.reset();
        info!(removed, "all entries cleared");
        Ok(())
    }

    fn remove_at(&mut self, index: usize) {
        self.entries.remove(index);
        match self.selected {
            Some(selected) if selected == index => {
                self.selected = None;
                self.inspection.reset();
                // The edited entry no longer exists.
                self.lock.reset();
            }
            Some(selected) if index < selected => self.selected = Some(selected - 1),
            _ => {}
        }
    }
}
