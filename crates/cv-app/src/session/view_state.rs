use cv_core::{ClipboardEntry, EditingState, FilterOutcome, JsonValidationResult};
use serde::Serialize;

use crate::pipeline::ToolbarAction;

/// Snapshot published to the presentation layer after each logical action.
///
/// 每个逻辑动作结束后发布给展示层的快照。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    /// Bumped once per publish.
    pub revision: u64,
    pub entries: Vec<ClipboardEntry>,
    /// `-1` when nothing is selected.
    pub selected_index: i64,
    pub editing: EditingState,
    pub auto_validate: bool,
    pub validation: Option<JsonValidationResult>,
    pub search_query: String,
    pub filtered: Option<FilterOutcome>,
    pub toolbar_action: Option<ToolbarAction>,
    pub last_error: Option<String>,
}

impl ViewState {
    pub fn empty(auto_validate: bool) -> Self {
        Self {
            revision: 0,
            entries: Vec::new(),
            selected_index: -1,
            editing: EditingState::Idle,
            auto_validate,
            validation: None,
            search_query: String::new(),
            filtered: None,
            toolbar_action: None,
            last_error: None,
        }
    }

    pub fn selected(&self) -> Option<&ClipboardEntry> {
        usize::try_from(self.selected_index)
            .ok()
            .and_then(|i| self.entries.get(i))
    }
}
