//! JSON pipeline: validate, format and minify through the host.
//!
//! JSON 流水线：通过宿主完成校验、格式化与压缩。

use std::sync::Arc;

use cv_core::json::{self, JsonValidationResult};
use cv_core::ports::JsonProcessorPort;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::SessionError;
use crate::store::EntryListStore;

const VALIDATE_FAILED: &str = "Failed to validate JSON";

/// Which reformatting action the toolbar offers for the selected entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolbarAction {
    Format,
    Minify,
}

pub struct JsonPipelineAdapter {
    processor: Arc<dyn JsonProcessorPort>,
}

impl JsonPipelineAdapter {
    pub fn new(processor: Arc<dyn JsonProcessorPort>) -> Self {
        Self { processor }
    }

    pub fn is_json_shaped(text: &str) -> bool {
        json::is_json_shaped(text)
    }

    pub fn is_minified(text: &str) -> bool {
        json::is_minified(text)
    }

    /// `None` for text that is not JSON-shaped.
    pub fn toolbar_action(text: &str) -> Option<ToolbarAction> {
        if !Self::is_json_shaped(text) {
            return None;
        }
        Some(if Self::is_minified(text) {
            ToolbarAction::Format
        } else {
            ToolbarAction::Minify
        })
    }

    /// Always yields a renderable result; transport failures become an invalid result.
    #[tracing::instrument(name = "pipeline.validate", skip_all, fields(len = text.len()))]
    pub async fn validate(&self, text: &str) -> JsonValidationResult {
        match self.processor.validate(text).await {
            Ok(result) => {
                if let Some(err) = SessionError::from_validation(&result) {
                    debug!(error = %err, "validator rejected text");
                }
                result
            }
            Err(err) => {
                warn!(error = %err, "validate call failed");
                JsonValidationResult::invalid(format!("{VALIDATE_FAILED}: {err}"), None, None)
            }
        }
    }

    pub async fn format(&self, text: &str) -> Result<String, SessionError> {
        self.processor
            .format(text)
            .await
            .map_err(SessionError::Transport)
    }

    pub async fn minify(&self, text: &str) -> Result<String, SessionError> {
        self.processor
            .minify(text)
            .await
            .map_err(SessionError::Transport)
    }

    /// Validate the selected entry and cache the result. No-op without a selection.
    pub async fn validate_selected(&self, store: &mut EntryListStore) -> bool {
        let Some(text) = store.selected_entry().map(|e| e.content.clone()) else {
            return false;
        };
        let result = self.validate(&text).await;
        store.set_validation(result);
        true
    }

    /// Pretty-print the selected entry in place.
    ///
    /// The result goes through [`EntryListStore::edit`], so it counts as an
    /// edit and holds the editing lock like a keystroke would.
    #[tracing::instrument(name = "pipeline.format_selected", skip_all)]
    pub async fn format_selected(&self, store: &mut EntryListStore) -> Result<bool, SessionError> {
        let Some(text) = store.selected_entry().map(|e| e.content.clone()) else {
            return Ok(false);
        };
        let formatted = self.format(&text).await?;
        Ok(store.edit(formatted))
    }

    /// Minify the selected entry in place. Same edit-path caveat as [`Self::format_selected`].
    #[tracing::instrument(name = "pipeline.minify_selected", skip_all)]
    pub async fn minify_selected(&self, store: &mut EntryListStore) -> Result<bool, SessionError> {
        let Some(text) = store.selected_entry().map(|e| e.content.clone()) else {
            return Ok(false);
        };
        let minified = self.minify(&text).await?;
        Ok(store.edit(minified))
    }
}
