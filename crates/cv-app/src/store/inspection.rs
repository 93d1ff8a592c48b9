use cv_core::json::{filter, FilterOutcome, JsonValidationResult};

/// Validation and search state derived from the selected entry.
///
/// 由当前选中条目派生的校验与搜索状态。
///
/// The filtered tree is a pure function of the cached parse and the query; it
/// is recomputed whenever either changes and never stored independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inspection {
    validation: Option<JsonValidationResult>,
    query: String,
    filtered: Option<FilterOutcome>,
}

impl Inspection {
    pub fn validation(&self) -> Option<&JsonValidationResult> {
        self.validation.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filtered(&self) -> Option<&FilterOutcome> {
        self.filtered.as_ref()
    }

    pub fn set_validation(&mut self, result: JsonValidationResult) {
        self.validation = Some(result);
        self.refilter();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    /// Drop the cached validation (buffer changed or another entry selected).
    pub fn invalidate(&mut self) {
        self.validation = None;
        self.filtered = None;
    }

    /// Drop validation and search state entirely.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn refilter(&mut self) {
        self.filtered = self
            .validation
            .as_ref()
            .and_then(|v| v.parsed_value.as_ref())
            .map(|value| filter(value, &self.query));
    }
}
