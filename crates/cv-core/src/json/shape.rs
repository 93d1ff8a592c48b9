use serde_json::Value;

/// Raw text shorter than this fraction of its pretty-printed form counts as minified.
pub const MINIFIED_RATIO: f64 = 0.8;

/// Cheap bracket check used to gate the validator.
///
/// Not a grammar check: `{ nope }` passes. Validation stays authoritative.
pub fn is_json_shaped(text: &str) -> bool {
    let trimmed = text.trim();
    (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
}

/// Guess whether `text` is minified JSON, to choose between format and minify.
///
/// Compares the raw length against the two-space pretty-printed length of the
/// re-serialized value. Text that does not parse is never considered minified.
pub fn is_minified(text: &str) -> bool {
    let Ok(value) = serde_json::from_str::<Value>(text) else {
        return false;
    };
    let Ok(pretty) = serde_json::to_string_pretty(&value) else {
        return false;
    };
    (text.len() as f64) < (pretty.len() as f64) * MINIFIED_RATIO
}
