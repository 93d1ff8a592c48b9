//! Structural search over JSON trees.
//!
//! 对 JSON 树做结构化搜索。
//!
//! The filter narrows a value down to the substructures that mention the
//! query, either in a scalar's text, an object key, or an array index. It is
//! recomputed from scratch on every query change; clipboard payloads are small.
//!
//! Non-string scalars are matched against serde_json's own rendering of them,
//! so `8.0` is searched as "8.0" and `true` as "true".

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Result of filtering one JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    Match(Value),
    NoMatch,
}

impl FilterOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Match(value) => Some(value),
            Self::NoMatch => None,
        }
    }
}

impl Serialize for FilterOutcome {
    /// `NoMatch` serializes as the string `"no-match"`, the marker the view layer expects.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Match(value) => value.serialize(serializer),
            Self::NoMatch => serializer.serialize_str("no-match"),
        }
    }
}

/// Filter `value` by a free-form query. Case-insensitive.
///
/// An empty query applies no filtering and returns the value unchanged.
pub fn filter(value: &Value, query: &str) -> FilterOutcome {
    if query.is_empty() {
        return FilterOutcome::Match(value.clone());
    }
    filter_lowered(value, &query.to_lowercase())
}

/// Recursive filter. `query` must already be lowercased and non-empty.
pub fn filter_lowered(value: &Value, query: &str) -> FilterOutcome {
    match value {
        Value::Array(items) => filter_array(items, query),
        Value::Object(map) => filter_object(map, query),
        scalar => {
            if scalar_text(scalar).to_lowercase().contains(query) {
                FilterOutcome::Match(scalar.clone())
            } else {
                FilterOutcome::NoMatch
            }
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn filter_array(items: &[Value], query: &str) -> FilterOutcome {
    let mut retained = 0usize;
    let mut out = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let filtered = filter_lowered(item, query);
        if filtered.is_match() || index.to_string().contains(query) {
            retained += 1;
            // An index-only hit keeps the collapsed element, which has nothing to emit.
            if let FilterOutcome::Match(value) = filtered {
                out.push(value);
            }
        }
    }

    if retained == 0 {
        FilterOutcome::NoMatch
    } else {
        FilterOutcome::Match(Value::Array(out))
    }
}

fn filter_object(map: &Map<String, Value>, query: &str) -> FilterOutcome {
    let mut out = Map::new();

    for (key, child) in map {
        let key_hit = key.to_lowercase().contains(query);
        let filtered = filter_lowered(child, query);
        if key_hit {
            out.insert(key.clone(), child.clone());
        } else if let FilterOutcome::Match(value) = filtered {
            out.insert(key.clone(), value);
        }
    }

    if out.is_empty() {
        FilterOutcome::NoMatch
    } else {
        FilterOutcome::Match(Value::Object(out))
    }
}
