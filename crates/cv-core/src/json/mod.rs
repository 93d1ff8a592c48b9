//! JSON introspection: validation results, shape heuristics and the search filter.

mod filter;
mod shape;
mod validation;

pub use filter::{filter, filter_lowered, FilterOutcome};
pub use shape::{is_json_shaped, is_minified, MINIFIED_RATIO};
pub use validation::JsonValidationResult;
