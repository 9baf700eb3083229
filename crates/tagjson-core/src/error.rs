//! Error types for tagged-JSON transformation.

use crate::tag::TypeTag;
use thiserror::Error;

/// Errors that can occur while transforming a tagged document.
///
/// Per-field conversion problems (unknown tags, unparseable payloads) are not
/// errors: they produce no value and the field is dropped. Only the variants
/// below ever reach a caller.
#[derive(Error, Debug)]
pub enum TransformError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The top-level JSON value was valid but not an object.
    #[error("expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },

    /// A tagged value's payload does not have the shape its tag requires,
    /// e.g. `{"N": 42}` instead of `{"N": "42"}`.
    ///
    /// Only returned in strict mode; the lenient default drops the value.
    #[error("payload of tag {tag} must be {expected}, found {found}")]
    ShapeMismatch {
        tag: TypeTag,
        expected: &'static str,
        found: &'static str,
    },
}

/// Convenience alias used throughout tagjson-core.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Human-readable name of a JSON value's kind, for error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
