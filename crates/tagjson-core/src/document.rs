//! Top-level document transformation.
//!
//! A document is a JSON object mapping field names to tagged values. The
//! output is a sequence of single-entry objects, one per surviving field:
//!
//! ```text
//! {"name ": {"S": " Alice "}, "age": {"N": "30"}}
//!   -> [{"name": "Alice"}, {"age": 30}]
//! ```
//!
//! Fields are never merged into one object. Because serde_json is built with
//! `preserve_order`, the sequence follows the field order of the input text.

use crate::container::convert_tagged;
use crate::error::{kind_of, Result, TransformError};
use crate::options::TransformOptions;
use crate::sanitize::sanitize;
use crate::tag::TypeTag;
use serde_json::{Map, Value};

/// Parse a JSON string and transform it with default (lenient) options.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON or is not a JSON object.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tagjson_core::transform_str;
///
/// let out = transform_str(r#"{"age": {"N": "30"}, "bad": {"N": "oops"}}"#).unwrap();
/// assert_eq!(out, vec![json!({"age": 30})]);
/// ```
pub fn transform_str(json: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(json)?;
    transform_document(&value)
}

/// Transform an already-decoded document with default (lenient) options.
///
/// # Errors
///
/// Returns [`TransformError::NotAnObject`] if `document` is neither an object
/// nor `null`.
pub fn transform_document(document: &Value) -> Result<Vec<Value>> {
    transform_document_with(document, &TransformOptions::default())
}

/// Transform an already-decoded document.
///
/// # Errors
///
/// Returns [`TransformError::NotAnObject`] if `document` is neither an object
/// nor `null`, and in strict mode [`TransformError::ShapeMismatch`] for the
/// first scalar tag whose payload is not a string. A `null` document
/// transforms to an empty sequence.
pub fn transform_document_with(
    document: &Value,
    options: &TransformOptions,
) -> Result<Vec<Value>> {
    let fields = match document {
        Value::Object(fields) => fields,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(TransformError::NotAnObject {
                found: kind_of(other),
            })
        }
    };

    let mut result = Vec::new();
    for (name, wrapper) in fields {
        let name = sanitize(name);
        if name.is_empty() {
            tracing::trace!("skipping field with blank name");
            continue;
        }
        let Value::Object(wrapper) = wrapper else {
            tracing::trace!(field = name, "field value is not a tagged object");
            continue;
        };
        for value in convert_wrapper(wrapper, options)? {
            let mut entry = Map::with_capacity(1);
            entry.insert(name.to_string(), value);
            result.push(Value::Object(entry));
        }
    }

    tracing::debug!(
        fields = fields.len(),
        emitted = result.len(),
        "transformed document"
    );
    Ok(result)
}

/// Convert every recognized tag of a wrapper object. A well-formed wrapper
/// has exactly one key; extra recognized keys each contribute a value.
fn convert_wrapper(
    wrapper: &Map<String, Value>,
    options: &TransformOptions,
) -> Result<Vec<Value>> {
    let mut values = Vec::with_capacity(1);
    for (key, payload) in wrapper {
        let Some(tag) = TypeTag::from_key(key) else {
            continue;
        };
        if let Some(value) = convert_tagged(tag, payload, options)? {
            values.push(value);
        }
    }
    Ok(values)
}
