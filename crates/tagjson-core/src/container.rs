//! Container converters for the `L` and `M` tags, plus full tag dispatch.
//!
//! Nesting is deliberately shallow. A list holds tagged scalars only, so
//! `L` and `M` elements inside a list are skipped. A map dispatches scalars
//! and lists but not other maps. Only the top-level document reaches `M`.

use crate::error::Result;
use crate::options::TransformOptions;
use crate::scalar::convert_scalar;
use crate::tag::TypeTag;
use serde_json::{Map, Value};

/// Convert an `L` payload into a plain array.
///
/// Each element must be an object keyed by scalar tags; every recognized key
/// contributes one element, in order. Returns `None` when the payload is not
/// an array or nothing survives conversion.
///
/// ```
/// use serde_json::json;
/// use tagjson_core::{convert_list, TransformOptions};
///
/// let list = json!([{"S": "a"}, {"N": "1"}, {"L": []}]);
/// let plain = convert_list(&list, &TransformOptions::default()).unwrap();
/// assert_eq!(plain, Some(json!(["a", 1])));
/// ```
pub fn convert_list(payload: &Value, options: &TransformOptions) -> Result<Option<Value>> {
    let Value::Array(items) = payload else {
        tracing::trace!("list payload is not an array");
        return Ok(None);
    };

    let mut result = Vec::with_capacity(items.len());
    for item in items {
        let Value::Object(wrapper) = item else {
            continue;
        };
        for (key, raw) in wrapper {
            let Some(tag) = TypeTag::from_key(key).filter(|tag| tag.is_scalar()) else {
                continue;
            };
            if let Some(value) = convert_scalar(tag, raw, options)? {
                result.push(value);
            }
        }
    }

    if result.is_empty() {
        return Ok(None);
    }
    Ok(Some(Value::Array(result)))
}

/// Convert an `M` payload into a plain object.
///
/// Keys of the payload are themselves type tags and are kept verbatim in the
/// output, so `{"S": "x", "BOOL": "true"}` becomes `{"S": "x", "BOOL": true}`.
/// Returns `None` when the payload is not an object or nothing survives.
pub fn convert_map(payload: &Value, options: &TransformOptions) -> Result<Option<Value>> {
    let Value::Object(entries) = payload else {
        tracing::trace!("map payload is not an object");
        return Ok(None);
    };

    let mut result = Map::new();
    for (key, raw) in entries {
        let converted = match TypeTag::from_key(key) {
            Some(TypeTag::List) => convert_list(raw, options)?,
            Some(tag) if tag.is_scalar() => convert_scalar(tag, raw, options)?,
            _ => None,
        };
        if let Some(value) = converted {
            result.insert(key.clone(), value);
        }
    }

    if result.is_empty() {
        return Ok(None);
    }
    Ok(Some(Value::Object(result)))
}

/// Dispatch any tag, including `M`, against its payload.
pub(crate) fn convert_tagged(
    tag: TypeTag,
    payload: &Value,
    options: &TransformOptions,
) -> Result<Option<Value>> {
    match tag {
        TypeTag::List => convert_list(payload, options),
        TypeTag::Map => convert_map(payload, options),
        _ => convert_scalar(tag, payload, options),
    }
}
