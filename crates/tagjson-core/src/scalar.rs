//! Scalar converters for the `S`, `N`, `BOOL` and `NULL` tags.
//!
//! Each converter takes the raw string payload of its tag and returns
//! `Some(value)` or `None` when nothing should be emitted. Empty and
//! whitespace-only payloads always yield `None`.

use crate::error::Result;
use crate::options::TransformOptions;
use crate::sanitize::sanitize;
use crate::tag::TypeTag;
use chrono::{DateTime, Timelike};
use regex::Regex;
use serde_json::{Number, Value};
use std::sync::LazyLock;

/// Timestamp shape that triggers RFC3339 parsing. Unanchored: a string that
/// merely contains a timestamp is still offered to the parser.
static RFC3339_UTC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z").unwrap());

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

const TRUTHY: [&str; 6] = ["1", "t", "T", "TRUE", "true", "True"];
const FALSY: [&str; 6] = ["0", "f", "F", "FALSE", "false", "False"];

/// Convert an `S` payload.
///
/// A sanitized value containing a `YYYY-MM-DDTHH:MM:SSZ` timestamp is parsed
/// as RFC3339 and, if the whole value parses, becomes Unix epoch seconds.
/// Otherwise the sanitized text is returned.
///
/// ```
/// use serde_json::json;
/// use tagjson_core::convert_string;
///
/// assert_eq!(convert_string("2023-01-15T10:30:00Z"), Some(json!(1673778600)));
/// assert_eq!(convert_string(" hi "), Some(json!("hi")));
/// assert_eq!(convert_string("  "), None);
/// ```
pub fn convert_string(raw: &str) -> Option<Value> {
    let value = sanitize(raw);
    if RFC3339_UTC.is_match(value) {
        // chrono stores a leap second as nanosecond >= 1e9; second 60 is
        // out of range here and the value stays text.
        if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
            if ts.nanosecond() < 1_000_000_000 {
                return Some(Value::from(ts.timestamp()));
            }
        }
    }
    if value.is_empty() {
        return None;
    }
    Some(Value::String(value.to_string()))
}

/// Convert an `N` payload by parsing it as a 64-bit float.
///
/// Decimal and hexadecimal (`0x1.8p3`) forms are accepted. Whole numbers
/// within the exactly-representable range are emitted as JSON integers.
/// Unparseable and non-finite values yield `None`.
pub fn convert_number(raw: &str) -> Option<Value> {
    let value = sanitize(raw);
    if value.is_empty() {
        return None;
    }
    value
        .parse::<f64>()
        .ok()
        .or_else(|| parse_hex_float(value))
        .and_then(number_value)
}

/// Convert a `BOOL` payload. Only the twelve canonical tokens are recognized.
pub fn convert_bool(raw: &str) -> Option<Value> {
    parse_token(raw).map(Value::Bool)
}

/// Convert a `NULL` payload.
///
/// A truthy token yields `None` and a falsy token yields `false`. Neither
/// path ever produces JSON `null`.
pub fn convert_null(raw: &str) -> Option<Value> {
    match parse_token(raw)? {
        true => None,
        false => Some(Value::Bool(false)),
    }
}

/// Dispatch a scalar tag against its payload, which must be a JSON string.
pub(crate) fn convert_scalar(
    tag: TypeTag,
    payload: &Value,
    options: &TransformOptions,
) -> Result<Option<Value>> {
    let Value::String(raw) = payload else {
        return options.shape_mismatch(tag, "a string", payload);
    };
    let converted = match tag {
        TypeTag::String => convert_string(raw),
        TypeTag::Number => convert_number(raw),
        TypeTag::Bool => convert_bool(raw),
        TypeTag::Null => convert_null(raw),
        TypeTag::List | TypeTag::Map => None,
    };
    if converted.is_none() {
        tracing::trace!(%tag, raw = raw.as_str(), "payload produced no value");
    }
    Ok(converted)
}

fn parse_token(raw: &str) -> Option<bool> {
    let value = sanitize(raw);
    if TRUTHY.contains(&value) {
        Some(true)
    } else if FALSY.contains(&value) {
        Some(false)
    } else {
        None
    }
}

/// Parse `[+-]0x<hex>[.<hex>]p[+-]<dec>`. The binary exponent is mandatory.
fn parse_hex_float(s: &str) -> Option<f64> {
    let (negative, rest) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let rest = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))?;
    let (mantissa, exponent) = rest.split_once(['p', 'P'])?;
    let exponent: i32 = exponent.parse().ok()?;
    let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut n = 0f64;
    for c in int_digits.chars() {
        n = n * 16.0 + f64::from(c.to_digit(16)?);
    }
    let mut scale = 1.0 / 16.0;
    for c in frac_digits.chars() {
        n += f64::from(c.to_digit(16)?) * scale;
        scale /= 16.0;
    }
    let n = n * 2f64.powi(exponent);
    Some(if negative { -n } else { n })
}

fn number_value(n: f64) -> Option<Value> {
    if !n.is_finite() {
        return None;
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Some(Value::from(n as i64));
    }
    Number::from_f64(n).map(Value::Number)
}
