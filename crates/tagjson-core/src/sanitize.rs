//! Whitespace sanitization applied to every raw payload and field name.

/// Strip leading and trailing whitespace.
///
/// Uses Unicode `White_Space`, so non-breaking and ideographic spaces are
/// removed along with ASCII blanks and line breaks.
///
/// ```
/// use tagjson_core::sanitize;
/// assert_eq!(sanitize("  Alice \n"), "Alice");
/// assert_eq!(sanitize("\t"), "");
/// ```
pub fn sanitize(raw: &str) -> &str {
    raw.trim()
}
