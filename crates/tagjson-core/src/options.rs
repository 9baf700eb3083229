//! Runtime knobs for a transformation pass.

use crate::error::{kind_of, Result, TransformError};
use crate::tag::TypeTag;
use serde_json::Value;

/// Options controlling how a document is transformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Fail with [`TransformError::ShapeMismatch`] when a scalar tag carries a
    /// non-string payload, instead of dropping the value.
    pub strict: bool,
}

impl TransformOptions {
    /// Lenient mode: mismatched payloads are dropped.
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Strict mode: mismatched payloads abort the transformation.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Resolve a payload shape mismatch according to the configured mode.
    pub(crate) fn shape_mismatch(
        &self,
        tag: TypeTag,
        expected: &'static str,
        payload: &Value,
    ) -> Result<Option<Value>> {
        let found = kind_of(payload);
        if self.strict {
            return Err(TransformError::ShapeMismatch {
                tag,
                expected,
                found,
            });
        }
        tracing::debug!(%tag, expected, found, "dropping value with mismatched payload");
        Ok(None)
    }
}
