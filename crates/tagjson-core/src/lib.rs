//! # tagjson-core
//!
//! Converts **type-tagged JSON** (the DynamoDB-style encoding where every value
//! is wrapped in a single-key object naming its type) into plain JSON.
//!
//! ## Quick start
//!
//! ```rust
//! use serde_json::json;
//! use tagjson_core::transform_str;
//!
//! let tagged = r#"{"name ":{"S":" Alice "},"age":{"N":"30"},"bad":{"N":"oops"}}"#;
//! let plain = transform_str(tagged).unwrap();
//! assert_eq!(plain, vec![json!({"name": "Alice"}), json!({"age": 30})]);
//! ```
//!
//! Payloads that are empty or fail to convert are dropped rather than
//! reported. Only malformed JSON, a document that is neither an object nor
//! `null`, or (in strict mode) a scalar tag with a non-string payload produce
//! an error.
//!
//! ## Modules
//!
//! - [`tag`] — the `S`/`N`/`BOOL`/`NULL`/`L`/`M` tag set
//! - [`sanitize`](mod@sanitize) — whitespace trimming for payloads and field names
//! - [`scalar`] — string, number, boolean and null converters
//! - [`container`] — list and map converters
//! - [`document`] — top-level field iteration
//! - [`options`] — lenient vs strict handling of malformed payloads
//! - [`error`] — error types

pub mod container;
pub mod document;
pub mod error;
pub mod options;
pub mod sanitize;
pub mod scalar;
pub mod tag;

pub use container::{convert_list, convert_map};
pub use document::{transform_document, transform_document_with, transform_str};
pub use error::TransformError;
pub use options::TransformOptions;
pub use sanitize::sanitize;
pub use scalar::{convert_bool, convert_null, convert_number, convert_string};
pub use tag::TypeTag;
