//! The closed set of type tags that wrap values in the tagged encoding.

use std::fmt;

/// A type tag naming the semantic type of a tagged value's payload.
///
/// The wire form is the upper-case key of the wrapper object, e.g. the `"N"`
/// in `{"N": "42"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `S` -- string payload, with RFC3339 timestamp detection.
    String,
    /// `N` -- number carried as a string.
    Number,
    /// `BOOL` -- boolean token carried as a string.
    Bool,
    /// `NULL` -- null marker carried as a boolean token.
    Null,
    /// `L` -- array of tagged scalars.
    List,
    /// `M` -- object keyed by type tags.
    Map,
}

impl TypeTag {
    /// All tags, in wire-key order.
    pub const ALL: [TypeTag; 6] = [
        TypeTag::String,
        TypeTag::Number,
        TypeTag::Bool,
        TypeTag::Null,
        TypeTag::List,
        TypeTag::Map,
    ];

    /// Look up a tag by its wire key. Matching is exact and case-sensitive;
    /// anything outside the fixed set returns `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "S" => Some(TypeTag::String),
            "N" => Some(TypeTag::Number),
            "BOOL" => Some(TypeTag::Bool),
            "NULL" => Some(TypeTag::Null),
            "L" => Some(TypeTag::List),
            "M" => Some(TypeTag::Map),
            _ => None,
        }
    }

    /// The wire key for this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::String => "S",
            TypeTag::Number => "N",
            TypeTag::Bool => "BOOL",
            TypeTag::Null => "NULL",
            TypeTag::List => "L",
            TypeTag::Map => "M",
        }
    }

    /// Scalar tags carry a raw string payload.
    pub fn is_scalar(self) -> bool {
        !matches!(self, TypeTag::List | TypeTag::Map)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
