//! Column type descriptors for the output row layout.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type of one output column.
///
/// Scalars are fixed-width; vectors are serialized length-prefixed and may
/// nest (e.g. per-bunch-crossing lists of per-vertex values).
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColumnType {
    /// Boolean.
    Bool,
    /// 32-bit signed integer.
    Int,
    /// 32-bit float.
    Float,
    /// UTF-8 string.
    String,
    /// Variable-length ordered sequence.
    Vec(Box<ColumnType>),
}

impl ColumnType {
    /// Creates a vector type with the given element type.
    #[must_use]
    pub fn vec(element: ColumnType) -> Self {
        Self::Vec(Box::new(element))
    }
}

impl fmt::Debug for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::Vec(t) => write!(f, "vector<{t:?}>"),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
