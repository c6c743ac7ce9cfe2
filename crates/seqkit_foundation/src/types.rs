//! Type descriptors for values crossing the operation registry.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type descriptor for a [`Value`](crate::Value).
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// Boolean type.
    Bool,
    /// Nonnegative count.
    Int,
    /// Numeric sequence element.
    Number,
    /// Text.
    String,
    /// Homogeneous vector type.
    Vec(Box<Type>),
    /// Any type (used for empty vectors).
    Any,
}

impl Type {
    /// Creates a vector type with the given element type.
    #[must_use]
    pub fn vec(element: Type) -> Self {
        Self::Vec(Box::new(element))
    }

    /// Returns true if this is a vector type.
    #[must_use]
    pub fn is_vec(&self) -> bool {
        matches!(self, Self::Vec(_))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Vec(elem) => write!(f, "[{elem}]"),
            Self::Any => write!(f, "any"),
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
