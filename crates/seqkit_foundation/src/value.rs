//! Dynamic values passed across the operation registry.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::number::{Number, render_number};
use crate::types::Type;

/// Dynamic value for operation arguments and results.
///
/// The collection utilities are strongly typed; `Value` exists so that a
/// registry, a session, or a tracer can handle any operation uniformly.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// Nonnegative count.
    Int(usize),
    /// Numeric value.
    Number(Number),
    /// String value.
    String(Arc<str>),
    /// Ordered sequence of values.
    Vec(Vec<Value>),
}

impl Value {
    /// Returns the type of this value.
    ///
    /// A vector's element type is taken from its first element.
    #[must_use]
    pub fn value_type(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::Int(_) => Type::Int,
            Self::Number(_) => Type::Number,
            Self::String(_) => Type::String,
            Self::Vec(items) => Type::vec(items.first().map_or(Type::Any, Value::value_type)),
        }
    }

    /// Returns the boolean if this is a `Bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the count if this is an `Int`.
    #[must_use]
    pub fn as_int(&self) -> Option<usize> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number if this is a `Number`.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text if this is a `String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is a `Vec`.
    #[must_use]
    pub fn as_vec(&self) -> Option<&[Value]> {
        match self {
            Self::Vec(items) => Some(items),
            _ => None,
        }
    }

    /// Collects numbers into a vector value.
    #[must_use]
    pub fn numbers(items: impl IntoIterator<Item = Number>) -> Self {
        Self::Vec(items.into_iter().map(Self::Number).collect())
    }

    /// Collects strings into a vector value.
    #[must_use]
    pub fn strings<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> Self {
        Self::Vec(items.into_iter().map(|s| Self::from(s.as_ref())).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Number(n) => write!(f, "{}", render_number(*n)),
            Self::String(s) => write!(f, "{s}"),
            Self::Vec(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    // Quote strings inside vectors so empty strings stay visible.
                    match item {
                        Self::String(s) => write!(f, "{s:?}")?,
                        other => write!(f, "{other}")?,
                    }
                }
                write!(f, "]")
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "Bool({b})"),
            Self::Int(n) => write!(f, "Int({n})"),
            Self::Number(n) => write!(f, "Number({})", render_number(*n)),
            Self::String(s) => write!(f, "String({s:?})"),
            Self::Vec(items) => f.debug_list().entries(items).finish(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Self::Int(n)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(Arc::from(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Vec(items)
    }
}
