//! Error types for seqkit.
//!
//! Uses `thiserror` for ergonomic error definition. The collection utilities
//! themselves are total; errors only arise where dynamic values or user
//! input cross into them.

use thiserror::Error;

use crate::types::Type;

/// Result alias used throughout seqkit.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for seqkit operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an unknown operation error.
    #[must_use]
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownOperation(name.into()))
    }

    /// Creates a parse error at the given (1-indexed) column.
    #[must_use]
    pub fn parse(message: impl Into<String>, column: usize) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            column,
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An argument did not have the element type an operation expects.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// No operation is registered under this name.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Command input could not be parsed.
    #[error("parse error at column {column}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Column number (1-indexed).
        column: usize,
    },

    /// Internal or environmental failure (I/O, terminal).
    #[error("internal error: {0}")]
    Internal(String),
}
