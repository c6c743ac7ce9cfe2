//! Core types, values, and numeric text handling for seqkit.
//!
//! This crate provides:
//! - [`Number`] - The numeric element type of every sequence
//! - [`Value`] - Dynamic values passed across the operation registry
//! - [`Type`] - Type descriptors used in error messages
//! - [`Error`] - Error types with categorized kinds
//! - [`number`] - Numeric text coercion, prefix parsing, and rendering

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod number;
pub mod types;
pub mod value;

pub use error::{Error, ErrorKind, Result};
pub use number::{Number, coerce_number, parse_decimal, parse_int_prefix, render_number};
pub use types::Type;
pub use value::Value;
