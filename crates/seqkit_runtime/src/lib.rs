//! Command language, session, REPL, and CLI for seqkit.
//!
//! This crate provides:
//! - [`command`] - Tokenizing and parsing of command lines
//! - [`Session`] - Traced invocation of operations and meta commands
//! - [`Repl`] - Interactive read-eval-print loop
//! - The `seqkit` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod editor;
pub mod highlight;
pub mod repl;
pub mod session;

pub use command::{Command, TraceFormat, Token, parse_command, tokenize};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::SeqkitHighlighter;
pub use repl::Repl;
pub use session::{Outcome, Session};
