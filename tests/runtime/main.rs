//! Integration tests for Layers 2 and 3: Tracing and Runtime
//!
//! Tests the command language, traced sessions, and trace output.

mod commands;
mod sessions;
mod tracing;
