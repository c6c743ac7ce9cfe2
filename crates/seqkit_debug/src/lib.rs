//! Tracing and observability for seqkit.
//!
//! This crate provides:
//! - [`Tracer`] - Records operation invocations into a ring buffer
//! - [`TraceFormatter`] - Human-readable and JSON rendering of records
//! - [`ObservabilityConfig`] - Session-level tracing configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod trace;

pub use config::ObservabilityConfig;
pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceEvent, TraceFormatter,
    TraceOutput, TraceRecord, Tracer, TracerConfig,
};
