//! Trace event and record types.
//!
//! This module defines the events that can be traced while operations run.

use seqkit_foundation::Value;
use seqkit_stdlib::Operation;

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced during an invocation.
#[derive(Clone, Debug)]
pub enum TraceEvent {
    /// An operation is about to run.
    InvokeStart {
        /// The operation invoked.
        op: Operation,
        /// Number of input elements.
        input_len: usize,
    },

    /// An input string degraded to the sentinel `0`.
    SentinelDefault {
        /// The parsing operation.
        op: Operation,
        /// Index of the input element.
        index: usize,
        /// The text that did not parse to a nonzero number.
        text: String,
    },

    /// An operation finished.
    InvokeEnd {
        /// The operation invoked.
        op: Operation,
        /// The value it produced.
        output: Value,
    },

    /// An operation was rejected before producing a value.
    InvokeFailed {
        /// The operation invoked.
        op: Operation,
        /// The error message.
        message: String,
    },

    /// Custom user event.
    Custom {
        /// Event name.
        name: String,
        /// Event data.
        data: Value,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::InvokeStart { .. } => "invoke-start",
            Self::SentinelDefault { .. } => "sentinel-default",
            Self::InvokeEnd { .. } => "invoke-end",
            Self::InvokeFailed { .. } => "invoke-failed",
            Self::Custom { .. } => "custom",
        }
    }

    /// Returns the operation this event belongs to, if any.
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::InvokeStart { op, .. }
            | Self::SentinelDefault { op, .. }
            | Self::InvokeEnd { op, .. }
            | Self::InvokeFailed { op, .. } => Some(*op),
            Self::Custom { .. } => None,
        }
    }

    /// Returns true if this event opens or closes an invocation.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        matches!(
            self,
            Self::InvokeStart { .. } | Self::InvokeEnd { .. } | Self::InvokeFailed { .. }
        )
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Unique record ID within the session.
    pub id: u64,
    /// The invocation this event belongs to.
    pub invocation: u64,
    /// Timestamp in nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The trace event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, invocation: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            invocation,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

// =============================================================================
// Tests
// =============================================================================
