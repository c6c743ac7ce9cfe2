//! Configuration for the observability system.

use crate::trace::{DEFAULT_BUFFER_SIZE, TracerConfig};

/// Configuration for the observability system.
///
/// Controls whether invocations are traced, how many records are retained,
/// and how they are printed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Whether tracing is enabled (false = zero overhead).
    pub enabled: bool,

    /// Trace ring buffer size (number of records to retain).
    pub buffer_size: usize,

    /// Print each trace record to stderr as it is recorded.
    pub trace_to_stderr: bool,

    /// Output format: true for JSON, false for human-readable.
    pub json_output: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: DEFAULT_BUFFER_SIZE,
            trace_to_stderr: true,
            json_output: false,
        }
    }
}

impl ObservabilityConfig {
    /// Creates a new configuration with tracing enabled.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Creates a configuration for development: traced, but kept in the
    /// buffer rather than printed.
    #[must_use]
    pub fn development() -> Self {
        Self {
            enabled: true,
            buffer_size: 1000,
            trace_to_stderr: false,
            json_output: false,
        }
    }

    /// Creates a configuration for debugging: every record printed as it
    /// happens, with a large buffer.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            enabled: true,
            buffer_size: 100_000,
            trace_to_stderr: true,
            json_output: false,
        }
    }

    /// Builder method to set enabled state.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to enable/disable stderr tracing.
    #[must_use]
    pub fn with_trace_to_stderr(mut self, trace: bool) -> Self {
        self.trace_to_stderr = trace;
        self
    }

    /// Builder method to enable/disable JSON output.
    #[must_use]
    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    /// Converts into the configuration of a [`Tracer`](crate::Tracer).
    #[must_use]
    pub fn tracer_config(&self) -> TracerConfig {
        let mut config = TracerConfig::new().with_buffer_size(self.buffer_size);
        if self.enabled {
            config = config.enabled();
        }
        if self.trace_to_stderr {
            config = config.to_stderr();
        }
        if self.json_output {
            config = config.json();
        }
        config
    }
}
