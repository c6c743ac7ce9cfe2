//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for trace records.

use std::fmt::Write;

use seqkit_foundation::{Value, render_number};

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    /// Formats timestamp in microseconds.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let mut prefix = String::new();

        if self.show_ids {
            let _ = write!(prefix, "[{:06}] ", record.id);
        }

        let _ = write!(prefix, "#{:04} ", record.invocation);

        if self.show_timestamps {
            let _ = write!(
                prefix,
                "{:>10} ",
                Self::format_timestamp(record.timestamp_ns)
            );
        }

        let event_str = match &record.event {
            TraceEvent::InvokeStart { op, input_len } => {
                let noun = if *input_len == 1 { "input" } else { "inputs" };
                format!(">> {op} ({input_len} {noun})")
            }
            TraceEvent::SentinelDefault { op, index, text } => {
                format!("   DEFAULT {op}[{index}] {text:?} -> 0")
            }
            TraceEvent::InvokeEnd { op, output } => {
                format!("<< {op} = {output}")
            }
            TraceEvent::InvokeFailed { op, message } => {
                format!("!! {op} FAILED: {message}")
            }
            TraceEvent::Custom { name, data } => {
                format!("   CUSTOM {name}: {data}")
            }
        };

        format!("{prefix}{event_str}")
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as JSON.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to put each record of a list on its own line.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Escapes a string for JSON.
    fn escape_string(s: &str) -> String {
        let mut escaped = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '\\' => escaped.push_str("\\\\"),
                '"' => escaped.push_str("\\\""),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                c if c.is_control() => {
                    let _ = write!(escaped, "\\u{:04x}", u32::from(c));
                }
                c => escaped.push(c),
            }
        }
        escaped
    }

    /// Formats a value as JSON.
    fn format_value(value: &Value) -> String {
        match value {
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Number(n) if n.is_finite() => render_number(*n),
            // JSON has no literal for these
            Value::Number(n) => format!("\"{}\"", render_number(*n)),
            Value::String(s) => format!("\"{}\"", Self::escape_string(s)),
            Value::Vec(items) => {
                let items: Vec<_> = items.iter().map(Self::format_value).collect();
                format!("[{}]", items.join(","))
            }
        }
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let event_data = match &record.event {
            TraceEvent::InvokeStart { op, input_len } => {
                format!("\"op\":\"{op}\",\"input_len\":{input_len}")
            }
            TraceEvent::SentinelDefault { op, index, text } => {
                format!(
                    "\"op\":\"{op}\",\"index\":{index},\"text\":\"{}\"",
                    Self::escape_string(text)
                )
            }
            TraceEvent::InvokeEnd { op, output } => {
                format!("\"op\":\"{op}\",\"output\":{}", Self::format_value(output))
            }
            TraceEvent::InvokeFailed { op, message } => {
                format!(
                    "\"op\":\"{op}\",\"message\":\"{}\"",
                    Self::escape_string(message)
                )
            }
            TraceEvent::Custom { name, data } => {
                format!(
                    "\"name\":\"{}\",\"data\":{}",
                    Self::escape_string(name),
                    Self::format_value(data)
                )
            }
        };

        format!(
            "{{\"id\":{},\"invocation\":{},\"timestamp_ns\":{},\"type\":\"{}\",{}}}",
            record.id,
            record.invocation,
            record.timestamp_ns,
            record.event_type(),
            event_data
        )
    }

    fn format_many(&self, records: &[&TraceRecord]) -> String {
        let items: Vec<_> = records.iter().map(|r| self.format(r)).collect();
        if self.pretty {
            format!("[\n  {}\n]", items.join(",\n  "))
        } else {
            format!("[{}]", items.join(","))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
