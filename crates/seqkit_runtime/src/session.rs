//! Session state for the REPL.
//!
//! The session owns the tracer and the last result, and executes parsed
//! [`Command`]s against them.

use std::fmt::Write;

use seqkit_debug::{ObservabilityConfig, TraceOutput, Tracer};
use seqkit_foundation::{Result, Value};
use seqkit_stdlib::Operation;

use crate::command::{Command, TraceFormat, parse_command};

/// Number of records shown by `traces` without a count.
pub const DEFAULT_TRACE_COUNT: usize = 20;

/// What executing a command produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// An operation result.
    Value(Value),
    /// Text for the user.
    Message(String),
    /// Nothing to print.
    Silent,
    /// The user asked to leave.
    Quit,
}

/// Session state for an interactive or batch run.
#[derive(Debug)]
pub struct Session {
    /// Tracer for observability.
    tracer: Tracer,

    /// Result of the most recent successful invocation.
    last_result: Option<Value>,
}

impl Session {
    /// Creates a new session with tracing disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&ObservabilityConfig::default())
    }

    /// Creates a new session with the given observability settings.
    #[must_use]
    pub fn with_config(config: &ObservabilityConfig) -> Self {
        Self {
            tracer: Tracer::new(config.tracer_config()),
            last_result: None,
        }
    }

    /// Returns the tracer.
    #[must_use]
    pub const fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Returns a mutable reference to the tracer.
    pub fn tracer_mut(&mut self) -> &mut Tracer {
        &mut self.tracer
    }

    /// Returns the number of invocations made so far.
    #[must_use]
    pub fn invocation_count(&self) -> u64 {
        self.tracer.current_invocation()
    }

    /// Returns the result of the most recent successful invocation.
    #[must_use]
    pub const fn last_result(&self) -> Option<&Value> {
        self.last_result.as_ref()
    }

    /// Invokes an operation, tracing it if tracing is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if an argument has the wrong type for the operation.
    pub fn invoke(&mut self, op: Operation, args: &[Value]) -> Result<Value> {
        self.tracer.begin_invocation();

        if self.tracer.is_enabled() {
            self.tracer.invoke_start(op, args.len());
            // Type errors surface from `call` below
            if let Ok(positions) = op.sentinel_positions(args) {
                for index in positions {
                    if let Some(text) = args.get(index).and_then(Value::as_str) {
                        self.tracer.sentinel_default(op, index, text);
                    }
                }
            }
        }

        match op.call(args) {
            Ok(value) => {
                self.tracer.invoke_end(op, &value);
                self.last_result = Some(value.clone());
                Ok(value)
            }
            Err(e) => {
                self.tracer.invoke_failed(op, e.to_string());
                Err(e)
            }
        }
    }

    /// Parses and executes one line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line does not parse or the invocation fails.
    pub fn eval(&mut self, line: &str) -> Result<Outcome> {
        let command = parse_command(line)?;
        self.execute(command)
    }

    /// Executes a parsed command.
    ///
    /// # Errors
    ///
    /// Returns an error if the invocation fails.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let outcome = match command {
            Command::Empty => Outcome::Silent,
            Command::Invoke { op, args } => Outcome::Value(self.invoke(op, &args)?),
            Command::Help => Outcome::Message(help_text()),
            Command::Ops => Outcome::Message(operations_text()),
            Command::Trace(on) => {
                if on {
                    self.tracer.enable();
                } else {
                    self.tracer.disable();
                }
                Outcome::Message(format!("tracing {}", if on { "on" } else { "off" }))
            }
            Command::Traces(count) => {
                let records = self
                    .tracer
                    .buffer()
                    .recent(count.unwrap_or(DEFAULT_TRACE_COUNT));
                if records.is_empty() {
                    Outcome::Message("no traces recorded".to_string())
                } else {
                    Outcome::Message(self.tracer.format_records(&records))
                }
            }
            Command::Format(format) => {
                self.tracer.set_json_format(format == TraceFormat::Json);
                Outcome::Message(format!("trace format {format}"))
            }
            Command::ClearTraces => {
                self.tracer.clear();
                Outcome::Silent
            }
            Command::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }

    /// Sets whether trace records are printed to stderr as they happen.
    pub fn set_trace_to_stderr(&mut self, on: bool) {
        self.tracer.set_output(if on {
            TraceOutput::Stderr
        } else {
            TraceOutput::None
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn help_text() -> String {
    "\
<operation> <args...>   run an operation (see `ops`)
help                    show this summary
ops                     list operations
trace on|off            record invocations
traces [N]              show the last N trace records
format human|json       trace output format
clear-traces            discard recorded traces
quit, exit              leave the session

Arguments are separated by whitespace. Use \"...\" for text containing
spaces or for the empty string. # starts a comment."
        .to_string()
}

fn operations_text() -> String {
    let width = Operation::ALL
        .iter()
        .map(|op| op.name().len())
        .max()
        .unwrap_or(0);
    let mut text = String::new();
    for op in Operation::ALL {
        let _ = writeln!(
            text,
            "{:<width$}  [{}]  {}",
            op.name(),
            op.input_type(),
            op.description()
        );
    }
    text.truncate(text.trim_end().len());
    text
}
