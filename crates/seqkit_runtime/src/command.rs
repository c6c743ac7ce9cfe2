//! The line-oriented command language.
//!
//! Each line is either an operation applied to its arguments or a meta
//! command:
//!
//! ```text
//! triple-all 1 2 -3.5
//! filter-and-shout "who?" go! "two words"
//! trace on            # comments run to the end of the line
//! traces 10
//! ```

use std::fmt;
use std::str::FromStr;

use seqkit_foundation::{Error, Result, Type, Value, parse_decimal};
use seqkit_stdlib::Operation;

// =============================================================================
// Tokens
// =============================================================================

/// A whitespace-separated token of a command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The token text, with quotes removed and escapes resolved.
    pub text: String,
    /// 1-based column of the token's first character.
    pub column: usize,
    /// Whether the token was written in double quotes.
    pub quoted: bool,
}

impl Token {
    /// Creates an unquoted token.
    #[must_use]
    pub fn word(text: impl Into<String>, column: usize) -> Self {
        Self {
            text: text.into(),
            column,
            quoted: false,
        }
    }
}

/// Splits a command line into tokens.
///
/// - Tokens are separated by whitespace
/// - `"..."` quotes a token; `\"`, `\\`, `\n`, and `\t` are recognized inside
/// - `#` at the start of an unquoted token comments out the rest of the line
///
/// # Errors
///
/// Returns a parse error for an unterminated quote, an unknown escape, or a
/// closing quote that is not followed by whitespace.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().enumerate().peekable();

    while let Some(&(i, ch)) = chars.peek() {
        let column = i + 1;
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '#' => break,
            '"' => {
                chars.next();
                let mut text = String::new();
                let mut closed = false;
                while let Some((j, c)) = chars.next() {
                    match c {
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\\' => match chars.next() {
                            Some((_, '"')) => text.push('"'),
                            Some((_, '\\')) => text.push('\\'),
                            Some((_, 'n')) => text.push('\n'),
                            Some((_, 't')) => text.push('\t'),
                            Some((_, other)) => {
                                return Err(Error::parse(
                                    format!("unknown escape \\{other}"),
                                    j + 1,
                                ));
                            }
                            None => break,
                        },
                        c => text.push(c),
                    }
                }
                if !closed {
                    return Err(Error::parse("unterminated string", column));
                }
                if let Some(&(j, c)) = chars.peek() {
                    if !c.is_whitespace() {
                        return Err(Error::parse(
                            "expected whitespace after closing quote",
                            j + 1,
                        ));
                    }
                }
                tokens.push(Token {
                    text,
                    column,
                    quoted: true,
                });
            }
            _ => {
                let mut text = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_whitespace() {
                        break;
                    }
                    text.push(c);
                    chars.next();
                }
                tokens.push(Token::word(text, column));
            }
        }
    }

    Ok(tokens)
}

/// Returns true if every quote on the line is closed.
///
/// Quotes count only where [`tokenize`] treats them as quotes, at the start
/// of a token.
#[must_use]
pub fn quotes_balanced(input: &str) -> bool {
    let mut chars = input.chars();
    let mut at_token_start = true;

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => at_token_start = true,
            '#' if at_token_start => return true,
            '"' if at_token_start => {
                loop {
                    match chars.next() {
                        None => return false,
                        Some('\\') => {
                            if chars.next().is_none() {
                                return false;
                            }
                        }
                        Some('"') => break,
                        Some(_) => {}
                    }
                }
                at_token_start = false;
            }
            _ => at_token_start = false,
        }
    }

    true
}

// =============================================================================
// Commands
// =============================================================================

/// Output format for trace records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceFormat {
    /// One line of text per record.
    Human,
    /// One JSON object per record.
    Json,
}

impl FromStr for TraceFormat {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TraceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => f.write_str("human"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// A blank or comment-only line.
    Empty,
    /// Run an operation on arguments.
    Invoke {
        /// The operation.
        op: Operation,
        /// Arguments, already typed for the operation.
        args: Vec<Value>,
    },
    /// Print the command summary.
    Help,
    /// List operations.
    Ops,
    /// Turn tracing on or off.
    Trace(bool),
    /// Show the most recent trace records.
    Traces(Option<usize>),
    /// Select the trace output format.
    Format(TraceFormat),
    /// Discard recorded traces.
    ClearTraces,
    /// Leave the session.
    Quit,
}

/// Names of all meta commands, for completion and highlighting.
pub const META_COMMANDS: [&str; 8] = [
    "help",
    "ops",
    "trace",
    "traces",
    "format",
    "clear-traces",
    "quit",
    "exit",
];

/// Parses one command line.
///
/// # Errors
///
/// Returns an error if the line does not tokenize, names an unknown
/// operation, or has malformed arguments.
pub fn parse_command(line: &str) -> Result<Command> {
    Command::from_tokens(tokenize(line)?)
}

impl Command {
    /// Builds a command from already split tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the first token names no command or operation, or
    /// if the arguments do not fit it.
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self> {
        let mut tokens = tokens.into_iter();
        let Some(head) = tokens.next() else {
            return Ok(Self::Empty);
        };
        let rest: Vec<Token> = tokens.collect();

        if !head.quoted {
            if let Some(command) = Self::meta(&head, &rest)? {
                return Ok(command);
            }
        }

        let op: Operation = head.text.parse()?;
        let args = if op.input_type() == Type::Number {
            rest.iter().map(number_arg).collect::<Result<Vec<_>>>()?
        } else {
            rest.into_iter().map(|t| Value::from(t.text)).collect()
        };

        Ok(Self::Invoke { op, args })
    }

    fn meta(head: &Token, rest: &[Token]) -> Result<Option<Self>> {
        let command = match head.text.as_str() {
            "help" => no_args(rest, Self::Help)?,
            "ops" => no_args(rest, Self::Ops)?,
            "clear-traces" => no_args(rest, Self::ClearTraces)?,
            "quit" | "exit" => no_args(rest, Self::Quit)?,
            "trace" => {
                let arg = single_arg(head, rest, "on or off")?;
                match arg.text.as_str() {
                    "on" => Self::Trace(true),
                    "off" => Self::Trace(false),
                    other => {
                        return Err(Error::parse(
                            format!("expected on or off, got {other:?}"),
                            arg.column,
                        ));
                    }
                }
            }
            "traces" => match rest {
                [] => Self::Traces(None),
                [arg] => {
                    let count = arg.text.parse().map_err(|_| {
                        Error::parse(format!("expected a count, got {:?}", arg.text), arg.column)
                    })?;
                    Self::Traces(Some(count))
                }
                [_, extra, ..] => return Err(unexpected(extra)),
            },
            "format" => {
                let arg = single_arg(head, rest, "human or json")?;
                let format = arg.text.parse().map_err(|()| {
                    Error::parse(
                        format!("expected human or json, got {:?}", arg.text),
                        arg.column,
                    )
                })?;
                Self::Format(format)
            }
            _ => return Ok(None),
        };
        Ok(Some(command))
    }
}

fn number_arg(token: &Token) -> Result<Value> {
    parse_decimal(&token.text)
        .map(Value::Number)
        .ok_or_else(|| Error::parse(format!("expected a number, got {:?}", token.text), token.column))
}

fn no_args(rest: &[Token], command: Command) -> Result<Command> {
    match rest.first() {
        None => Ok(command),
        Some(extra) => Err(unexpected(extra)),
    }
}

fn single_arg<'a>(head: &Token, rest: &'a [Token], expected: &str) -> Result<&'a Token> {
    match rest {
        [arg] => Ok(arg),
        [] => Err(Error::parse(
            format!("{} expects {expected}", head.text),
            head.column + head.text.chars().count(),
        )),
        [_, extra, ..] => Err(unexpected(extra)),
    }
}

fn unexpected(token: &Token) -> Error {
    Error::parse(format!("unexpected argument {:?}", token.text), token.column)
}
