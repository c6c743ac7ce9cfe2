//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use seqkit_stdlib::Operation;

use crate::command::META_COMMANDS;

const RESET: &str = "\x1b[0m";

/// Highlighter for seqkit command lines.
///
/// Colors the leading operation or meta command, numbers, quoted strings,
/// and comments. Unknown words are left plain.
pub struct SeqkitHighlighter;

impl SeqkitHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.chars().peekable();
        let mut first_word = true;

        while let Some(c) = chars.next() {
            match c {
                c if c.is_whitespace() => result.push(c),

                // Comments run to the end of the line
                '#' => {
                    result.push_str("\x1b[2;3m"); // dim italic
                    result.push(c);
                    result.extend(chars.by_ref());
                    result.push_str(RESET);
                }

                '"' => {
                    result.push_str("\x1b[33m"); // yellow
                    result.push(c);
                    while let Some(next) = chars.next() {
                        result.push(next);
                        match next {
                            '\\' => {
                                if let Some(escaped) = chars.next() {
                                    result.push(escaped);
                                }
                            }
                            '"' => break,
                            _ => {}
                        }
                    }
                    result.push_str(RESET);
                    first_word = false;
                }

                _ => {
                    let mut word = String::new();
                    word.push(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_whitespace() {
                            break;
                        }
                        word.push(next);
                        chars.next();
                    }

                    let color = word_color(&word, first_word);
                    if color.is_empty() {
                        result.push_str(&word);
                    } else {
                        result.push_str(color);
                        result.push_str(&word);
                        result.push_str(RESET);
                    }
                    first_word = false;
                }
            }
        }

        Cow::Owned(result)
    }
}

fn word_color(word: &str, first_word: bool) -> &'static str {
    if first_word {
        if word.parse::<Operation>().is_ok() {
            return "\x1b[1;32m"; // bold green
        }
        if META_COMMANDS.contains(&word) {
            return "\x1b[36m"; // cyan
        }
        return "\x1b[31m"; // red: nothing by that name
    }
    if seqkit_foundation::parse_decimal(word).is_some() {
        "\x1b[35m" // magenta
    } else {
        ""
    }
}

impl Default for SeqkitHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
