//! The main REPL implementation.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use seqkit_foundation::{Error, Result};

use crate::command::quotes_balanced;
use crate::editor::{LineEditor, ReadResult, RustylineEditor, default_keywords};
use crate::session::{Outcome, Session};

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (tracer, last result).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (inside an open quote).
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E) -> Self {
        editor.set_keywords(default_keywords());
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "seqkit> ".to_string(),
            continuation_prompt: "...> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until EOF or `quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let Some(input) = self.read_input()? else {
            return Ok(false); // EOF
        };

        if input.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Outcome::Quit) => return Ok(false),
            Ok(outcome) => Self::print_outcome(&outcome),
            Err(e) => Self::print_error(&e),
        }

        Ok(true)
    }

    /// Reads one command, continuing across lines while a quote is open.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let result = if first_line {
                self.editor.read_line(&self.prompt)?
            } else {
                self.editor.read_continuation(&self.continuation_prompt)?
            };

            match result {
                ReadResult::Line(line) => {
                    if !first_line {
                        input.push('\n');
                    }
                    input.push_str(&line);

                    if quotes_balanced(&input) {
                        return Ok(Some(input));
                    }

                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("\nInput cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    if first_line {
                        return Ok(None);
                    }
                    return Err(Error::internal("unexpected EOF inside a quoted string"));
                }
            }
        }
    }

    /// Evaluates one command line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line does not parse or the invocation fails.
    pub fn eval(&mut self, input: &str) -> Result<Outcome> {
        self.session.eval(input)
    }

    /// Evaluates every line of a file, printing results as it goes.
    ///
    /// A failing line is reported with its location and evaluation moves on
    /// to the next line. Stops early at `quit`. Returns the number of lines
    /// that failed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn eval_file(&mut self, path: &Path) -> Result<usize> {
        let source = fs::read_to_string(path)
            .map_err(|e| Error::internal(format!("failed to read {}: {e}", path.display())))?;

        let mut failures = 0;
        for (number, line) in source.lines().enumerate() {
            match self.eval(line) {
                Ok(Outcome::Quit) => break,
                Ok(outcome) => Self::print_outcome(&outcome),
                Err(e) => {
                    failures += 1;
                    eprintln!(
                        "\x1b[31m{}:{}: Error: {e}\x1b[0m",
                        path.display(),
                        number + 1
                    );
                }
            }
        }

        Ok(failures)
    }

    fn print_outcome(outcome: &Outcome) {
        match outcome {
            Outcome::Value(value) => println!("{value}"),
            Outcome::Message(text) => println!("{text}"),
            Outcome::Silent | Outcome::Quit => {}
        }
    }

    fn print_error(error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    fn print_banner(&self) {
        println!("\x1b[1;36mseqkit\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type `help` for commands, `ops` for operations. Use Ctrl+D to exit.\n");
        if self.session.tracer().is_enabled() {
            println!("\x1b[33mTracing is on.\x1b[0m\n");
        }

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}
