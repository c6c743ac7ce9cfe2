//! seqkit CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use seqkit_debug::ObservabilityConfig;
use seqkit_runtime::command::{Command, Token};
use seqkit_runtime::{Outcome, Repl, Session};

/// Errors from the command line itself.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("{0} line(s) of the batch file failed")]
    BatchFailed(usize),
    #[error(transparent)]
    Seqkit(#[from] seqkit_foundation::Error),
}

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    show_help: bool,
    show_version: bool,
    batch_file: Option<PathBuf>,
    trace: bool,
    json: bool,
    quiet: bool,
    /// The operation and its arguments, verbatim.
    invocation: Vec<String>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, CliError> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => {
                let path = args.next().ok_or(CliError::MissingValue("--batch"))?;
                config.batch_file = Some(PathBuf::from(path));
            }
            "--trace" => config.trace = true,
            "--json" => config.json = true,
            "-q" | "--quiet" => config.quiet = true,
            "--" => {
                config.invocation.extend(args.by_ref());
            }
            option if option.starts_with('-') => {
                return Err(CliError::UnknownOption(option.to_string()));
            }
            word => {
                // Everything after the operation belongs to it, so negative
                // numbers are never mistaken for options.
                config.invocation.push(word.to_string());
                config.invocation.extend(args.by_ref());
            }
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), CliError> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("seqkit {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let observability = ObservabilityConfig::default()
        .with_enabled(config.trace)
        .with_json_output(config.json);
    let mut session = Session::with_config(&observability);

    if !config.invocation.is_empty() {
        let tokens = config
            .invocation
            .into_iter()
            .enumerate()
            .map(|(i, text)| Token::word(text, i + 1))
            .collect();
        let outcome = session.execute(Command::from_tokens(tokens)?)?;
        match outcome {
            Outcome::Value(value) => println!("{value}"),
            Outcome::Message(text) => println!("{text}"),
            Outcome::Silent | Outcome::Quit => {}
        }
        return Ok(());
    }

    let mut repl = Repl::new()?.with_session(session);

    if let Some(path) = &config.batch_file {
        let failures = repl.eval_file(path)?;
        if failures > 0 {
            return Err(CliError::BatchFailed(failures));
        }
        return Ok(());
    }

    if config.quiet {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mseqkit\x1b[0m - Small utilities over ordered sequences

\x1b[1mUSAGE:\x1b[0m
    seqkit [OPTIONS] [OPERATION ARGS...]

\x1b[1mARGUMENTS:\x1b[0m
    [OPERATION ARGS...]    Run one operation and print its result

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -b, --batch FILE       Evaluate each line of FILE and exit
    -q, --quiet            Start the REPL without the banner

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace                Print a trace record for every invocation
    --json                 Print trace records as JSON

\x1b[1mEXAMPLES:\x1b[0m
    seqkit                                   Start interactive REPL
    seqkit bookend 1 2 3                     Prints [1 3]
    seqkit inject-sum-after-first-negative 1 2 -3 4
    seqkit --trace parse-ints-or-zero 5 abc  Shows the defaulted input
    seqkit -b commands.sk                    Run a batch file

\x1b[1mREPL COMMANDS:\x1b[0m
    ops                  List operations
    help                 Show all commands
    trace on|off         Record invocations
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}
