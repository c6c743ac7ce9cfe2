//! Integration tests for the command language

use seqkit_foundation::{ErrorKind, Value};
use seqkit_runtime::command::{Command, TraceFormat, parse_command, tokenize};
use seqkit_stdlib::Operation;

#[test]
fn every_operation_parses_by_name() {
    for op in Operation::ALL {
        match parse_command(op.name()).unwrap() {
            Command::Invoke { op: parsed, args } => {
                assert_eq!(parsed, op);
                assert!(args.is_empty());
            }
            other => panic!("{} parsed as {other:?}", op.name()),
        }
    }
}

#[test]
fn text_arguments_with_spaces_and_empties() {
    let command = parse_command(r#"count-short "" "a b" abcd # trailing"#).unwrap();
    assert_eq!(
        command,
        Command::Invoke {
            op: Operation::CountShort,
            args: vec![Value::from(""), Value::from("a b"), Value::from("abcd")],
        }
    );
}

#[test]
fn numeric_arguments_are_strict() {
    let err = parse_command("render-sum 1 2x").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseError { column: 14, .. }));
    assert!(err.to_string().contains("\"2x\""));
}

#[test]
fn unterminated_string_reports_its_column() {
    let err = parse_command("count-short ok \"open").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseError { column: 16, .. }));
}

#[test]
fn format_command() {
    assert_eq!(
        parse_command("format human").unwrap(),
        Command::Format(TraceFormat::Human)
    );
}

#[test]
fn tokens_keep_columns() {
    let tokens = tokenize("bookend  10 \"x\"").unwrap();
    let columns: Vec<_> = tokens.iter().map(|t| t.column).collect();
    assert_eq!(columns, vec![1, 10, 13]);
}
