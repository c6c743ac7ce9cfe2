//! Integration tests for sessions

use seqkit_debug::ObservabilityConfig;
use seqkit_foundation::{ErrorKind, Value};
use seqkit_runtime::{Outcome, Session};

fn run(session: &mut Session, line: &str) -> Value {
    match session.eval(line).unwrap() {
        Outcome::Value(value) => value,
        other => panic!("{line:?} produced {other:?}"),
    }
}

#[test]
fn session_runs_every_documented_example() {
    let mut session = Session::new();

    assert_eq!(run(&mut session, "bookend"), Value::numbers([]));
    assert_eq!(run(&mut session, "bookend 4"), Value::numbers([4.0, 4.0]));
    assert_eq!(
        run(&mut session, "parse-ints-or-zero 5 abc 0 -3"),
        Value::numbers([5.0, 0.0, 0.0, -3.0])
    );
    assert_eq!(
        run(&mut session, "strip-currency-and-parse $5 10 $ $abc"),
        Value::numbers([5.0, 10.0, 0.0, 0.0])
    );
    assert_eq!(
        run(&mut session, "filter-and-shout hi? go! ok"),
        Value::strings(["GO!", "ok"])
    );
    assert_eq!(
        run(&mut session, "count-short a bob hello \"\""),
        Value::Int(3)
    );
    assert_eq!(
        run(&mut session, "allowed-colors red purple"),
        Value::Bool(false)
    );
    assert_eq!(run(&mut session, "render-sum 1 2 3"), Value::from("6=1+2+3"));
    assert_eq!(
        run(&mut session, "inject-sum-after-first-negative 1 9 -5 7"),
        Value::numbers([1.0, 9.0, -5.0, 10.0, 7.0])
    );

    assert_eq!(session.invocation_count(), 9);
}

#[test]
fn results_print_like_the_cli() {
    let mut session = Session::new();
    assert_eq!(run(&mut session, "triple-all 0.5 -1").to_string(), "[1.5 -3]");
    assert_eq!(
        run(&mut session, "filter-and-shout \"\" wow!").to_string(),
        "[\"\" \"WOW!\"]"
    );
}

#[test]
fn errors_leave_the_last_result_alone() {
    let mut session = Session::new();
    run(&mut session, "triple-all 1");
    let err = session.eval("triple-all one").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseError { .. }));
    assert_eq!(session.last_result(), Some(&Value::numbers([3.0])));
}

#[test]
fn configured_session_traces_from_the_start() {
    let config = ObservabilityConfig::development();
    let mut session = Session::with_config(&config);
    assert!(session.tracer().is_enabled());

    run(&mut session, "count-short a");
    assert_eq!(session.tracer().buffer().len(), 2);
}
