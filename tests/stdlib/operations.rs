//! Integration tests for the operation registry
//!
//! Tests name lookup, dynamic calls, and sentinel reporting.

use seqkit_foundation::{ErrorKind, Type, Value};
use seqkit_stdlib::Operation;

fn strs(values: &[&str]) -> Vec<Value> {
    values.iter().copied().map(Value::from).collect()
}

#[test]
fn every_operation_is_registered_once() {
    let mut names: Vec<_> = Operation::ALL.iter().map(|op| op.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 9);
}

#[test]
fn lookup_by_name() {
    let op: Operation = "inject-sum-after-first-negative".parse().unwrap();
    assert_eq!(op, Operation::InjectSumAfterFirstNegative);
    assert!("injectSumAfterFirstNegative".parse::<Operation>().is_err());
}

#[test]
fn dynamic_calls_match_direct_calls() {
    let args = strs(&["hi?", "go!", "ok"]);
    assert_eq!(
        Operation::FilterAndShout.call(&args).unwrap(),
        Value::strings(seqkit_stdlib::filter_and_shout(&["hi?", "go!", "ok"]))
    );

    let args: Vec<Value> = [1.0, 9.0, -5.0, 7.0].into_iter().map(Value::Number).collect();
    assert_eq!(
        Operation::InjectSumAfterFirstNegative.call(&args).unwrap(),
        Value::numbers([1.0, 9.0, -5.0, 10.0, 7.0])
    );
}

#[test]
fn wrong_element_type_is_rejected() {
    let err = Operation::Bookend.call(&strs(&["1"])).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Type::Number,
            actual: Type::String
        }
    ));

    let err = Operation::AllowedColors
        .call(&[Value::Bool(true)])
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Type::String,
            actual: Type::Bool
        }
    ));
}

#[test]
fn sentinel_positions_match_zero_outputs() {
    let args = strs(&["5", "abc", "0", "-3", ""]);
    let positions = Operation::ParseIntsOrZero.sentinel_positions(&args).unwrap();
    assert_eq!(positions, vec![1, 2, 4]);

    let Value::Vec(out) = Operation::ParseIntsOrZero.call(&args).unwrap() else {
        panic!("expected a vector");
    };
    for i in positions {
        assert_eq!(out[i], Value::Number(0.0));
    }
}

#[test]
fn sentinel_positions_reject_wrong_types() {
    let err = Operation::StripCurrencyAndParse
        .sentinel_positions(&[Value::Number(1.0)])
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
}
