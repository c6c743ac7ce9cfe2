//! Integration tests for Value and Type
//!
//! Tests construction, accessors, typing, and display.

use seqkit_foundation::{Type, Value};

#[test]
fn value_accessors() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Int(3).as_int(), Some(3));
    assert_eq!(Value::Number(1.5).as_number(), Some(1.5));
    assert_eq!(Value::from("red").as_str(), Some("red"));
    assert_eq!(Value::from("red").as_number(), None);
    assert_eq!(Value::numbers([1.0]).as_vec().map(<[Value]>::len), Some(1));
}

#[test]
fn value_types() {
    assert_eq!(Value::Bool(false).value_type(), Type::Bool);
    assert_eq!(Value::Int(0).value_type(), Type::Int);
    assert_eq!(Value::Number(0.0).value_type(), Type::Number);
    assert_eq!(Value::from("").value_type(), Type::String);
    assert_eq!(
        Value::numbers([1.0, 2.0]).value_type(),
        Type::vec(Type::Number)
    );
    assert_eq!(Value::Vec(vec![]).value_type(), Type::vec(Type::Any));
}

#[test]
fn value_display() {
    assert_eq!(Value::numbers([1.0, -9.5]).to_string(), "[1 -9.5]");
    assert_eq!(Value::strings(["GO!", ""]).to_string(), "[\"GO!\" \"\"]");
    assert_eq!(Value::from("6=1+2+3").to_string(), "6=1+2+3");
    assert_eq!(Value::Int(3).to_string(), "3");
    assert_eq!(Value::Bool(true).to_string(), "true");
}

#[test]
fn value_conversions() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(2usize), Value::Int(2));
    assert_eq!(Value::from(2.5), Value::Number(2.5));
    assert_eq!(Value::from(String::from("a")), Value::from("a"));
    assert_eq!(
        Value::from(vec![Value::Number(1.0)]),
        Value::numbers([1.0])
    );
}

#[test]
fn type_display() {
    assert_eq!(Type::Bool.to_string(), "bool");
    assert_eq!(Type::vec(Type::String).to_string(), "[string]");
    assert!(Type::vec(Type::Any).is_vec());
    assert!(!Type::Any.is_vec());
}
