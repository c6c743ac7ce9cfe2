//! Integration tests for the text utilities
//!
//! Tests parse_ints_or_zero, strip_currency_and_parse, filter_and_shout,
//! count_short, and allowed_colors.

use seqkit_stdlib::{
    allowed_colors, count_short, filter_and_shout, parse_ints_or_zero, strip_currency_and_parse,
};

// =============================================================================
// parse_ints_or_zero
// =============================================================================

#[test]
fn parse_ints_or_zero_examples() {
    assert_eq!(
        parse_ints_or_zero(&["5", "abc", "0", "-3"]),
        vec![5.0, 0.0, 0.0, -3.0]
    );
}

#[test]
fn parse_ints_or_zero_whole_string() {
    assert_eq!(
        parse_ints_or_zero(&["5.5", " 12 ", "12px", "", "0x10"]),
        vec![5.5, 12.0, 0.0, 0.0, 16.0]
    );
}

#[test]
fn parse_ints_or_zero_accepts_owned_strings() {
    let owned = vec![String::from("7"), String::from("seven")];
    assert_eq!(parse_ints_or_zero(&owned), vec![7.0, 0.0]);
}

// =============================================================================
// strip_currency_and_parse
// =============================================================================

#[test]
fn strip_currency_examples() {
    assert_eq!(
        strip_currency_and_parse(&["$5", "10", "$", "$abc"]),
        vec![5.0, 10.0, 0.0, 0.0]
    );
    assert_eq!(strip_currency_and_parse::<&str>(&[]), Vec::<f64>::new());
}

#[test]
fn strip_currency_truncates_and_strips_once() {
    assert_eq!(
        strip_currency_and_parse(&["$12.99", "$$5", "7 dollars", "-$3"]),
        vec![12.0, 0.0, 7.0, 0.0]
    );
}

#[test]
fn strip_currency_large_amounts() {
    assert_eq!(
        strip_currency_and_parse(&["$99999999999999999999999", "$9007199254740993.50"]),
        vec![1e23, 9_007_199_254_740_992.0]
    );
}

// =============================================================================
// filter_and_shout
// =============================================================================

#[test]
fn filter_and_shout_examples() {
    assert_eq!(filter_and_shout(&["hi?", "go!", "ok"]), vec!["GO!", "ok"]);
}

#[test]
fn filter_and_shout_edge_cases() {
    assert_eq!(
        filter_and_shout(&["", "?", "!", "wait?!", "why!?"]),
        vec!["", "!", "WAIT?!"]
    );
    assert!(filter_and_shout::<&str>(&[]).is_empty());
}

// =============================================================================
// count_short
// =============================================================================

#[test]
fn count_short_examples() {
    assert_eq!(count_short(&["a", "bob", "hello", ""]), 3);
    assert_eq!(count_short::<&str>(&[]), 0);
    assert_eq!(count_short(&["four", "abc"]), 1);
}

#[test]
fn count_short_counts_utf16_units() {
    assert_eq!(count_short(&["héé", "日本語"]), 2);
    // two astral-plane characters are four units long
    assert_eq!(count_short(&["😀😀"]), 0);
    assert_eq!(count_short(&["a😀", "😀😀", "ab"]), 2);
}

// =============================================================================
// allowed_colors
// =============================================================================

#[test]
fn allowed_colors_examples() {
    assert!(allowed_colors::<&str>(&[]));
    assert!(allowed_colors(&["red", "blue"]));
    assert!(allowed_colors(&["green", "green"]));
    assert!(!allowed_colors(&["red", "purple"]));
}

#[test]
fn allowed_colors_is_case_sensitive() {
    assert!(!allowed_colors(&["Red"]));
    assert!(!allowed_colors(&["red "]));
}
