//! Integration tests for numeric text
//!
//! Tests whole-string coercion, prefix integer parsing, and rendering.

use proptest::num::f64 as float;
use proptest::prelude::*;
use seqkit_foundation::{coerce_number, parse_decimal, parse_int_prefix, render_number};

// =============================================================================
// Whole-String Coercion
// =============================================================================

#[test]
fn coerce_decimal_literals() {
    assert_eq!(coerce_number("5"), Some(5.0));
    assert_eq!(coerce_number("-3.25"), Some(-3.25));
    assert_eq!(coerce_number("1."), Some(1.0));
    assert_eq!(coerce_number(".5"), Some(0.5));
    assert_eq!(coerce_number("2e3"), Some(2000.0));
    assert_eq!(coerce_number("+7"), Some(7.0));
}

#[test]
fn coerce_ignores_surrounding_whitespace() {
    assert_eq!(coerce_number("  42\t"), Some(42.0));
    assert_eq!(coerce_number(""), Some(0.0));
    assert_eq!(coerce_number("   "), Some(0.0));
}

#[test]
fn coerce_radix_prefixes() {
    assert_eq!(coerce_number("0x1F"), Some(31.0));
    assert_eq!(coerce_number("0o17"), Some(15.0));
    assert_eq!(coerce_number("0b101"), Some(5.0));
    assert_eq!(coerce_number("-0x10"), None);
    assert_eq!(coerce_number("0x"), None);
}

#[test]
fn coerce_rejects_garbage() {
    for text in ["abc", "12abc", "1 2", "inf", "nan", "1_000", "--1", "."] {
        assert_eq!(coerce_number(text), None, "{text:?}");
    }
}

#[test]
fn coerce_infinity() {
    assert_eq!(coerce_number("Infinity"), Some(f64::INFINITY));
    assert_eq!(coerce_number("-Infinity"), Some(f64::NEG_INFINITY));
    assert_eq!(coerce_number("infinity"), None);
}

#[test]
fn strict_decimal_rejects_whitespace_and_radix() {
    assert_eq!(parse_decimal("12"), Some(12.0));
    assert_eq!(parse_decimal(" 12"), None);
    assert_eq!(parse_decimal(""), None);
    assert_eq!(parse_decimal("0x10"), None);
}

// =============================================================================
// Prefix Integer Parsing
// =============================================================================

#[test]
fn prefix_parsing_truncates() {
    assert_eq!(parse_int_prefix("12.9"), Some(12.0));
    assert_eq!(parse_int_prefix("7px"), Some(7.0));
    assert_eq!(parse_int_prefix("  -42abc"), Some(-42.0));
    assert_eq!(parse_int_prefix("0x1fz"), Some(31.0));
}

#[test]
fn prefix_parsing_long_runs() {
    assert_eq!(parse_int_prefix("$99999999999999999999999"), None);
    assert_eq!(parse_int_prefix("99999999999999999999999.5"), Some(1e23));
    assert_eq!(render_number(parse_int_prefix("63236705911238380268").unwrap()), "63236705911238380000");
}

#[test]
fn next_line_is_not_whitespace() {
    assert_eq!(coerce_number("\u{85}5"), None);
    assert_eq!(parse_int_prefix("\u{85}5"), None);
    assert_eq!(coerce_number("\u{feff} 5 \u{2029}"), Some(5.0));
}

#[test]
fn prefix_parsing_needs_a_digit() {
    assert_eq!(parse_int_prefix(""), None);
    assert_eq!(parse_int_prefix("abc"), None);
    assert_eq!(parse_int_prefix("-"), None);
    assert_eq!(parse_int_prefix("$5"), None);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn render_plain_numbers() {
    assert_eq!(render_number(6.0), "6");
    assert_eq!(render_number(-5.0), "-5");
    assert_eq!(render_number(1.5), "1.5");
    assert_eq!(render_number(0.1 + 0.2), "0.30000000000000004");
}

#[test]
fn render_special_values() {
    assert_eq!(render_number(-0.0), "0");
    assert_eq!(render_number(f64::NAN), "NaN");
    assert_eq!(render_number(f64::INFINITY), "Infinity");
    assert_eq!(render_number(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn render_exponent_form_outside_plain_range() {
    assert_eq!(render_number(1e21), "1e+21");
    assert_eq!(render_number(1.5e-7), "1.5e-7");
    assert_eq!(render_number(1e20), "100000000000000000000");
}

proptest! {
    #[test]
    fn rendered_finite_numbers_coerce_back(n in float::POSITIVE | float::NEGATIVE | float::NORMAL | float::ZERO) {
        let rendered = render_number(n);
        prop_assert_eq!(coerce_number(&rendered), Some(n));
    }

    #[test]
    fn integers_render_without_fraction(n in -1_000_000i64..1_000_000) {
        #[allow(clippy::cast_precision_loss)]
        let rendered = render_number(n as f64);
        prop_assert_eq!(rendered, n.to_string());
    }
}
