//! Numeric text handling.
//!
//! Three conversions live here:
//! - [`coerce_number`]: whole-string coercion, where the entire text must be
//!   a numeric literal (surrounding whitespace ignored)
//! - [`parse_int_prefix`]: prefix integer parsing, which reads digits until
//!   the first character that is not one
//! - [`render_number`]: standard decimal rendering

/// The numeric element type of every sequence.
///
/// Sequences may hold negative numbers and fractions, so this is a float.
pub type Number = f64;

/// Magnitudes in this range render as plain decimals; the rest use an exponent.
const PLAIN_DECIMAL_RANGE: std::ops::Range<f64> = 1e-6..1e21;

/// Magnitude bits kept exactly when converting a long power-of-two radix run.
const RADIX_HEAD_BITS: u32 = 124;

/// Returns true for characters skipped around numeric text.
///
/// This is the Unicode space separators plus tab, vertical tab, form feed,
/// the byte order mark and the four line terminators. Unlike
/// [`char::is_whitespace`], NEL (U+0085) is not included.
fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Checks `digits[.digits][(e|E)[sign]digits]` with at least one mantissa digit.
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let int_digits = count_digits(bytes);
    let mut i = int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&bytes[i..]);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }

    i == bytes.len()
}

/// Converts a digit run in radix 2, 8, 10 or 16 to the nearest number.
///
/// The exact integer is rounded once, so long runs past 2^53 still land on
/// the closest float. Fails on an empty or invalid digit string.
fn digits_value(digits: &str, radix: u32) -> Option<Number> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    if radix == 10 {
        return digits.parse().ok();
    }

    // Power-of-two radix: keep the leading bits exactly and fold the rest
    // into a sticky bit, which is far below the rounding position.
    let bits_per_digit = radix.trailing_zeros();
    let digits = digits.trim_start_matches('0');
    let head_len = digits.len().min((RADIX_HEAD_BITS / bits_per_digit) as usize);
    let (head, tail) = digits.split_at(head_len);
    if head.is_empty() {
        return Some(0.0);
    }

    let mut mantissa = u128::from_str_radix(head, radix).ok()?;
    if tail.bytes().any(|b| b != b'0') {
        mantissa |= 1;
    }
    let scale = tail
        .len()
        .checked_mul(bits_per_digit as usize)
        .and_then(|n| i32::try_from(n).ok())
        .unwrap_or(i32::MAX);

    #[allow(clippy::cast_precision_loss)]
    let value = mantissa as f64 * 2f64.powi(scale);
    Some(value)
}

/// Splits an unsigned `0x`/`0o`/`0b` prefix off `text`.
fn radix_prefix(text: &str) -> Option<(u32, &str)> {
    let prefix = text.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &text[2..]))
}

/// Parses a signed decimal literal, or a signed `Infinity`.
///
/// No whitespace is allowed and the empty string is rejected.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<Number> {
    let negative = text.starts_with('-');
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    if unsigned == "Infinity" {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    if !is_decimal_literal(unsigned) {
        return None;
    }
    text.parse().ok()
}

/// Coerces an entire string to a number.
///
/// Surrounding whitespace is ignored and a blank string coerces to 0.
/// Accepts decimal literals (`"5"`, `"-3.25"`, `"1."`, `".5"`, `"2e3"`),
/// signed `Infinity`, and unsigned `0x`/`0o`/`0b` integers. Returns `None`
/// for anything else.
///
/// ```
/// use seqkit_foundation::coerce_number;
///
/// assert_eq!(coerce_number(" 42 "), Some(42.0));
/// assert_eq!(coerce_number("0x1f"), Some(31.0));
/// assert_eq!(coerce_number(""), Some(0.0));
/// assert_eq!(coerce_number("12abc"), None);
/// ```
#[must_use]
pub fn coerce_number(text: &str) -> Option<Number> {
    let trimmed = text.trim_matches(is_space);
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if let Some((radix, digits)) = radix_prefix(trimmed) {
        return digits_value(digits, radix);
    }
    parse_decimal(trimmed)
}

/// Parses a leading integer from `text`.
///
/// Leading whitespace and a single sign are skipped, a `0x`/`0X` prefix
/// selects hexadecimal, and digits are read until the first non-digit.
/// The fractional part of `"12.9"` is truncated, not rounded. Returns `None`
/// when no digit was read.
///
/// ```
/// use seqkit_foundation::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("12.9"), Some(12.0));
/// assert_eq!(parse_int_prefix("  -7px"), Some(-7.0));
/// assert_eq!(parse_int_prefix("$5"), None);
/// ```
#[must_use]
pub fn parse_int_prefix(text: &str) -> Option<Number> {
    let text = text.trim_start_matches(is_space);
    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, text) = match text.get(..2) {
        Some("0x" | "0X") => (16, &text[2..]),
        _ => (10, text),
    };

    let end = text
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(text.len());
    let value = digits_value(&text[..end], radix)?;

    Some(if negative { -value } else { value })
}

/// Renders a number in standard decimal form.
///
/// Integers have no fractional part (`6`, `-4`), fractions use the shortest
/// digits that read back to the same value (`0.30000000000000004`), and both
/// zeros render as `0`. Magnitudes below `1e-6` or from `1e21` up use an
/// exponent with an explicit sign (`1e+21`, `1.5e-7`).
#[must_use]
pub fn render_number(n: Number) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if PLAIN_DECIMAL_RANGE.contains(&n.abs()) {
        return format!("{n}");
    }

    let exponential = format!("{n:e}");
    match exponential.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => exponential,
    }
}
