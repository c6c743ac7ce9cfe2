//! Functions over sequences of text.

use seqkit_foundation::{Number, coerce_number, parse_int_prefix};

/// Currency marker removed by [`strip_currency_and_parse`].
const CURRENCY_MARKER: char = '$';

/// Words strictly shorter than this are counted by [`count_short`].
const SHORT_WORD_LEN: usize = 4;

/// The only colors [`allowed_colors`] accepts.
const ALLOWED_COLORS: [&str; 3] = ["red", "blue", "green"];

/// Coerces one string, degrading to the sentinel `0`.
///
/// A string that coerces to zero is reported as a miss too, so `"0"` and
/// `"abc"` both give `None`.
pub(crate) fn nonzero_number(text: &str) -> Option<Number> {
    coerce_number(text).filter(|n| *n != 0.0)
}

/// Removes a leading `$`, unless it is the whole string.
pub(crate) fn strip_currency(text: &str) -> &str {
    match text.strip_prefix(CURRENCY_MARKER) {
        Some(rest) if !rest.is_empty() => rest,
        _ => text,
    }
}

/// Parses a currency amount, degrading to `None` when nothing parses.
pub(crate) fn currency_amount(text: &str) -> Option<Number> {
    parse_int_prefix(strip_currency(text))
}

/// Converts each string to its numeric value, or `0` if it has none.
///
/// The whole string must be numeric (surrounding whitespace aside). Because
/// failures map to `0`, a string holding zero looks exactly like a failure.
///
/// ```
/// use seqkit_stdlib::parse_ints_or_zero;
///
/// assert_eq!(parse_ints_or_zero(&["5", "abc", "0", "-3"]), vec![5.0, 0.0, 0.0, -3.0]);
/// ```
#[must_use]
pub fn parse_ints_or_zero<S: AsRef<str>>(texts: &[S]) -> Vec<Number> {
    texts
        .iter()
        .map(|t| nonzero_number(t.as_ref()).unwrap_or(0.0))
        .collect()
}

/// Strips one leading `$` from each string and parses the leading integer.
///
/// A lone `"$"` is left as is (and so parses to `0`). Parsing reads digits
/// until the first non-digit, truncating `"12.9"` to `12`; when no digit can
/// be read the result is `0`.
///
/// ```
/// use seqkit_stdlib::strip_currency_and_parse;
///
/// assert_eq!(
///     strip_currency_and_parse(&["$5", "10", "$", "$abc"]),
///     vec![5.0, 10.0, 0.0, 0.0]
/// );
/// ```
#[must_use]
pub fn strip_currency_and_parse<S: AsRef<str>>(texts: &[S]) -> Vec<Number> {
    texts
        .iter()
        .map(|t| currency_amount(t.as_ref()).unwrap_or(0.0))
        .collect()
}

/// Drops questions and upper-cases exclamations.
///
/// Strings ending in `?` are removed; of the rest, strings ending in `!` are
/// converted to upper case. Empty strings end in neither and are kept.
///
/// ```
/// use seqkit_stdlib::filter_and_shout;
///
/// assert_eq!(filter_and_shout(&["hi?", "go!", "ok"]), vec!["GO!", "ok"]);
/// ```
#[must_use]
pub fn filter_and_shout<S: AsRef<str>>(messages: &[S]) -> Vec<String> {
    messages
        .iter()
        .map(|m| m.as_ref())
        .filter(|m| !m.ends_with('?'))
        .map(|m| {
            if m.ends_with('!') {
                m.to_uppercase()
            } else {
                m.to_string()
            }
        })
        .collect()
}

/// Counts the words shorter than four UTF-16 code units.
///
/// A character outside the Basic Multilingual Plane counts as two units, so
/// `"😀😀"` is not short.
#[must_use]
pub fn count_short<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .map(|w| w.as_ref())
        .filter(|w| w.encode_utf16().count() < SHORT_WORD_LEN)
        .count()
}

/// Returns true if every color is exactly `red`, `blue`, or `green`.
///
/// Matching is case-sensitive. An empty list is trivially allowed.
#[must_use]
pub fn allowed_colors<S: AsRef<str>>(colors: &[S]) -> bool {
    colors
        .iter()
        .all(|c| ALLOWED_COLORS.contains(&c.as_ref()))
}
