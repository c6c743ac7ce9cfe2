//! Functions over sequences of numbers.

use seqkit_foundation::{Number, render_number};

/// Sums a slice, starting from zero.
fn sum(values: &[Number]) -> Number {
    values.iter().fold(0.0, |acc, v| acc + v)
}

/// Returns just the first and last number.
///
/// An empty input gives an empty output and a single number is repeated,
/// so the result always has length 0 or 2.
///
/// ```
/// use seqkit_stdlib::bookend;
///
/// assert_eq!(bookend(&[1.0, 2.0, 3.0]), vec![1.0, 3.0]);
/// assert_eq!(bookend(&[7.0]), vec![7.0, 7.0]);
/// assert!(bookend(&[]).is_empty());
/// ```
#[must_use]
pub fn bookend(numbers: &[Number]) -> Vec<Number> {
    match numbers {
        [] => Vec::new(),
        [only] => vec![*only, *only],
        [first, .., last] => vec![*first, *last],
    }
}

/// Multiplies every number by three.
#[must_use]
pub fn triple_all(numbers: &[Number]) -> Vec<Number> {
    numbers.iter().map(|n| n * 3.0).collect()
}

/// Renders the addition of `addends` as `"<sum>=<a0>+<a1>+..."`.
///
/// An empty input renders as `"0=0"`.
///
/// ```
/// use seqkit_stdlib::render_sum;
///
/// assert_eq!(render_sum(&[1.0, 2.0, 3.0]), "6=1+2+3");
/// assert_eq!(render_sum(&[]), "0=0");
/// ```
#[must_use]
pub fn render_sum(addends: &[Number]) -> String {
    if addends.is_empty() {
        return "0=0".to_string();
    }
    let terms: Vec<String> = addends.iter().map(|n| render_number(*n)).collect();
    format!("{}={}", render_number(sum(addends)), terms.join("+"))
}

/// Inserts a running sum right after the first negative number.
///
/// The inserted value is the sum of every number before the first negative
/// one (the negative itself is not included). Without a negative number the
/// sum of everything is appended instead, and an empty input gives `[0]`.
///
/// ```
/// use seqkit_stdlib::inject_sum_after_first_negative;
///
/// assert_eq!(
///     inject_sum_after_first_negative(&[1.0, 9.0, -5.0, 7.0]),
///     vec![1.0, 9.0, -5.0, 10.0, 7.0]
/// );
/// assert_eq!(
///     inject_sum_after_first_negative(&[1.0, 9.0, 7.0]),
///     vec![1.0, 9.0, 7.0, 17.0]
/// );
/// ```
#[must_use]
pub fn inject_sum_after_first_negative(values: &[Number]) -> Vec<Number> {
    if values.is_empty() {
        return vec![0.0];
    }

    let mut result = Vec::with_capacity(values.len() + 1);
    match values.iter().position(|v| *v < 0.0) {
        Some(i) => {
            result.extend_from_slice(&values[..=i]);
            result.push(sum(&values[..i]));
            result.extend_from_slice(&values[i + 1..]);
        }
        None => {
            result.extend_from_slice(values);
            result.push(sum(values));
        }
    }
    result
}
