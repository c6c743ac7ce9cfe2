//! Collection utilities for seqkit.
//!
//! Nine independent pure functions over ordered sequences, organized by
//! element type:
//! - Numeric functions ([`bookend`], [`triple_all`], [`render_sum`],
//!   [`inject_sum_after_first_negative`])
//! - Text functions ([`parse_ints_or_zero`], [`strip_currency_and_parse`],
//!   [`filter_and_shout`], [`count_short`], [`allowed_colors`])
//!
//! Every function borrows its input and returns a freshly allocated result.
//! None of them can fail: numeric text that does not parse becomes `0`.
//!
//! [`Operation`] names each function so it can be invoked dynamically with
//! [`Value`](seqkit_foundation::Value) arguments.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod numeric;
pub mod operation;
pub mod text;

pub use numeric::{bookend, inject_sum_after_first_negative, render_sum, triple_all};
pub use operation::Operation;
pub use text::{
    allowed_colors, count_short, filter_and_shout, parse_ints_or_zero, strip_currency_and_parse,
};
