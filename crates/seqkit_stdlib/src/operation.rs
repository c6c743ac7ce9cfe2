//! Dynamic dispatch over the collection utilities.
//!
//! [`Operation`] names each function and can call it with [`Value`]
//! arguments, which is how the runtime and tracer drive them.

use std::fmt;
use std::str::FromStr;

use seqkit_foundation::{Error, Number, Result, Type, Value};

use crate::numeric::{bookend, inject_sum_after_first_negative, render_sum, triple_all};
use crate::text::{
    allowed_colors, count_short, currency_amount, filter_and_shout, nonzero_number,
    parse_ints_or_zero, strip_currency_and_parse,
};

/// One of the collection utilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`bookend`]
    Bookend,
    /// [`triple_all`]
    TripleAll,
    /// [`parse_ints_or_zero`]
    ParseIntsOrZero,
    /// [`strip_currency_and_parse`]
    StripCurrencyAndParse,
    /// [`filter_and_shout`]
    FilterAndShout,
    /// [`count_short`]
    CountShort,
    /// [`allowed_colors`]
    AllowedColors,
    /// [`render_sum`]
    RenderSum,
    /// [`inject_sum_after_first_negative`]
    InjectSumAfterFirstNegative,
}

impl Operation {
    /// Every operation, in registry order.
    pub const ALL: [Operation; 9] = [
        Self::Bookend,
        Self::TripleAll,
        Self::ParseIntsOrZero,
        Self::StripCurrencyAndParse,
        Self::FilterAndShout,
        Self::CountShort,
        Self::AllowedColors,
        Self::RenderSum,
        Self::InjectSumAfterFirstNegative,
    ];

    /// Returns the command name of this operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bookend => "bookend",
            Self::TripleAll => "triple-all",
            Self::ParseIntsOrZero => "parse-ints-or-zero",
            Self::StripCurrencyAndParse => "strip-currency-and-parse",
            Self::FilterAndShout => "filter-and-shout",
            Self::CountShort => "count-short",
            Self::AllowedColors => "allowed-colors",
            Self::RenderSum => "render-sum",
            Self::InjectSumAfterFirstNegative => "inject-sum-after-first-negative",
        }
    }

    /// Returns a one-line description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Bookend => "first and last number (a single number twice)",
            Self::TripleAll => "every number multiplied by three",
            Self::ParseIntsOrZero => "numeric value of each string, 0 if none",
            Self::StripCurrencyAndParse => "strip a leading $, then parse the leading integer",
            Self::FilterAndShout => "drop strings ending in ?, upper-case those ending in !",
            Self::CountShort => "count of strings shorter than 4 UTF-16 units",
            Self::AllowedColors => "true if every string is red, blue, or green",
            Self::RenderSum => "the addition written out as \"sum=a+b+...\"",
            Self::InjectSumAfterFirstNegative => {
                "insert the sum before the first negative right after it"
            }
        }
    }

    /// Returns the element type this operation takes.
    #[must_use]
    pub fn input_type(self) -> Type {
        match self {
            Self::Bookend
            | Self::TripleAll
            | Self::RenderSum
            | Self::InjectSumAfterFirstNegative => Type::Number,
            Self::ParseIntsOrZero
            | Self::StripCurrencyAndParse
            | Self::FilterAndShout
            | Self::CountShort
            | Self::AllowedColors => Type::String,
        }
    }

    /// Calls the operation on dynamic arguments.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error if an argument is not of the operation's
    /// [input type](Self::input_type).
    pub fn call(self, args: &[Value]) -> Result<Value> {
        let result = match self {
            Self::Bookend => Value::numbers(bookend(&numbers_of(args)?)),
            Self::TripleAll => Value::numbers(triple_all(&numbers_of(args)?)),
            Self::RenderSum => Value::from(render_sum(&numbers_of(args)?)),
            Self::InjectSumAfterFirstNegative => {
                Value::numbers(inject_sum_after_first_negative(&numbers_of(args)?))
            }
            Self::ParseIntsOrZero => Value::numbers(parse_ints_or_zero(&texts_of(args)?)),
            Self::StripCurrencyAndParse => {
                Value::numbers(strip_currency_and_parse(&texts_of(args)?))
            }
            Self::FilterAndShout => Value::strings(filter_and_shout(&texts_of(args)?)),
            Self::CountShort => Value::Int(count_short(&texts_of(args)?)),
            Self::AllowedColors => Value::Bool(allowed_colors(&texts_of(args)?)),
        };
        Ok(result)
    }

    /// Returns the argument indices that degrade to the sentinel `0`.
    ///
    /// Only the two parsing operations ever default; every other operation
    /// returns an empty list.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error under the same conditions as
    /// [`call`](Self::call).
    pub fn sentinel_positions(self, args: &[Value]) -> Result<Vec<usize>> {
        let parse: fn(&str) -> Option<Number> = match self {
            Self::ParseIntsOrZero => nonzero_number,
            Self::StripCurrencyAndParse => currency_amount,
            _ => return Ok(Vec::new()),
        };
        let texts = texts_of(args)?;
        Ok(texts
            .iter()
            .enumerate()
            .filter(|(_, t)| parse(t).is_none())
            .map(|(i, _)| i)
            .collect())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| Error::unknown_operation(s))
    }
}

/// Extracts numbers, rejecting any other element type.
fn numbers_of(args: &[Value]) -> Result<Vec<Number>> {
    args.iter()
        .map(|v| {
            v.as_number()
                .ok_or_else(|| Error::type_mismatch(Type::Number, v.value_type()))
        })
        .collect()
}

/// Extracts strings, rejecting any other element type.
fn texts_of(args: &[Value]) -> Result<Vec<&str>> {
    args.iter()
        .map(|v| {
            v.as_str()
                .ok_or_else(|| Error::type_mismatch(Type::String, v.value_type()))
        })
        .collect()
}
