//! Property tests for the collection utilities

use proptest::prelude::*;
use seqkit_stdlib::{
    allowed_colors, bookend, count_short, filter_and_shout, inject_sum_after_first_negative,
    parse_ints_or_zero, render_sum, strip_currency_and_parse, triple_all,
};

fn small_number() -> impl Strategy<Value = f64> {
    (-1000i32..1000).prop_map(f64::from)
}

fn numbers() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(small_number(), 0..16)
}

fn texts() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ -~]{0,8}", 0..16)
}

proptest! {
    #[test]
    fn bookend_length_is_zero_or_two(s in numbers()) {
        let out = bookend(&s);
        prop_assert!(out.is_empty() || out.len() == 2);
        if let (Some(first), Some(last)) = (s.first(), s.last()) {
            prop_assert_eq!(out, vec![*first, *last]);
        }
    }

    #[test]
    fn triple_all_is_elementwise(s in numbers()) {
        let out = triple_all(&s);
        prop_assert_eq!(out.len(), s.len());
        for (x, y) in s.iter().zip(&out) {
            prop_assert_eq!(*y, x * 3.0);
        }
    }

    #[test]
    fn text_parsers_preserve_length(s in texts()) {
        prop_assert_eq!(parse_ints_or_zero(&s).len(), s.len());
        prop_assert_eq!(strip_currency_and_parse(&s).len(), s.len());
    }

    #[test]
    fn parse_ints_round_trips_integers(n in -100_000i64..100_000) {
        #[allow(clippy::cast_precision_loss)]
        let expected = n as f64;
        prop_assert_eq!(parse_ints_or_zero(&[n.to_string()]), vec![expected]);
        prop_assert_eq!(strip_currency_and_parse(&[format!("${n}")]), vec![expected]);
    }

    #[test]
    fn filter_and_shout_never_keeps_questions(s in texts()) {
        let out = filter_and_shout(&s);
        prop_assert!(out.len() <= s.len());
        prop_assert!(out.iter().all(|m| !m.ends_with('?')));
        let kept = s.iter().filter(|m| !m.ends_with('?')).count();
        prop_assert_eq!(out.len(), kept);
    }

    #[test]
    fn count_short_is_bounded(s in texts()) {
        prop_assert!(count_short(&s) <= s.len());
    }

    #[test]
    fn allowed_colors_only_accepts_the_palette(s in prop::collection::vec(
        prop::sample::select(vec!["red", "blue", "green"]), 0..8)) {
        prop_assert!(allowed_colors(&s));
        let mut with_other = s.clone();
        with_other.push("purple");
        prop_assert!(!allowed_colors(&with_other));
    }

    #[test]
    fn render_sum_lists_every_addend(s in prop::collection::vec(small_number(), 1..16)) {
        let rendered = render_sum(&s);
        let (total, terms) = rendered.split_once('=').unwrap();
        prop_assert_eq!(total.parse::<f64>().unwrap(), s.iter().sum::<f64>());
        prop_assert_eq!(terms.split('+').count(), s.len());
    }

    #[test]
    fn inject_sum_adds_one_element(s in numbers()) {
        let out = inject_sum_after_first_negative(&s);
        prop_assert_eq!(out.len(), s.len() + 1);
        match s.iter().position(|x| *x < 0.0) {
            Some(i) => {
                prop_assert_eq!(&out[..=i], &s[..=i]);
                prop_assert_eq!(out[i + 1], s[..i].iter().sum::<f64>());
                prop_assert_eq!(&out[i + 2..], &s[i + 1..]);
            }
            None => {
                prop_assert_eq!(&out[..s.len()], &s[..]);
                prop_assert_eq!(out[s.len()], s.iter().sum::<f64>());
            }
        }
    }
}
