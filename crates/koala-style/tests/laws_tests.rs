//! Property-based checks of the laws the grammar combinators, properties,
//! specificity and An+B matching must obey for every input.

#![allow(clippy::needless_pass_by_value)]

use koala_style::grammar::converters;
use koala_style::grammar::{convert, either, list_of, one_of};
use koala_style::property::longhands::{BoxShadow, TransitionDelay};
use koala_style::selector::Nth;
use koala_style::{CssValue, Grammar, GrammarExt, Property, Specificity, Time};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn delays(milliseconds: &[u16]) -> CssValue {
    CssValue::comma_list(
        milliseconds
            .iter()
            .map(|&ms| CssValue::dimension(f64::from(ms), "ms"))
            .collect(),
    )
}

#[quickcheck]
fn list_of_preserves_length_and_order(milliseconds: Vec<u16>) -> TestResult {
    if milliseconds.is_empty() {
        return TestResult::discard();
    }
    let grammar = list_of(convert(converters::time));
    let Ok(times) = grammar.try_convert(&delays(&milliseconds)) else {
        return TestResult::failed();
    };
    let expected: Vec<Time> = milliseconds
        .iter()
        .map(|&ms| Time::from_milliseconds(f32::from(ms)))
        .collect();
    TestResult::from_bool(times == expected)
}

#[quickcheck]
fn list_of_fails_if_any_item_fails(milliseconds: Vec<u16>, bad_index: usize) -> TestResult {
    if milliseconds.is_empty() {
        return TestResult::discard();
    }
    let bad_index = bad_index % milliseconds.len();
    let mut items: Vec<CssValue> = milliseconds
        .iter()
        .map(|&ms| CssValue::dimension(f64::from(ms), "ms"))
        .collect();
    items[bad_index] = CssValue::ident("later");

    let grammar = list_of(convert(converters::time));
    TestResult::from_bool(grammar.try_convert(&CssValue::comma_list(items)).is_err())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Branch {
    First,
    Second,
}

#[quickcheck]
fn either_prefers_the_first_match(number: i32) -> bool {
    let grammar = either(
        convert(converters::number).map(|_| Branch::First),
        convert(converters::number).map(|_| Branch::Second),
    );
    grammar.try_convert(&CssValue::number(f64::from(number))) == Ok(Branch::First)
}

#[quickcheck]
fn either_falls_back_to_the_second(number: u16) -> bool {
    let grammar = one_of([("auto", Branch::First)])
        .or(convert(converters::non_negative_number).map(|_| Branch::Second));
    grammar.try_convert(&CssValue::number(f64::from(number))) == Ok(Branch::Second)
}

#[quickcheck]
fn reset_is_idempotent(milliseconds: Vec<u16>) -> bool {
    let mut delay = Property::<TransitionDelay>::new();
    if !milliseconds.is_empty() {
        let _ = delay.is_valid(&delays(&milliseconds));
    }
    delay.reset();
    let once = delay.values().to_vec();
    delay.reset();
    once == delay.values() && once == [Time::ZERO]
}

#[quickcheck]
fn failed_validation_changes_nothing(x: i16, y: i16) -> bool {
    let mut shadow = Property::<BoxShadow>::new();
    let valid = CssValue::whitespace_list(vec![
        CssValue::dimension(f64::from(x), "px"),
        CssValue::dimension(f64::from(y), "px"),
    ]);
    if !shadow.is_valid(&valid) {
        return false;
    }
    let before = shadow.values().to_vec();
    let invalid = CssValue::comma_list(vec![valid, CssValue::ident("nonsense")]);
    !shadow.is_valid(&invalid) && shadow.values() == before.as_slice()
}

#[quickcheck]
fn specificity_orders_like_a_tuple(left: (u8, u8, u8), right: (u8, u8, u8)) -> bool {
    let specificity = |(a, b, c): (u8, u8, u8)| {
        Specificity::new(u32::from(a), u32::from(b), u32::from(c))
    };
    specificity(left).cmp(&specificity(right)) == left.cmp(&right)
}

#[quickcheck]
fn specificity_addition_is_componentwise(left: (u8, u8, u8), right: (u8, u8, u8)) -> bool {
    let sum = Specificity::new(u32::from(left.0), u32::from(left.1), u32::from(left.2))
        + Specificity::new(u32::from(right.0), u32::from(right.1), u32::from(right.2));
    sum == Specificity::new(
        u32::from(left.0) + u32::from(right.0),
        u32::from(left.1) + u32::from(right.1),
        u32::from(left.2) + u32::from(right.2),
    )
}

#[quickcheck]
fn nth_parses_its_own_notation(a: i8, b: i8) -> bool {
    let text = format!("{a}n{b:+}");
    Nth::parse(&text)
        == Some(Nth {
            a: i32::from(a),
            b: i32::from(b),
        })
}

#[quickcheck]
fn nth_matches_exactly_the_an_plus_b_positions(a: i8, b: i8, position: u8) -> TestResult {
    if position == 0 {
        return TestResult::discard();
    }
    let nth = Nth {
        a: i32::from(a),
        b: i32::from(b),
    };
    let (a, b, target) = (i64::from(a), i64::from(b), i64::from(position));
    let expected = (0..=512).any(|n| a * n + b == target);
    TestResult::from_bool(nth.matches(usize::from(position)) == expected)
}
