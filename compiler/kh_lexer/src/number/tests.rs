#![allow(clippy::float_cmp)]

use crate::{lex, lex_with_config, LexConfig, LexErrorKind};
use kh_ir::{Delimiter, TokenKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    match lex("num.kh", source) {
        Ok(tokens) => tokens.into_iter().map(|token| token.kind).collect(),
        Err(error) => panic!("{source:?} failed to lex: {error}"),
    }
}

fn single(source: &str) -> TokenKind {
    let mut kinds = kinds(source);
    assert_eq!(kinds.len(), 1, "{source:?} gave {kinds:?}");
    kinds.remove(0)
}

fn double(source: &str) -> f64 {
    match single(source) {
        TokenKind::Double(value) => value,
        other => panic!("{source:?} gave {other:?}"),
    }
}

/// Asserts `source` is an invalid numeric literal and returns the slice.
fn invalid(source: &str) -> String {
    match lex_with_config("num.kh", source, LexConfig::new().silent(true)) {
        Ok(tokens) => panic!("{source:?} lexed to {tokens:?}"),
        Err(error) => {
            assert_eq!(error.kind(), LexErrorKind::InvalidNumericLiteral, "{source:?}");
            error.slice().to_string()
        }
    }
}

// === Integers ===

#[test]
fn decimal_integers() {
    assert_eq!(single("0"), TokenKind::Integer(0));
    assert_eq!(single("123"), TokenKind::Integer(123));
    assert_eq!(single("007"), TokenKind::Integer(7));
}

#[test]
fn radix_prefixes() {
    assert_eq!(single("0x1F"), TokenKind::Integer(31));
    assert_eq!(single("0Xff"), TokenKind::Integer(255));
    assert_eq!(single("0b101"), TokenKind::Integer(5));
    assert_eq!(single("0B11"), TokenKind::Integer(3));
    assert_eq!(single("0o17"), TokenKind::Integer(15));
    assert_eq!(single("0O7"), TokenKind::Integer(7));
}

#[test]
fn hex_digits_shadow_exponent_and_suffix_letters() {
    assert_eq!(single("0x1e5"), TokenKind::Integer(0x1e5));
    assert_eq!(single("0xf"), TokenKind::Integer(15));
}

#[test]
fn unsigned_suffix() {
    assert_eq!(single("10u"), TokenKind::UInteger(10));
    assert_eq!(single("0xFFU"), TokenKind::UInteger(255));
}

#[test]
fn large_values_become_unsigned() {
    assert_eq!(single("9223372036854775807"), TokenKind::Integer(i64::MAX));
    assert_eq!(
        single("9223372036854775808"),
        TokenKind::UInteger(9_223_372_036_854_775_808)
    );
    assert_eq!(
        single("0xFFFFFFFFFFFFFFFF"),
        TokenKind::UInteger(u64::MAX)
    );
}

#[test]
fn overflow_is_invalid() {
    assert_eq!(invalid("18446744073709551616"), "18446744073709551616");
    assert_eq!(invalid("0x10000000000000000u"), "0x10000000000000000u");
}

#[test]
fn sign_is_an_operator() {
    assert_eq!(
        kinds("-1"),
        vec![TokenKind::Operator(kh_ir::Operator::Sub), TokenKind::Integer(1)]
    );
}

// === Floating ===

#[test]
#[allow(clippy::approx_constant)]
fn decimal_fraction() {
    assert_eq!(double("3.14"), 3.14);
    assert_eq!(double("0.1"), 0.1);
    assert_eq!(double("1."), 1.0);
}

#[test]
fn decimal_exponent() {
    assert_eq!(double("1e3"), 1000.0);
    assert_eq!(double("2.5E-2"), 0.025);
    assert_eq!(double("1e+2"), 100.0);
}

#[test]
fn power_of_two_exponent() {
    assert_eq!(double("2p3"), 16.0);
    assert_eq!(double("1P-1"), 0.5);
    assert_eq!(double("0x1.8p1"), 3.0);
    assert_eq!(double("0b1.1"), 1.5);
    assert_eq!(double("0o7.4"), 7.5);
}

#[test]
fn float_suffixes() {
    assert_eq!(single("1f"), TokenKind::Float(1.0));
    assert_eq!(single("1.5F"), TokenKind::Float(1.5));
    assert_eq!(single("2j"), TokenKind::IFloat(2.0));
    assert_eq!(single("3i"), TokenKind::IDouble(3.0));
    assert_eq!(single("0x2p2I"), TokenKind::IDouble(8.0));
}

#[test]
fn overflowed_digits_still_make_a_float() {
    assert_eq!(double("18446744073709551616.0"), 18_446_744_073_709_551_616.0);
}

#[test]
fn huge_exponents_saturate() {
    assert_eq!(double("1e400"), f64::INFINITY);
    assert_eq!(double("1e-400"), 0.0);
    assert_eq!(double("1p99999999999"), f64::INFINITY);
    assert_eq!(double("1p-99999999999"), 0.0);
    assert_eq!(double("0p99999999999"), 0.0);
}

#[test]
fn tiny_power_of_two_exponents_stay_exact() {
    // 2^-1021 is the normal 4.45e-308; 2^-1030 and 2^-1074 are subnormal.
    assert_eq!(double("0x10p-1025"), f64::from_bits(2 << 52));
    assert_eq!(double("1p-1030"), f64::from_bits(1 << 44));
    assert_eq!(double("0x1p-1074"), f64::from_bits(1));
    assert_eq!(double("0x3p-1074"), f64::from_bits(3));
    assert_eq!(double("0x1p-1075"), 0.0);
}

#[test]
fn large_power_of_two_exponents_stay_exact() {
    assert_eq!(double("1p1023"), f64::from_bits(2046 << 52));
    assert_eq!(double("0x0.8p1024"), f64::from_bits(2046 << 52));
    assert_eq!(double("1p1024"), f64::INFINITY);
}

// === Dots after numbers ===

#[test]
fn ellipsis_is_not_a_fraction() {
    assert_eq!(
        kinds("1..."),
        vec![TokenKind::Integer(1), TokenKind::Delimiter(Delimiter::Ellipsis)]
    );
}

#[test]
fn member_access_is_not_a_fraction() {
    assert_eq!(
        kinds("1.abs"),
        vec![
            TokenKind::Integer(1),
            TokenKind::Delimiter(Delimiter::Dot),
            TokenKind::Identifier("abs".to_string()),
        ]
    );
    assert_eq!(
        kinds("1.e5"),
        vec![
            TokenKind::Integer(1),
            TokenKind::Delimiter(Delimiter::Dot),
            TokenKind::Identifier("e5".to_string()),
        ]
    );
}

#[test]
fn fraction_then_member() {
    assert_eq!(
        kinds("1.5.abs"),
        vec![
            TokenKind::Double(1.5),
            TokenKind::Delimiter(Delimiter::Dot),
            TokenKind::Identifier("abs".to_string()),
        ]
    );
}

// === Invalid ===

#[test]
fn prefix_without_digits() {
    assert_eq!(invalid("0x"), "0x");
    assert_eq!(invalid("0xg"), "0xg");
    assert_eq!(invalid("0b"), "0b");
    assert_eq!(invalid("0o.4"), "0o");
}

#[test]
fn digit_outside_radix() {
    assert_eq!(invalid("0b102"), "0b102");
    assert_eq!(invalid("0o8"), "0o8");
}

#[test]
fn glued_word_characters() {
    assert_eq!(invalid("12abc"), "12abc");
    assert_eq!(invalid("1_000"), "1_000");
    assert_eq!(invalid("5u8"), "5u8");
    assert_eq!(invalid("1.5fx"), "1.5fx");
}

#[test]
fn empty_exponent() {
    assert_eq!(invalid("1e"), "1e");
    assert_eq!(invalid("1e+"), "1e+");
    assert_eq!(invalid("0x1p"), "0x1p");
}

#[test]
fn invalid_number_position() {
    let Err(error) = lex_with_config("num.kh", "x = 0x", LexConfig::new().silent(true)) else {
        panic!("should fail");
    };
    assert_eq!((error.line(), error.column()), (1, 5));
    assert_eq!(error.span(), kh_ir::Span::new(4, 6));
}

proptest! {
    #[test]
    fn any_unsigned_round_trips(value: u64) {
        let expected = i64::try_from(value).map_or(TokenKind::UInteger(value), TokenKind::Integer);
        prop_assert_eq!(single(&value.to_string()), expected.clone());
        prop_assert_eq!(single(&format!("{value:#x}")), expected.clone());
        prop_assert_eq!(single(&format!("{value:#o}")), expected.clone());
        prop_assert_eq!(single(&format!("{value:#b}")), expected);
    }

    #[test]
    fn any_double_round_trips(value in 0.0f64..1e300) {
        prop_assert_eq!(double(&format!("{value:?}")), value);
    }

    #[test]
    fn any_unsigned_suffix(value: u64) {
        prop_assert_eq!(single(&format!("{value}u")), TokenKind::UInteger(value));
    }
}
