use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn digit_classes() {
    assert!(is_binary_digit('0'));
    assert!(is_binary_digit('1'));
    assert!(!is_binary_digit('2'));

    assert!(is_octal_digit('7'));
    assert!(!is_octal_digit('8'));

    assert!(is_decimal_digit('9'));
    assert!(!is_decimal_digit('a'));

    assert!(is_hex_digit('f'));
    assert!(is_hex_digit('F'));
    assert!(!is_hex_digit('g'));
}

#[test]
fn non_ascii_digits_are_not_decimal() {
    // Arabic-Indic and fullwidth digits
    assert!(!is_decimal_digit('\u{0663}'));
    assert!(!is_decimal_digit('\u{FF11}'));
    assert_eq!(digit_value('\u{FF11}'), None);
}

#[test]
fn digit_values() {
    assert_eq!(digit_value('0'), Some(0));
    assert_eq!(digit_value('9'), Some(9));
    assert_eq!(digit_value('a'), Some(10));
    assert_eq!(digit_value('F'), Some(15));
    assert_eq!(digit_value('z'), Some(35));
    assert_eq!(digit_value('Z'), Some(35));
    assert_eq!(digit_value('_'), None);
    assert_eq!(digit_value(' '), None);
}

#[test]
fn word_characters() {
    assert!(is_word_start('a'));
    assert!(is_word_start('_'));
    assert!(is_word_start('é'));
    assert!(!is_word_start('1'));
    assert!(!is_word_start('$'));

    assert!(is_word_continue('1'));
    assert!(is_word_continue('_'));
    assert!(!is_word_continue('-'));
}

#[test]
fn horizontal_whitespace_excludes_newline() {
    assert!(is_horizontal_whitespace(' '));
    assert!(is_horizontal_whitespace('\t'));
    assert!(is_horizontal_whitespace('\r'));
    assert!(is_horizontal_whitespace('\u{000B}'));
    assert!(!is_horizontal_whitespace('\n'));
    assert!(!is_horizontal_whitespace('x'));
}

proptest! {
    #[test]
    fn digit_classes_nest(c in any::<char>()) {
        if is_binary_digit(c) {
            prop_assert!(is_octal_digit(c));
        }
        if is_octal_digit(c) {
            prop_assert!(is_decimal_digit(c));
        }
        if is_decimal_digit(c) {
            prop_assert!(is_hex_digit(c));
        }
    }

    #[test]
    fn predicates_agree_with_digit_value(c in any::<char>()) {
        let value = digit_value(c);
        prop_assert_eq!(is_binary_digit(c), value.is_some_and(|v| v < 2));
        prop_assert_eq!(is_octal_digit(c), value.is_some_and(|v| v < 8));
        prop_assert_eq!(is_decimal_digit(c), value.is_some_and(|v| v < 10));
        prop_assert_eq!(is_hex_digit(c), value.is_some_and(|v| v < 16));
    }

    #[test]
    fn digit_values_match_std(c in any::<char>()) {
        prop_assert_eq!(digit_value(c), c.to_digit(36));
    }

    #[test]
    fn word_start_implies_continue(c in any::<char>()) {
        if is_word_start(c) {
            prop_assert!(is_word_continue(c));
        }
    }
}
