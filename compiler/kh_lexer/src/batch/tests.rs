use super::*;
use crate::LexErrorKind;
use kh_ir::TokenKind;
use pretty_assertions::assert_eq;

#[test]
fn results_keep_input_order() {
    let units: Vec<(String, String)> = (0..32)
        .map(|i| (format!("unit{i}.kh"), format!("{i}")))
        .collect();
    let results = lex_units(&units, LexConfig::default());
    assert_eq!(results.len(), units.len());
    for (i, result) in results.into_iter().enumerate() {
        let Ok(tokens) = result else {
            panic!("unit {i} failed");
        };
        let expected = i64::try_from(i).unwrap_or(i64::MAX);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Integer(expected));
    }
}

#[test]
fn failures_stay_with_their_unit() {
    let units = [("good.kh", "x = 1"), ("bad.kh", "\"open"), ("also_good.kh", "y")];
    let results = lex_units(&units, LexConfig::new().silent(true));

    assert!(results[0].is_ok());
    assert!(results[2].is_ok());
    let Err(error) = &results[1] else {
        panic!("bad.kh should fail");
    };
    assert_eq!(error.kind(), LexErrorKind::UnterminatedStringLiteral);
    assert_eq!(error.file(), "bad.kh");
}

#[test]
fn empty_batch() {
    let units: [(&str, &str); 0] = [];
    assert!(lex_units(&units, LexConfig::default()).is_empty());
}
