use crate::classify::is_word_continue;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// === Basic Navigation ===

#[test]
fn current_returns_first_char() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.cursor().current(), 'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.current(), 'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn advance_stops_at_eof() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    cursor.advance_n(10);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), '\0');
}

#[test]
fn multibyte_chars_are_one_step() {
    let buf = SourceBuffer::new("→x");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 'x');
    assert_eq!(cursor.pos(), 1);
}

// === Peek ===

#[test]
fn peek_and_peek2() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), 'b');
    assert_eq!(cursor.peek2(), 'c');
}

#[test]
fn peek_near_end_returns_sentinel() {
    let buf = SourceBuffer::new("a");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), '\0');
    assert_eq!(cursor.peek2(), '\0');
}

// === Line and Column ===

#[test]
fn line_and_column_track_newlines() {
    let buf = SourceBuffer::new("ab\ncd\n\nx");
    let mut cursor = buf.cursor();
    assert_eq!((cursor.line(), cursor.column()), (1, 1));

    cursor.advance_n(2);
    assert_eq!((cursor.line(), cursor.column()), (1, 3));

    cursor.advance();
    assert_eq!((cursor.line(), cursor.column()), (2, 1));

    cursor.advance_n(3);
    assert_eq!((cursor.line(), cursor.column()), (3, 1));

    cursor.advance();
    assert_eq!(cursor.current(), 'x');
    assert_eq!((cursor.line(), cursor.column()), (4, 1));
}

#[test]
fn snapshot_restores_position_and_line() {
    let buf = SourceBuffer::new("a\nb");
    let mut cursor = buf.cursor();
    let saved = cursor;
    cursor.advance_n(2);
    assert_eq!(cursor.line(), 2);
    cursor = saved;
    assert_eq!((cursor.pos(), cursor.line(), cursor.column()), (0, 1, 1));
}

// === Scanning ===

#[test]
fn eat_matches_only_current() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    assert!(!cursor.eat('b'));
    assert!(cursor.eat('a'));
    assert!(cursor.eat('b'));
    assert!(!cursor.eat('\0'));
}

#[test]
fn eat_while_stops_at_predicate() {
    let buf = SourceBuffer::new("foo_1 bar");
    let mut cursor = buf.cursor();
    cursor.eat_while(is_word_continue);
    assert_eq!(cursor.slice_from(0).iter().collect::<String>(), "foo_1");
}

#[test]
fn eat_while_stops_at_eof_for_any_predicate() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.eat_while(|_| true);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_whitespace_keeps_newline() {
    let buf = SourceBuffer::new(" \t\r\nx");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), '\n');
}

#[test]
fn eat_until_newline() {
    let buf = SourceBuffer::new("# note\nnext");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), '\n');
    assert_eq!(cursor.pos(), 6);

    let buf = SourceBuffer::new("# last");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn looking_at_prefixes() {
    let buf = SourceBuffer::new("\"\"\"text");
    let mut cursor = buf.cursor();
    assert!(cursor.looking_at("\"\"\""));
    assert!(cursor.looking_at(""));
    cursor.advance();
    assert!(!cursor.looking_at("\"\"\""));

    let buf = SourceBuffer::new("*");
    assert!(!buf.cursor().looking_at("*/"));
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("\0");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), '\0');
    assert!(!cursor.is_eof());
    cursor.advance();
    assert!(cursor.is_eof());
}

proptest! {
    #[test]
    fn walking_counts_lines(text in "[a-z\n]{0,64}") {
        let buf = SourceBuffer::new(&text);
        let mut cursor = buf.cursor();
        while !cursor.is_eof() {
            cursor.advance();
        }
        let newlines = u32::try_from(text.matches('\n').count()).unwrap_or(u32::MAX);
        prop_assert_eq!(cursor.line(), newlines + 1);
        let tail = text.rsplit('\n').next().map_or(0, str::len);
        prop_assert_eq!(cursor.column() as usize, tail + 1);
    }

    #[test]
    fn slice_from_start_is_content(text in ".{0,32}") {
        let buf = SourceBuffer::new(&text);
        let mut cursor = buf.cursor();
        cursor.eat_while(|_| true);
        prop_assert_eq!(cursor.slice_from(0), buf.as_chars());
    }
}
