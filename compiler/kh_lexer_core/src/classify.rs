//! Character class predicates.
//!
//! All predicates are total over `char` and return `false` outside their
//! range. Word characters follow Unicode alphanumerics, so identifiers may
//! use any script.

/// `0`-`9`.
#[inline]
pub const fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// `0` or `1`.
#[inline]
pub const fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

/// `0`-`7`.
#[inline]
pub const fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

/// `0`-`9`, `a`-`f`, `A`-`F`.
#[inline]
pub const fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Value of `c` as a digit in any radix up to 36.
///
/// `0`-`9` map to 0-9 and letters of either case to 10-35. Callers compare
/// the result against their radix, so `digit_value('8')` is `Some(8)` even
/// while scanning octal.
#[inline]
pub const fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// First character of an identifier or keyword.
#[inline]
pub fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Any later character of an identifier or keyword.
#[inline]
pub fn is_word_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whitespace skipped between tokens. Excludes `\n`, which is a token.
#[inline]
pub fn is_horizontal_whitespace(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}

#[cfg(test)]
mod tests;
