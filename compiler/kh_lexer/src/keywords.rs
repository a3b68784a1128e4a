//! Reserved word resolution.
//!
//! A completed word is either a keyword, one of the word operators
//! (`not`, `and`, `or`, `xor`), or an identifier. Lookup buckets by length
//! first: every reserved word is 2 to 8 characters of lowercase ASCII, so
//! most identifiers are rejected without a string comparison.

use kh_ir::{Keyword, Operator, TokenKind};

/// Resolve a completed word to a keyword or word operator token.
///
/// Returns `None` for identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=8).contains(&len) || !text.as_bytes()[0].is_ascii_lowercase() {
        return None;
    }

    let keyword = match len {
        2 => match text {
            "as" => Keyword::As,
            "if" => Keyword::If,
            "in" => Keyword::In,
            "do" => Keyword::Do,
            "or" => return Some(TokenKind::Operator(Operator::Or)),
            _ => return None,
        },
        3 => match text {
            "def" => Keyword::Def,
            "ref" => Keyword::Ref,
            "for" => Keyword::For,
            "not" => return Some(TokenKind::Operator(Operator::Not)),
            "and" => return Some(TokenKind::Operator(Operator::And)),
            "xor" => return Some(TokenKind::Operator(Operator::Xor)),
            _ => return None,
        },
        4 => match text {
            "enum" => Keyword::Enum,
            "wild" => Keyword::Wild,
            "elif" => Keyword::Elif,
            "else" => Keyword::Else,
            _ => return None,
        },
        5 => match text {
            "class" => Keyword::Class,
            "alias" => Keyword::Alias,
            "while" => Keyword::While,
            "break" => Keyword::Break,
            _ => return None,
        },
        6 => match text {
            "import" => Keyword::Import,
            "struct" => Keyword::Struct,
            "incase" => Keyword::Incase,
            "static" => Keyword::Static,
            "return" => Keyword::Return,
            _ => return None,
        },
        7 => match text {
            "include" => Keyword::Include,
            _ => return None,
        },
        8 => match text {
            "inherits" => Keyword::Inherits,
            "continue" => Keyword::Continue,
            _ => return None,
        },
        _ => return None,
    };
    Some(TokenKind::Keyword(keyword))
}
