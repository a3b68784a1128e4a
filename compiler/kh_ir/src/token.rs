//! Token types produced by the tokenizer.
//!
//! [`TokenKind`] carries its payload inline, so a keyword token always holds
//! a [`Keyword`], an integer token an `i64`, and so on. [`TokenTag`] is the
//! payload-free discriminant used for names and quick comparisons.

use std::fmt::{self, Write as _};

use crate::escape::{
    write_escaped_byte, write_escaped_char, write_quoted_buffer, write_quoted_string,
};
use crate::Span;

/// Reserved words.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Keyword {
    Import,
    Include,
    As,
    Def,
    Class,
    Inherits,
    Struct,
    Enum,
    Alias,
    Ref,
    Wild,
    Incase,
    Static,
    If,
    Elif,
    Else,
    For,
    In,
    While,
    Do,
    Break,
    Continue,
    Return,
}

impl Keyword {
    pub const ALL: [Keyword; 23] = [
        Keyword::Import,
        Keyword::Include,
        Keyword::As,
        Keyword::Def,
        Keyword::Class,
        Keyword::Inherits,
        Keyword::Struct,
        Keyword::Enum,
        Keyword::Alias,
        Keyword::Ref,
        Keyword::Wild,
        Keyword::Incase,
        Keyword::Static,
        Keyword::If,
        Keyword::Elif,
        Keyword::Else,
        Keyword::For,
        Keyword::In,
        Keyword::While,
        Keyword::Do,
        Keyword::Break,
        Keyword::Continue,
        Keyword::Return,
    ];

    /// Source spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Import => "import",
            Keyword::Include => "include",
            Keyword::As => "as",
            Keyword::Def => "def",
            Keyword::Class => "class",
            Keyword::Inherits => "inherits",
            Keyword::Struct => "struct",
            Keyword::Enum => "enum",
            Keyword::Alias => "alias",
            Keyword::Ref => "ref",
            Keyword::Wild => "wild",
            Keyword::Incase => "incase",
            Keyword::Static => "static",
            Keyword::If => "if",
            Keyword::Elif => "elif",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::In => "in",
            Keyword::While => "while",
            Keyword::Do => "do",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::Return => "return",
        }
    }
}

/// Punctuation that separates or groups, as opposed to computing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Delimiter {
    Dot,
    Comma,
    Colon,
    Semicolon,
    /// `!`, used for template instantiation.
    Exclamation,
    ParenthesesOpen,
    ParenthesesClose,
    CurlyBracketOpen,
    CurlyBracketClose,
    SquareBracketOpen,
    SquareBracketClose,
    Arrow,
    Ellipsis,
}

impl Delimiter {
    pub const ALL: [Delimiter; 13] = [
        Delimiter::Dot,
        Delimiter::Comma,
        Delimiter::Colon,
        Delimiter::Semicolon,
        Delimiter::Exclamation,
        Delimiter::ParenthesesOpen,
        Delimiter::ParenthesesClose,
        Delimiter::CurlyBracketOpen,
        Delimiter::CurlyBracketClose,
        Delimiter::SquareBracketOpen,
        Delimiter::SquareBracketClose,
        Delimiter::Arrow,
        Delimiter::Ellipsis,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Delimiter::Dot => ".",
            Delimiter::Comma => ",",
            Delimiter::Colon => ":",
            Delimiter::Semicolon => ";",
            Delimiter::Exclamation => "!",
            Delimiter::ParenthesesOpen => "(",
            Delimiter::ParenthesesClose => ")",
            Delimiter::CurlyBracketOpen => "{",
            Delimiter::CurlyBracketClose => "}",
            Delimiter::SquareBracketOpen => "[",
            Delimiter::SquareBracketClose => "]",
            Delimiter::Arrow => "->",
            Delimiter::Ellipsis => "...",
        }
    }
}

/// Operators, including the word operators `not`, `and`, `or` and `xor`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Dot,

    // In-place arithmetic
    IAdd,
    ISub,
    IMul,
    IDiv,
    IMod,
    IPow,
    IDot,

    Increment,
    Decrement,

    Assign,

    // Comparison
    Equal,
    NotEqual,
    Less,
    More,
    ELess,
    EMore,

    // Logical
    Not,
    And,
    Or,
    Xor,

    // Bitwise. `~` is both the unary not and the binary xor.
    BitNot,
    BitAnd,
    BitOr,
    BitLShift,
    BitRShift,

    // In-place bitwise
    IBitXor,
    IBitAnd,
    IBitOr,
    IBitLShift,
    IBitRShift,
}

impl Operator {
    pub const ALL: [Operator; 37] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Mod,
        Operator::Pow,
        Operator::Dot,
        Operator::IAdd,
        Operator::ISub,
        Operator::IMul,
        Operator::IDiv,
        Operator::IMod,
        Operator::IPow,
        Operator::IDot,
        Operator::Increment,
        Operator::Decrement,
        Operator::Assign,
        Operator::Equal,
        Operator::NotEqual,
        Operator::Less,
        Operator::More,
        Operator::ELess,
        Operator::EMore,
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::BitNot,
        Operator::BitAnd,
        Operator::BitOr,
        Operator::BitLShift,
        Operator::BitRShift,
        Operator::IBitXor,
        Operator::IBitAnd,
        Operator::IBitOr,
        Operator::IBitLShift,
        Operator::IBitRShift,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Pow => "^",
            Operator::Dot => "@",
            Operator::IAdd => "+=",
            Operator::ISub => "-=",
            Operator::IMul => "*=",
            Operator::IDiv => "/=",
            Operator::IMod => "%=",
            Operator::IPow => "^=",
            Operator::IDot => "@=",
            Operator::Increment => "++",
            Operator::Decrement => "--",
            Operator::Assign => "=",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::Less => "<",
            Operator::More => ">",
            Operator::ELess => "<=",
            Operator::EMore => ">=",
            Operator::Not => "not",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Xor => "xor",
            Operator::BitNot => "~",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
            Operator::BitLShift => "<<",
            Operator::BitRShift => ">>",
            Operator::IBitXor => "~=",
            Operator::IBitAnd => "&=",
            Operator::IBitOr => "|=",
            Operator::IBitLShift => "<<=",
            Operator::IBitRShift => ">>=",
        }
    }

    /// Word operators are spelled with letters and lexed like identifiers.
    pub const fn is_word(self) -> bool {
        matches!(
            self,
            Operator::Not | Operator::And | Operator::Or | Operator::Xor
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token kind with its payload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// No token. Never produced by a successful scan.
    None,
    Comment,
    Newline,
    Identifier(String),
    Keyword(Keyword),
    Delimiter(Delimiter),
    Operator(Operator),
    Char(char),
    String(String),
    Buffer(Vec<u8>),
    Byte(u8),
    Integer(i64),
    UInteger(u64),
    Float(f32),
    Double(f64),
    IFloat(f32),
    IDouble(f64),
}

/// Payload-free discriminant of [`TokenKind`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenTag {
    None,
    Comment,
    Newline,
    Identifier,
    Keyword,
    Delimiter,
    Operator,
    Char,
    String,
    Buffer,
    Byte,
    Integer,
    UInteger,
    Float,
    Double,
    IFloat,
    IDouble,
}

impl TokenTag {
    /// Canonical short name, as used in token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenTag::None => "none",
            TokenTag::Comment => "comment",
            TokenTag::Newline => "newline",
            TokenTag::Identifier => "identifier",
            TokenTag::Keyword => "keyword",
            TokenTag::Delimiter => "delimiter",
            TokenTag::Operator => "operator",
            TokenTag::Char => "char",
            TokenTag::String => "string",
            TokenTag::Buffer => "buffer",
            TokenTag::Byte => "byte",
            TokenTag::Integer => "integer",
            TokenTag::UInteger => "uinteger",
            TokenTag::Float => "float",
            TokenTag::Double => "double",
            TokenTag::IFloat => "ifloat",
            TokenTag::IDouble => "idouble",
        }
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TokenKind {
    pub const fn tag(&self) -> TokenTag {
        match self {
            TokenKind::None => TokenTag::None,
            TokenKind::Comment => TokenTag::Comment,
            TokenKind::Newline => TokenTag::Newline,
            TokenKind::Identifier(_) => TokenTag::Identifier,
            TokenKind::Keyword(_) => TokenTag::Keyword,
            TokenKind::Delimiter(_) => TokenTag::Delimiter,
            TokenKind::Operator(_) => TokenTag::Operator,
            TokenKind::Char(_) => TokenTag::Char,
            TokenKind::String(_) => TokenTag::String,
            TokenKind::Buffer(_) => TokenTag::Buffer,
            TokenKind::Byte(_) => TokenTag::Byte,
            TokenKind::Integer(_) => TokenTag::Integer,
            TokenKind::UInteger(_) => TokenTag::UInteger,
            TokenKind::Float(_) => TokenTag::Float,
            TokenKind::Double(_) => TokenTag::Double,
            TokenKind::IFloat(_) => TokenTag::IFloat,
            TokenKind::IDouble(_) => TokenTag::IDouble,
        }
    }

    /// Returns true for comments and newlines, which a parser usually skips.
    pub const fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Newline)
    }
}

/// A classified lexical unit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Renders `"<kind> : <value>"`, or just `"<kind>"` for payload-free kinds.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.tag().name())?;
        match &self.kind {
            TokenKind::None | TokenKind::Comment | TokenKind::Newline => Ok(()),
            TokenKind::Identifier(name) => write!(f, " : {name}"),
            TokenKind::Keyword(keyword) => write!(f, " : {keyword}"),
            TokenKind::Delimiter(delimiter) => write!(f, " : {delimiter}"),
            TokenKind::Operator(operator) => write!(f, " : {operator}"),
            TokenKind::Char(c) => {
                f.write_str(" : '")?;
                write_escaped_char(f, *c)?;
                f.write_char('\'')
            }
            TokenKind::String(text) => {
                f.write_str(" : ")?;
                write_quoted_string(f, text)
            }
            TokenKind::Buffer(bytes) => {
                f.write_str(" : ")?;
                write_quoted_buffer(f, bytes)
            }
            TokenKind::Byte(byte) => {
                f.write_str(" : b'")?;
                write_escaped_byte(f, *byte)?;
                f.write_char('\'')
            }
            TokenKind::Integer(value) => write!(f, " : {value}"),
            TokenKind::UInteger(value) => write!(f, " : {value}"),
            TokenKind::Float(value) | TokenKind::IFloat(value) => {
                write!(f, " : {value:.4}")?;
                if matches!(self.kind, TokenKind::IFloat(_)) {
                    f.write_char('i')?;
                }
                Ok(())
            }
            TokenKind::Double(value) | TokenKind::IDouble(value) => {
                write!(f, " : {value:.4}")?;
                if matches!(self.kind, TokenKind::IDouble(_)) {
                    f.write_char('i')?;
                }
                Ok(())
            }
        }
    }
}
