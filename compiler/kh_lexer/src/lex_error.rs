//! Lexical errors.
//!
//! A scan stops at the first error. The error records where it happened
//! (file, 1-based line and column, code point span) and the offending text.
//!
//! Errors are built in two steps: a `#[cold]` factory names the kind and the
//! span, then [`LexError::located`] fills in the file, position and slice
//! once the tokenizer knows them.

use kh_ir::Span;

/// What went wrong.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// End of line or input before the closing `"`.
    #[error("unterminated string literal")]
    UnterminatedStringLiteral,
    /// End of input, or no closing `'` after one character.
    #[error("unterminated character literal")]
    UnterminatedCharLiteral,
    /// End of line or input before the closing `"` of a `b"..."` literal.
    #[error("unterminated buffer literal")]
    UnterminatedBufferLiteral,
    /// `/*` without a matching `*/`.
    #[error("unterminated multi-line comment")]
    UnterminatedMultilineComment,
    /// Missing digits, digits outside the radix, overflow past 2^64, or a
    /// word character glued to the literal.
    #[error("invalid numeric literal")]
    InvalidNumericLiteral,
    /// A character that starts no token.
    #[error("unrecognized character")]
    UnrecognizedCharacter,
    /// Unknown escape letter, too few hex digits, a value that is not a
    /// Unicode scalar, or `\u`/`\U` in a byte or buffer literal.
    #[error("invalid escape sequence")]
    InvalidEscapeSequence,
    /// `''`, a raw newline between quotes, or a non-byte in a byte or
    /// buffer literal.
    #[error("invalid character literal")]
    InvalidCharLiteral,
    /// More code points than a `u32` span can address.
    #[error("source too long")]
    SourceTooLong,
}

/// A located lexical error.
///
/// Displays as `<message> at <line>, <column> in "<file>"`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {line}, {column} in \"{file}\"")]
pub struct LexError {
    kind: LexErrorKind,
    file: String,
    line: u32,
    column: u32,
    span: Span,
    slice: String,
}

impl LexError {
    fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError {
            kind,
            file: String::new(),
            line: 0,
            column: 0,
            span,
            slice: String::new(),
        }
    }

    // === Factories ===

    #[cold]
    pub fn unterminated_string_literal(span: Span) -> Self {
        Self::new(LexErrorKind::UnterminatedStringLiteral, span)
    }

    #[cold]
    pub fn unterminated_char_literal(span: Span) -> Self {
        Self::new(LexErrorKind::UnterminatedCharLiteral, span)
    }

    #[cold]
    pub fn unterminated_buffer_literal(span: Span) -> Self {
        Self::new(LexErrorKind::UnterminatedBufferLiteral, span)
    }

    #[cold]
    pub fn unterminated_multiline_comment(span: Span) -> Self {
        Self::new(LexErrorKind::UnterminatedMultilineComment, span)
    }

    #[cold]
    pub fn invalid_numeric_literal(span: Span) -> Self {
        Self::new(LexErrorKind::InvalidNumericLiteral, span)
    }

    #[cold]
    pub fn unrecognized_character(span: Span) -> Self {
        Self::new(LexErrorKind::UnrecognizedCharacter, span)
    }

    #[cold]
    pub fn invalid_escape_sequence(span: Span) -> Self {
        Self::new(LexErrorKind::InvalidEscapeSequence, span)
    }

    #[cold]
    pub fn invalid_char_literal(span: Span) -> Self {
        Self::new(LexErrorKind::InvalidCharLiteral, span)
    }

    #[cold]
    pub fn source_too_long(span: Span) -> Self {
        Self::new(LexErrorKind::SourceTooLong, span)
    }

    /// Attach the file name, the 1-based position and the offending text.
    #[must_use]
    pub fn located(
        mut self,
        file: impl Into<String>,
        line: u32,
        column: u32,
        slice: impl Into<String>,
    ) -> Self {
        self.file = file.into();
        self.line = line;
        self.column = column;
        self.slice = slice.into();
        self
    }

    // === Accessors ===

    pub fn kind(&self) -> LexErrorKind {
        self.kind
    }

    /// File identifier the tokenizer was given.
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Code point span of the offending text.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn slice(&self) -> &str {
        &self.slice
    }
}
