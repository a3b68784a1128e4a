//! Single-pass tokenizer.
//!
//! [`Lexer::next_token`] skips horizontal whitespace, records the token
//! start, and dispatches on the current character into a focused scanning
//! method. Each method moves [`LexState`] along as it goes; the state decides
//! which error kind an early end of input reports.

use kh_ir::{Delimiter, Operator, Span, Token, TokenKind};
use kh_lexer_core::classify::{is_decimal_digit, is_word_continue, is_word_start};
use kh_lexer_core::{Cursor, SourceBuffer};
use tracing::{debug, trace};

use crate::keywords;
use crate::{LexConfig, LexError};

/// Scanner state while a token is being read.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LexState {
    /// Between tokens.
    #[default]
    None,
    Identifier,
    Integer,
    Floating,
    Hex,
    Octal,
    Bin,
    InString,
    InBuffer,
    InInlineComment,
    InMultilineComment,
}

/// Tokenizer over one source buffer.
pub struct Lexer<'a> {
    file: &'a str,
    pub(crate) cursor: Cursor<'a>,
    /// Snapshot at the first character of the token being read.
    pub(crate) start: Cursor<'a>,
    pub(crate) state: LexState,
    config: LexConfig,
    /// The buffer dropped input past its end.
    truncated: bool,
}

impl<'a> Lexer<'a> {
    /// `file` identifies the source in errors only.
    pub fn new(file: &'a str, source: &'a SourceBuffer) -> Self {
        Self::with_config(file, source, LexConfig::default())
    }

    pub fn with_config(file: &'a str, source: &'a SourceBuffer, config: LexConfig) -> Self {
        let cursor = source.cursor();
        Lexer {
            file,
            cursor,
            start: cursor,
            state: LexState::None,
            config,
            truncated: source.is_truncated(),
        }
    }

    /// Current scanner state. [`LexState::None`] between tokens.
    pub fn state(&self) -> LexState {
        self.state
    }

    /// Scan the whole source.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(file = self.file, len = self.cursor.source_len())
    )]
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token() {
                Ok(Some(token)) => {
                    trace!(%token, span = %token.span, "token");
                    tokens.push(token);
                }
                Ok(None) => break,
                Err(error) => {
                    if !self.config.silent {
                        tracing::error!(%error, slice = error.slice(), "lexing failed");
                    }
                    return Err(error);
                }
            }
        }
        debug!(count = tokens.len(), "lexed");
        Ok(tokens)
    }

    /// Scan one token. `Ok(None)` at end of input.
    ///
    /// A buffer cut at the `u32` span limit fails with
    /// [`LexErrorKind::SourceTooLong`](crate::LexErrorKind::SourceTooLong)
    /// where its content ends, so a scan never silently covers only part of
    /// the input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            self.state = LexState::None;
            self.cursor.eat_whitespace();
            self.start = self.cursor;
            if self.cursor.is_eof() {
                if self.truncated {
                    let end = Span::point(self.cursor.pos());
                    return Err(self.fail(LexError::source_too_long(end)));
                }
                return Ok(None);
            }

            let kind = match self.cursor.current() {
                '\n' => {
                    self.cursor.advance();
                    TokenKind::Newline
                }
                '#' => self.inline_comment(),
                '/' if self.cursor.peek() == '/' => self.inline_comment(),
                '/' if self.cursor.peek() == '*' => self.multiline_comment()?,
                'b' | 'B' if matches!(self.cursor.peek(), '\'' | '"') => self.byte_or_buffer()?,
                c if is_word_start(c) => self.word(),
                c if is_decimal_digit(c) => self.number()?,
                '\'' => self.char_literal()?,
                '"' => self.string_literal()?,
                _ => self.symbol()?,
            };

            if matches!(kind, TokenKind::Comment) && !self.config.keep_comments {
                continue;
            }
            self.state = LexState::None;
            return Ok(Some(Token::new(kind, self.span_from_start())));
        }
    }

    pub(crate) fn span_from_start(&self) -> Span {
        Span::new(self.start.pos(), self.cursor.pos())
    }

    /// Locate `error` in this file and attach the offending text.
    #[cold]
    pub(crate) fn fail(&self, error: LexError) -> LexError {
        let span = error.span();
        let (line, column) = self.position_of(span.start);
        let slice: String = self.cursor.slice(span.start, span.end).iter().collect();
        error.located(self.file, line, column, slice)
    }

    /// Line and column of `offset`, which lies in the current token.
    fn position_of(&self, offset: u32) -> (u32, u32) {
        let (mut line, mut column) = (self.start.line(), self.start.column());
        for &c in self.cursor.slice(self.start.pos(), offset) {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    // ─── Words ─────────────────────────────────────────────────────

    fn word(&mut self) -> TokenKind {
        self.state = LexState::Identifier;
        self.cursor.eat_while(is_word_continue);
        let text: String = self.cursor.slice_from(self.start.pos()).iter().collect();
        keywords::lookup(&text).unwrap_or(TokenKind::Identifier(text))
    }

    // ─── Comments ──────────────────────────────────────────────────

    /// `#` or `//` up to, not including, the newline.
    fn inline_comment(&mut self) -> TokenKind {
        self.state = LexState::InInlineComment;
        self.cursor.eat_until_newline_or_eof();
        TokenKind::Comment
    }

    /// `/*` to the first `*/`. Does not nest.
    fn multiline_comment(&mut self) -> Result<TokenKind, LexError> {
        self.state = LexState::InMultilineComment;
        self.cursor.advance_n(2);
        while !self.cursor.is_eof() {
            if self.cursor.current() == '*' && self.cursor.peek() == '/' {
                self.cursor.advance_n(2);
                return Ok(TokenKind::Comment);
            }
            self.cursor.advance();
        }
        Err(self.fail(LexError::unterminated_multiline_comment(
            self.span_from_start(),
        )))
    }

    // ─── Operators and delimiters ──────────────────────────────────

    /// Longest operator or delimiter at the cursor.
    fn symbol(&mut self) -> Result<TokenKind, LexError> {
        use Delimiter as D;
        use Operator as O;

        let delimiter = TokenKind::Delimiter;
        let operator = TokenKind::Operator;
        let third = self.cursor.peek2();

        let (kind, width) = match (self.cursor.current(), self.cursor.peek()) {
            (',', _) => (delimiter(D::Comma), 1),
            (':', _) => (delimiter(D::Colon), 1),
            (';', _) => (delimiter(D::Semicolon), 1),
            ('(', _) => (delimiter(D::ParenthesesOpen), 1),
            (')', _) => (delimiter(D::ParenthesesClose), 1),
            ('{', _) => (delimiter(D::CurlyBracketOpen), 1),
            ('}', _) => (delimiter(D::CurlyBracketClose), 1),
            ('[', _) => (delimiter(D::SquareBracketOpen), 1),
            (']', _) => (delimiter(D::SquareBracketClose), 1),
            ('.', '.') if third == '.' => (delimiter(D::Ellipsis), 3),
            ('.', _) => (delimiter(D::Dot), 1),

            ('+', '+') => (operator(O::Increment), 2),
            ('+', '=') => (operator(O::IAdd), 2),
            ('+', _) => (operator(O::Add), 1),
            ('-', '-') => (operator(O::Decrement), 2),
            ('-', '=') => (operator(O::ISub), 2),
            ('-', '>') => (delimiter(D::Arrow), 2),
            ('-', _) => (operator(O::Sub), 1),
            ('*', '=') => (operator(O::IMul), 2),
            ('*', _) => (operator(O::Mul), 1),
            ('/', '=') => (operator(O::IDiv), 2),
            ('/', _) => (operator(O::Div), 1),
            ('%', '=') => (operator(O::IMod), 2),
            ('%', _) => (operator(O::Mod), 1),
            ('^', '=') => (operator(O::IPow), 2),
            ('^', _) => (operator(O::Pow), 1),
            ('@', '=') => (operator(O::IDot), 2),
            ('@', _) => (operator(O::Dot), 1),

            ('=', '=') => (operator(O::Equal), 2),
            ('=', _) => (operator(O::Assign), 1),
            ('!', '=') => (operator(O::NotEqual), 2),
            ('!', _) => (delimiter(D::Exclamation), 1),
            ('<', '=') => (operator(O::ELess), 2),
            ('<', '<') if third == '=' => (operator(O::IBitLShift), 3),
            ('<', '<') => (operator(O::BitLShift), 2),
            ('<', _) => (operator(O::Less), 1),
            ('>', '=') => (operator(O::EMore), 2),
            ('>', '>') if third == '=' => (operator(O::IBitRShift), 3),
            ('>', '>') => (operator(O::BitRShift), 2),
            ('>', _) => (operator(O::More), 1),

            ('~', '=') => (operator(O::IBitXor), 2),
            ('~', _) => (operator(O::BitNot), 1),
            ('&', '=') => (operator(O::IBitAnd), 2),
            ('&', _) => (operator(O::BitAnd), 1),
            ('|', '=') => (operator(O::IBitOr), 2),
            ('|', _) => (operator(O::BitOr), 1),

            _ => {
                let pos = self.cursor.pos();
                return Err(self.fail(LexError::unrecognized_character(Span::new(
                    pos,
                    pos + 1,
                ))));
            }
        };
        self.cursor.advance_n(width);
        Ok(kind)
    }
}
