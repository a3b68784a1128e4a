//! Quoted literals: `'c'`, `b'c'`, `"text"`, `"""text"""` and `b"bytes"`.
//!
//! All of them share one escape routine. Byte and buffer literals hold
//! values up to 0xFF only, so they reject `\u`/`\U` escapes and raw
//! characters above that range.

use kh_ir::{Span, TokenKind};
use kh_lexer_core::classify::digit_value;

use crate::lexer::{LexState, Lexer};
use crate::LexError;

const MAX_BYTE: u32 = 0xFF;

impl Lexer<'_> {
    pub(crate) fn char_literal(&mut self) -> Result<TokenKind, LexError> {
        self.quoted_char(false).map(TokenKind::Char)
    }

    pub(crate) fn string_literal(&mut self) -> Result<TokenKind, LexError> {
        self.state = LexState::InString;
        self.quoted_text(false).map(TokenKind::String)
    }

    /// `b'c'` or `b"..."`, cursor on the `b`.
    pub(crate) fn byte_or_buffer(&mut self) -> Result<TokenKind, LexError> {
        self.cursor.advance();
        if self.cursor.current() == '\'' {
            let c = self.quoted_char(true)?;
            return u8::try_from(c)
                .map(TokenKind::Byte)
                .map_err(|_| self.fail(LexError::invalid_char_literal(self.span_from_start())));
        }

        self.state = LexState::InBuffer;
        let text = self.quoted_text(true)?;
        text.chars()
            .map(u8::try_from)
            .collect::<Result<Vec<u8>, _>>()
            .map(TokenKind::Buffer)
            .map_err(|_| self.fail(LexError::invalid_char_literal(self.span_from_start())))
    }

    /// One character between single quotes, cursor on the opening quote.
    fn quoted_char(&mut self, is_byte: bool) -> Result<char, LexError> {
        self.cursor.advance();
        if self.cursor.is_eof() {
            return Err(self.fail(LexError::unterminated_char_literal(self.span_from_start())));
        }

        let c = match self.cursor.current() {
            '\'' => {
                self.cursor.advance();
                return Err(self.fail(LexError::invalid_char_literal(self.span_from_start())));
            }
            '\n' => {
                let pos = self.cursor.pos();
                return Err(self.fail(LexError::invalid_char_literal(Span::new(pos, pos + 1))));
            }
            '\\' => self.escape(is_byte)?,
            c => self.raw_char(c, is_byte)?,
        };

        if !self.cursor.eat('\'') {
            return Err(self.fail(LexError::unterminated_char_literal(self.span_from_start())));
        }
        Ok(c)
    }

    /// Text between double quotes, cursor on the opening quote. `"""` opens
    /// a multi-line literal that may contain raw newlines and lone quotes.
    fn quoted_text(&mut self, is_buffer: bool) -> Result<String, LexError> {
        self.cursor.advance();
        let multiline = self.cursor.looking_at("\"\"");
        if multiline {
            self.cursor.advance_n(2);
        }

        let mut text = String::new();
        loop {
            if self.cursor.is_eof() {
                return Err(self.unterminated_literal());
            }
            match self.cursor.current() {
                '"' if !multiline => {
                    self.cursor.advance();
                    return Ok(text);
                }
                '"' if self.cursor.looking_at("\"\"\"") => {
                    self.cursor.advance_n(3);
                    return Ok(text);
                }
                '\n' if !multiline => return Err(self.unterminated_literal()),
                '\\' => text.push(self.escape(is_buffer)?),
                c => text.push(self.raw_char(c, is_buffer)?),
            }
        }
    }

    /// Consume an unescaped content character.
    fn raw_char(&mut self, c: char, is_byte: bool) -> Result<char, LexError> {
        if is_byte && u32::from(c) > MAX_BYTE {
            let pos = self.cursor.pos();
            return Err(self.fail(LexError::invalid_char_literal(Span::new(pos, pos + 1))));
        }
        self.cursor.advance();
        Ok(c)
    }

    /// Backslash escape, cursor on the `\`.
    fn escape(&mut self, is_byte: bool) -> Result<char, LexError> {
        let escape_start = self.cursor.pos();
        self.cursor.advance();
        if self.cursor.is_eof() {
            return Err(self.unterminated_literal());
        }

        let c = match self.cursor.current() {
            '0' => '\0',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{0B}',
            'b' => '\u{08}',
            'a' => '\u{07}',
            'f' => '\u{0C}',
            '\\' => '\\',
            '\'' => '\'',
            '"' => '"',
            'x' => return self.hex_escape(escape_start, 2),
            'u' if !is_byte => return self.hex_escape(escape_start, 4),
            'U' if !is_byte => return self.hex_escape(escape_start, 8),
            _ => {
                self.cursor.advance();
                return Err(self.fail(LexError::invalid_escape_sequence(Span::new(
                    escape_start,
                    self.cursor.pos(),
                ))));
            }
        };
        self.cursor.advance();
        Ok(c)
    }

    /// `\x`, `\u` or `\U` followed by exactly `width` hex digits, cursor on
    /// the letter.
    fn hex_escape(&mut self, escape_start: u32, width: u32) -> Result<char, LexError> {
        self.cursor.advance();
        let mut value: u32 = 0;
        for _ in 0..width {
            let Some(digit) = digit_value(self.cursor.current()).filter(|&d| d < 16) else {
                return Err(self.fail(LexError::invalid_escape_sequence(Span::new(
                    escape_start,
                    self.cursor.pos(),
                ))));
            };
            value = value * 16 + digit;
            self.cursor.advance();
        }
        char::from_u32(value).ok_or_else(|| {
            self.fail(LexError::invalid_escape_sequence(Span::new(
                escape_start,
                self.cursor.pos(),
            )))
        })
    }

    /// Error for input ending inside the literal being read.
    fn unterminated_literal(&self) -> LexError {
        let span = self.span_from_start();
        let error = match self.state {
            LexState::InString => LexError::unterminated_string_literal(span),
            LexState::InBuffer => LexError::unterminated_buffer_literal(span),
            _ => LexError::unterminated_char_literal(span),
        };
        self.fail(error)
    }
}
