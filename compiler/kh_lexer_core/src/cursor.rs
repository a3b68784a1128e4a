//! Cursor over a sentinel-terminated code point buffer.
//!
//! EOF is the sentinel `'\0'` at or past the content length. An interior
//! `'\0'` reads the same through [`Cursor::current`]; use
//! [`Cursor::is_eof`] to tell them apart.
//!
//! The cursor tracks the 1-based line and column of its position as it
//! advances, so errors can be located without rescanning the source.

use crate::classify::is_horizontal_whitespace;

/// Cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// `Copy`, so a snapshot for backtracking is a plain assignment.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Content followed by sentinel padding.
    buf: &'a [char],
    pos: u32,
    source_len: u32,
    line: u32,
    /// Offset of the first code point on the current line.
    line_start: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [char], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) + 2 < buf.len(),
            "sentinel padding must cover peek2"
        );
        Self {
            buf,
            pos: 0,
            source_len,
            line: 1,
            line_start: 0,
        }
    }

    /// Code point at the current position, `'\0'` at EOF.
    #[inline]
    pub fn current(&self) -> char {
        self.buf[self.pos as usize]
    }

    /// Code point one past the current position.
    #[inline]
    pub fn peek(&self) -> char {
        self.buf[self.pos as usize + 1]
    }

    /// Code point two past the current position.
    #[inline]
    pub fn peek2(&self) -> char {
        self.buf[self.pos as usize + 2]
    }

    /// Step over the current code point. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos >= self.source_len {
            return;
        }
        if self.current() == '\n' {
            self.line += 1;
            self.line_start = self.pos + 1;
        }
        self.pos += 1;
    }

    pub fn advance_n(&mut self, n: u32) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Advance past `c` if it is the current code point.
    #[inline]
    pub fn eat(&mut self, c: char) -> bool {
        if self.current() == c && !self.is_eof() {
            self.advance();
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Code point offset of the current position.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// 1-based line of the current position.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the current position, counted in code points.
    #[inline]
    pub fn column(&self) -> u32 {
        self.pos - self.line_start + 1
    }

    /// True when the content at the current position starts with `text`.
    pub fn looking_at(&self, text: &str) -> bool {
        let rest = &self.buf[self.pos as usize..self.source_len.max(self.pos) as usize];
        let mut rest = rest.iter();
        text.chars().all(|c| rest.next() == Some(&c))
    }

    /// Content between two offsets.
    pub fn slice(&self, start: u32, end: u32) -> &'a [char] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        &self.buf[start as usize..end as usize]
    }

    /// Content from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a [char] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current code point. Stops at EOF
    /// whatever `pred` returns for the sentinel.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Skip spaces, tabs and other whitespace except `\n`.
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_horizontal_whitespace);
    }

    /// Advance to the next `\n` (not consumed) or EOF.
    pub fn eat_until_newline_or_eof(&mut self) {
        self.eat_while(|c| c != '\n');
    }
}

#[cfg(test)]
mod tests;
