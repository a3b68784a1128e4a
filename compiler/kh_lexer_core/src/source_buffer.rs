//! Sentinel-terminated source text in code points.
//!
//! The tokenizer works on Unicode scalar values, so the source is decoded
//! once into a `Vec<char>`. A `'\0'` sentinel and a little padding follow the
//! content, which lets [`Cursor::peek`] and [`Cursor::peek2`] read past the
//! end without bounds checks at every call site.
//!
//! A `'\0'` inside the content is kept as-is. The cursor tells it apart from
//! the sentinel by position.

use crate::Cursor;

/// Sentinel plus lookahead room for `peek2` at the last character.
const PADDING: usize = 3;

/// Decoded source with trailing sentinel padding.
///
/// ```text
/// [c0, c1, ..., c(n-1), '\0', '\0', '\0']
///                       ^
///                       source_len
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    buf: Vec<char>,
    source_len: u32,
    /// The input had more code points than the buffer holds.
    truncated: bool,
}

impl SourceBuffer {
    /// Decode `source` into code points.
    ///
    /// Spans are `u32` offsets, so at most `u32::MAX` code points are kept.
    /// Longer input is cut there and [`is_truncated`](Self::is_truncated)
    /// reports it.
    pub fn new(source: &str) -> Self {
        Self::with_limit(source, u32::MAX)
    }

    /// Decode at most `max_len` code points of `source`.
    pub fn with_limit(source: &str, max_len: u32) -> Self {
        let keep = max_len as usize;
        Self::from_vec(source.chars().take(keep.saturating_add(1)).collect(), max_len)
    }

    /// Copy an already decoded source.
    pub fn from_chars(source: &[char]) -> Self {
        Self::from_vec(source.to_vec(), u32::MAX)
    }

    fn from_vec(mut buf: Vec<char>, max_len: u32) -> Self {
        let source_len = u32::try_from(buf.len()).map_or(max_len, |len| len.min(max_len));
        let truncated = buf.len() > source_len as usize;
        buf.resize(source_len as usize + PADDING, '\0');
        Self {
            buf,
            source_len,
            truncated,
        }
    }

    /// Content without the sentinel padding.
    #[inline]
    pub fn as_chars(&self) -> &[char] {
        &self.buf[..self.source_len as usize]
    }

    /// Number of code points in the content.
    #[inline]
    pub fn len(&self) -> u32 {
        self.source_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Whether input past [`len`](Self::len) was dropped.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Cursor at the first code point, line 1, column 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }
}
