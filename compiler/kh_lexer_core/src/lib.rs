//! Low-level scanning support for the Kithare tokenizer.
//!
//! - [`classify`]: character class predicates
//! - [`SourceBuffer`]: source text decoded to code points, sentinel terminated
//! - [`Cursor`]: position, line and column tracking over a [`SourceBuffer`]
//!
//! Positions are code point offsets, not byte offsets, so a span computed
//! here indexes the same `[char]` the tokenizer reads.

pub mod classify;
mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
