//! Tokenizer for Kithare source.
//!
//! Turns source text into [`Token`]s in source order, stopping at the first
//! [`LexError`].
//!
//! ```text
//! source ──► SourceBuffer ──► Lexer ──► Vec<Token>
//! ```
//!
//! # Modules
//!
//! - `lexer`: the state machine, words, comments, operators and delimiters
//! - `number`: integer and floating literals in bases 2, 8, 10 and 16
//! - `literal`: char, byte, string and buffer literals with escapes
//! - `keywords`: reserved word lookup
//! - `batch`: parallel lexing of independent units
//!
//! # Tracing
//!
//! Each run is a `debug` span with one `trace` event per token. Call
//! [`init_tracing`] and set `RUST_LOG=kh_lexer=trace` to see them.

mod batch;
mod config;
mod keywords;
mod lex_error;
mod lexer;
mod literal;
mod number;

use std::sync::Once;

use kh_ir::Token;
use kh_lexer_core::SourceBuffer;

pub use batch::lex_units;
pub use config::LexConfig;
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{LexState, Lexer};

/// Tokenize `source` with the default [`LexConfig`].
///
/// `file` identifies the source in errors only.
pub fn lex(file: &str, source: &str) -> Result<Vec<Token>, LexError> {
    lex_with_config(file, source, LexConfig::default())
}

pub fn lex_with_config(
    file: &str,
    source: &str,
    config: LexConfig,
) -> Result<Vec<Token>, LexError> {
    let buffer = SourceBuffer::new(source);
    Lexer::with_config(file, &buffer, config).tokenize()
}

/// Tokenize an already decoded source.
pub fn lex_chars(
    file: &str,
    source: &[char],
    config: LexConfig,
) -> Result<Vec<Token>, LexError> {
    let buffer = SourceBuffer::from_chars(source);
    Lexer::with_config(file, &buffer, config).tokenize()
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber that prints to stderr.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
