//! Parallel lexing of independent compilation units.

use rayon::prelude::*;
use tracing::debug;

use kh_ir::Token;

use crate::{lex_with_config, LexConfig, LexError};

/// Tokenize each `(file, source)` unit on the rayon pool.
///
/// Results come back in input order. One unit failing does not stop the
/// others.
pub fn lex_units<F, S>(units: &[(F, S)], config: LexConfig) -> Vec<Result<Vec<Token>, LexError>>
where
    F: AsRef<str> + Sync,
    S: AsRef<str> + Sync,
{
    debug!(
        units = units.len(),
        threads = rayon::current_num_threads(),
        "lexing units"
    );
    units
        .par_iter()
        .map(|(file, source)| lex_with_config(file.as_ref(), source.as_ref(), config))
        .collect()
}

#[cfg(test)]
mod tests;
