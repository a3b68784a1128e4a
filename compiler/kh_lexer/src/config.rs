//! Tokenizer options.

/// Options for a tokenizer run.
///
/// Passed by value to each run; there is no process-wide setting.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LexConfig {
    /// Emit `comment` tokens instead of dropping them.
    pub keep_comments: bool,
    /// Suppress the `error` event logged when a scan fails. The error is
    /// still returned.
    pub silent: bool,
}

impl LexConfig {
    pub const fn new() -> Self {
        LexConfig {
            keep_comments: false,
            silent: false,
        }
    }

    #[must_use]
    pub const fn keep_comments(mut self, keep: bool) -> Self {
        self.keep_comments = keep;
        self
    }

    #[must_use]
    pub const fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }
}

#[cfg(test)]
mod tests;
