//! Tokenizer configuration.

use stache_lexer_core::DelimiterPair;

/// Settings a scan starts from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Markers in effect at the start of the template.
    pub delimiters: DelimiterPair,
}

impl TokenizerConfig {
    /// Start scanning with `delimiters` instead of `{{`/`}}`.
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: DelimiterPair) -> Self {
        self.delimiters = delimiters;
        self
    }
}
