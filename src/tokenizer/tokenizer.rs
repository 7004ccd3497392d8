use std::collections::HashSet;

use crate::config::TokenizerConfig;

/// Whitespace tokenizer for the word indices
///
/// A token is a maximal run of non-whitespace characters. Punctuation stays
/// attached and case is preserved, so `"land."` and `"Land"` are both
/// distinct from `"land"`.
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a new tokenizer from configuration
    pub fn new(config: &TokenizerConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Tokenize text into the words to index, in order of appearance
    ///
    /// Repeated words are emitted once per occurrence unless
    /// `dedupe_tokens` is set, in which case only the first is kept.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        if !self.config.dedupe_tokens {
            return text.split_whitespace().collect();
        }

        let mut seen = HashSet::new();
        text.split_whitespace()
            .filter(|token| seen.insert(*token))
            .collect()
    }
}
