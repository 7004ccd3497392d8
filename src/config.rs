use serde::{Deserialize, Serialize};

/// Collection settings
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSettings {
    pub tokenizer_config: TokenizerConfig,
}

impl IndexSettings {
    /// Replace the tokenizer configuration
    pub fn with_tokenizer_config(mut self, config: TokenizerConfig) -> Self {
        self.tokenizer_config = config;
        self
    }
}

/// Tokenizer configuration
///
/// Tokens are always exact, case-sensitive whitespace-delimited runs; the
/// only knob is whether a word repeated within one field is indexed once or
/// once per occurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    pub dedupe_tokens: bool,
}

impl TokenizerConfig {
    /// Index each word at most once per field
    pub fn with_dedupe_tokens(mut self, dedupe: bool) -> Self {
        self.dedupe_tokens = dedupe;
        self
    }
}
