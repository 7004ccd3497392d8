use thiserror::Error;

/// Main error type for Proverbdex operations
///
/// Collection operations never fail; only dataset loading does.
#[derive(Error, Debug)]
pub enum ProverbdexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),
}

/// Result type alias for Proverbdex operations
pub type Result<T> = std::result::Result<T, ProverbdexError>;

impl ProverbdexError {
    /// Check if this error came from malformed input rather than the environment
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            ProverbdexError::Json(_) | ProverbdexError::InvalidDataset(_)
        )
    }
}
