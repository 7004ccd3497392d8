pub mod collection;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tokenizer;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use collection::EntryCollection;
pub use config::{IndexSettings, TokenizerConfig};
pub use error::{ProverbdexError, Result};
pub use models::*;
pub use store::{BalancedTree, WordIndex};
pub use tokenizer::Tokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
