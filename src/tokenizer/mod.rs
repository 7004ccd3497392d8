#[allow(clippy::module_inception)]
pub mod tokenizer;

pub use tokenizer::Tokenizer;
