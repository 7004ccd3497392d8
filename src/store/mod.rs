pub mod tree;
pub mod word_index;

pub use tree::BalancedTree;
pub use word_index::WordIndex;
