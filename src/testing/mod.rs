//! Invariant checks for collection state
//!
//! ```rust,ignore
//! use proverbdex::testing::prelude::*;
//!
//! let violations = check_all_invariants(&collection, &default_invariants());
//! assert!(violations.is_empty());
//! ```
//!
//! # Invariants
//!
//! - **EntriesOrdered**: the listing is non-decreasing by primary text
//! - **TreeBalanced**: every node's subtree heights differ by at most one
//! - **KeysRetrievable**: every listed primary text is found by key
//! - **IndexComplete**: every token of every entry is indexed for it
//! - **IndexSound**: every indexed entry really contains its word

pub mod invariants;

pub use invariants::{
    check_all_invariants, default_invariants, EntriesOrdered, IndexComplete, IndexSound,
    Invariant, KeysRetrievable, TreeBalanced, Violation,
};

/// Prelude for easy imports
pub mod prelude {
    pub use super::invariants::{check_all_invariants, default_invariants, Invariant, Violation};
}
