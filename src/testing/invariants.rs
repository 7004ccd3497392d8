//! Invariant checking framework for correctness verification
//!
//! Each invariant inspects a collection's current state and reports the
//! first violation it finds.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::collection::EntryCollection;
use crate::models::Field;

/// A violation of an invariant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub invariant: String,
    pub description: String,
    pub context: HashMap<String, String>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "INVARIANT VIOLATION: {}", self.invariant)?;
        writeln!(f, "  Description: {}", self.description)?;
        if !self.context.is_empty() {
            writeln!(f, "  Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "    {}: {}", key, value)?;
            }
        }
        Ok(())
    }
}

/// Trait for invariant checkers
pub trait Invariant: Send + Sync {
    /// Name of the invariant
    fn name(&self) -> &str;

    /// Check the invariant against a collection
    fn check(&self, collection: &EntryCollection) -> Result<(), Violation>;

    /// Human-readable description
    fn description(&self) -> &str {
        "No description provided"
    }
}

/// Check all invariants and return violations
pub fn check_all_invariants(
    collection: &EntryCollection,
    invariants: &[Box<dyn Invariant>],
) -> Vec<Violation> {
    invariants
        .iter()
        .filter_map(|invariant| invariant.check(collection).err())
        .collect()
}

/// Every invariant defined here
pub fn default_invariants() -> Vec<Box<dyn Invariant>> {
    vec![
        Box::new(EntriesOrdered),
        Box::new(TreeBalanced),
        Box::new(KeysRetrievable),
        Box::new(IndexComplete),
        Box::new(IndexSound),
    ]
}

fn violation(invariant: &dyn Invariant, description: String, context: &[(&str, &str)]) -> Violation {
    Violation {
        invariant: invariant.name().to_string(),
        description,
        context: context
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

/// Invariant: the listing is sorted by primary text
pub struct EntriesOrdered;

impl Invariant for EntriesOrdered {
    fn name(&self) -> &str {
        "EntriesOrdered"
    }

    fn description(&self) -> &str {
        "In-order listing must be non-decreasing by primary text"
    }

    fn check(&self, collection: &EntryCollection) -> Result<(), Violation> {
        let entries = collection.all_entries();
        if entries.len() != collection.len() {
            return Err(violation(
                self,
                format!(
                    "listing has {} entries but collection holds {}",
                    entries.len(),
                    collection.len()
                ),
                &[],
            ));
        }

        for pair in entries.windows(2) {
            let (prev, next) = (pair[0].primary_text(), pair[1].primary_text());
            if prev > next {
                return Err(violation(
                    self,
                    "listing is out of order".to_string(),
                    &[("previous", prev), ("next", next)],
                ));
            }
        }
        Ok(())
    }
}

/// Invariant: AVL balance holds at every node
pub struct TreeBalanced;

impl Invariant for TreeBalanced {
    fn name(&self) -> &str {
        "TreeBalanced"
    }

    fn description(&self) -> &str {
        "Subtree heights differ by at most one at every node"
    }

    fn check(&self, collection: &EntryCollection) -> Result<(), Violation> {
        if collection.tree().is_balanced() {
            return Ok(());
        }
        let height = collection.tree().height().to_string();
        Err(violation(
            self,
            "tree is unbalanced or has stale heights".to_string(),
            &[("height", height.as_str())],
        ))
    }
}

/// Invariant: every stored key is found by a key lookup
pub struct KeysRetrievable;

impl Invariant for KeysRetrievable {
    fn name(&self) -> &str {
        "KeysRetrievable"
    }

    fn description(&self) -> &str {
        "contains_entry is true for every stored primary text"
    }

    fn check(&self, collection: &EntryCollection) -> Result<(), Violation> {
        for entry in collection.all_entries() {
            if !collection.contains_entry(entry.primary_text()) {
                return Err(violation(
                    self,
                    "stored entry not found by key".to_string(),
                    &[("key", entry.primary_text())],
                ));
            }
        }
        Ok(())
    }
}

/// Invariant: every token of every entry is indexed for that entry
///
/// The entry must appear under each word as many times as the tokenizer
/// emits that word for its field.
pub struct IndexComplete;

impl Invariant for IndexComplete {
    fn name(&self) -> &str {
        "IndexComplete"
    }

    fn description(&self) -> &str {
        "Each entry is listed under every word of its indexed fields"
    }

    fn check(&self, collection: &EntryCollection) -> Result<(), Violation> {
        for entry in collection.all_entries() {
            for field in Field::ALL {
                let mut expected: HashMap<&str, usize> = HashMap::new();
                for word in collection.tokenizer().tokenize(field.text(entry)) {
                    *expected.entry(word).or_insert(0) += 1;
                }

                for (word, count) in expected {
                    let actual = collection
                        .entries_with_word(field, word)
                        .iter()
                        .filter(|indexed| Arc::ptr_eq(indexed, entry))
                        .count();
                    if actual != count {
                        let field_name = field.to_string();
                        return Err(violation(
                            self,
                            format!("expected {} postings, found {}", count, actual),
                            &[
                                ("key", entry.primary_text()),
                                ("field", field_name.as_str()),
                                ("word", word),
                            ],
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Invariant: indexed entries really contain their word
pub struct IndexSound;

impl Invariant for IndexSound {
    fn name(&self) -> &str {
        "IndexSound"
    }

    fn description(&self) -> &str {
        "Every entry under a word contains that word as a token"
    }

    fn check(&self, collection: &EntryCollection) -> Result<(), Violation> {
        for field in Field::ALL {
            let index = collection.index(field);
            for word in index.words() {
                for entry in index.lookup(word) {
                    if !field.text(entry).split_whitespace().any(|token| token == word) {
                        let field_name = field.to_string();
                        return Err(violation(
                            self,
                            "entry indexed under a word it does not contain".to_string(),
                            &[
                                ("key", entry.primary_text()),
                                ("field", field_name.as_str()),
                                ("word", word),
                            ],
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}
