//! Integration tests for invariant checking
//!
//! Runs every invariant after each insert across several insertion orders.

use proverbdex::testing::prelude::*;
use proverbdex::testing::{IndexComplete, IndexSound, TreeBalanced};
use proverbdex::{Entry, EntryCollection, IndexSettings, TokenizerConfig};

fn create_entry(primary: &str, secondary: &str) -> Entry {
    Entry::new(primary, secondary, "", "")
}

fn assert_invariants(collection: &EntryCollection) {
    let violations = check_all_invariants(collection, &default_invariants());
    for violation in &violations {
        eprintln!("{}", violation);
    }
    assert!(violations.is_empty());
}

#[test]
fn test_invariants_hold_after_every_insert() {
    let orders: [Vec<u32>; 3] = [
        (0..64).collect(),
        (0..64).rev().collect(),
        (0..64).map(|i| (i * 29) % 64).collect(),
    ];

    for order in orders {
        let mut collection = EntryCollection::new();
        for i in order {
            collection.add_entry(create_entry(
                &format!("key {:02}", i),
                &format!("word{} shared word{}", i % 3, i % 3),
            ));
            assert_invariants(&collection);
        }
    }
}

#[test]
fn test_invariants_hold_with_duplicate_keys() {
    let mut collection = EntryCollection::new();
    for i in 0..40 {
        let key = ["ka", "he", "e", "ʻaʻohe"][i % 4];
        collection.add_entry(create_entry(key, "ka ka"));
        assert_invariants(&collection);
    }
    assert_eq!(collection.len(), 40);
}

#[test]
fn test_invariants_hold_with_dedupe() {
    let settings = IndexSettings::default()
        .with_tokenizer_config(TokenizerConfig::default().with_dedupe_tokens(true));
    let mut collection = EntryCollection::with_settings(settings);
    collection.add_entry(create_entry("ka hui ka", "the land the"));
    collection.add_entry(create_entry("hui", "land"));

    let invariants: Vec<Box<dyn Invariant>> = vec![
        Box::new(TreeBalanced),
        Box::new(IndexComplete),
        Box::new(IndexSound),
    ];
    assert!(check_all_invariants(&collection, &invariants).is_empty());
}
