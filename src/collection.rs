use std::sync::Arc;

use tracing::debug;

use crate::config::IndexSettings;
use crate::models::{Entry, Field};
use crate::store::{BalancedTree, WordIndex};
use crate::tokenizer::Tokenizer;

/// Entry collection: an ordered store plus one word index per text field.
///
/// Every inserted entry is shared by the tree and both indices; queries hand
/// out references to those shared values.
pub struct EntryCollection {
    tree: BalancedTree,
    primary_index: WordIndex,
    secondary_index: WordIndex,

    settings: IndexSettings,
    tokenizer: Tokenizer,
}

impl EntryCollection {
    pub fn new() -> Self {
        Self::with_settings(IndexSettings::default())
    }

    pub fn with_settings(settings: IndexSettings) -> Self {
        let tokenizer = Tokenizer::new(&settings.tokenizer_config);
        Self {
            tree: BalancedTree::new(),
            primary_index: WordIndex::new(),
            secondary_index: WordIndex::new(),
            settings,
            tokenizer,
        }
    }

    /// Insert an entry into the ordered store and index both text fields
    pub fn add_entry(&mut self, entry: Entry) {
        let entry = Arc::new(entry);

        for word in self.tokenizer.tokenize(entry.primary_text()) {
            self.primary_index.record(word, &entry);
        }
        for word in self.tokenizer.tokenize(entry.secondary_text()) {
            self.secondary_index.record(word, &entry);
        }

        debug!(key = entry.primary_text(), "Added entry");
        self.tree.insert(entry);
    }

    /// Check whether an entry with this exact primary text exists
    pub fn contains_entry(&self, key: &str) -> bool {
        self.tree.contains(key)
    }

    /// Look up an entry by its exact primary text
    pub fn get_entry(&self, key: &str) -> Option<&Arc<Entry>> {
        self.tree.get(key)
    }

    /// All entries, ascending by primary text
    pub fn all_entries(&self) -> Vec<&Arc<Entry>> {
        self.tree.all_entries()
    }

    /// Entries whose primary text contains `word` as a whole token
    pub fn entries_with_primary_word(&self, word: &str) -> &[Arc<Entry>] {
        self.primary_index.lookup(word)
    }

    /// Entries whose secondary text contains `word` as a whole token
    pub fn entries_with_secondary_word(&self, word: &str) -> &[Arc<Entry>] {
        self.secondary_index.lookup(word)
    }

    /// Entries whose `field` text contains `word` as a whole token
    pub fn entries_with_word(&self, field: Field, word: &str) -> &[Arc<Entry>] {
        self.index(field).lookup(word)
    }

    /// The word index for `field`
    pub fn index(&self, field: Field) -> &WordIndex {
        match field {
            Field::Primary => &self.primary_index,
            Field::Secondary => &self.secondary_index,
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn settings(&self) -> &IndexSettings {
        &self.settings
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn tree(&self) -> &BalancedTree {
        &self.tree
    }

    pub fn primary_index(&self) -> &WordIndex {
        self.index(Field::Primary)
    }

    pub fn secondary_index(&self) -> &WordIndex {
        self.index(Field::Secondary)
    }
}

impl Default for EntryCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Entry> for EntryCollection {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        for entry in iter {
            self.add_entry(entry);
        }
    }
}

impl FromIterator<Entry> for EntryCollection {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenizerConfig;

    fn entry(primary: &str, secondary: &str) -> Entry {
        Entry::new(primary, secondary, "", "")
    }

    fn primary_keys(found: &[Arc<Entry>]) -> Vec<&str> {
        found.iter().map(|e| e.primary_text()).collect()
    }

    #[test]
    fn test_empty_collection() {
        let collection = EntryCollection::new();
        assert!(collection.is_empty());
        assert!(!collection.contains_entry("anything"));
        assert!(collection.all_entries().is_empty());
        assert!(collection.entries_with_primary_word("pono").is_empty());
        assert!(collection.entries_with_secondary_word("care").is_empty());
    }

    #[test]
    fn test_add_entry_updates_store_and_both_indices() {
        let mut collection = EntryCollection::new();
        collection.add_entry(entry("E mālama pono i ka ʻāina", "Take good care of the land"));

        assert_eq!(collection.len(), 1);
        assert!(collection.contains_entry("E mālama pono i ka ʻāina"));
        assert_eq!(collection.entries_with_primary_word("pono").len(), 1);
        assert_eq!(collection.entries_with_secondary_word("care").len(), 1);
        assert!(collection.entries_with_secondary_word("caring").is_empty());
        assert!(collection.entries_with_primary_word("care").is_empty());
        assert!(collection.entries_with_secondary_word("pono").is_empty());
    }

    #[test]
    fn test_structures_share_one_entry() {
        let mut collection = EntryCollection::new();
        collection.add_entry(entry("ka hui", "the group"));

        let from_tree = collection.get_entry("ka hui").unwrap();
        let from_primary = &collection.entries_with_primary_word("hui")[0];
        let from_secondary = &collection.entries_with_secondary_word("group")[0];

        assert!(Arc::ptr_eq(from_tree, from_primary));
        assert!(Arc::ptr_eq(from_tree, from_secondary));
        assert_eq!(Arc::strong_count(from_tree), 5);
    }

    #[test]
    fn test_entries_with_word_by_field() {
        let mut collection = EntryCollection::new();
        collection.add_entry(entry("He aliʻi ka ʻāina", "The land is a chief"));

        assert_eq!(collection.entries_with_word(Field::Primary, "ʻāina").len(), 1);
        assert_eq!(collection.entries_with_word(Field::Secondary, "chief").len(), 1);
        assert!(collection.entries_with_word(Field::Primary, "chief").is_empty());
    }

    #[test]
    fn test_word_matches_follow_insertion_order() {
        let mut collection = EntryCollection::new();
        collection.add_entry(entry("Charlie land", ""));
        collection.add_entry(entry("Alpha land", ""));
        collection.add_entry(entry("Bravo land", ""));

        assert_eq!(
            primary_keys(collection.entries_with_primary_word("land")),
            vec!["Charlie land", "Alpha land", "Bravo land"]
        );
    }

    #[test]
    fn test_repeated_word_indexed_per_occurrence() {
        let mut collection = EntryCollection::new();
        collection.add_entry(entry("ka hui ka", ""));
        assert_eq!(collection.entries_with_primary_word("ka").len(), 2);
        assert_eq!(collection.entries_with_primary_word("hui").len(), 1);
    }

    #[test]
    fn test_repeated_word_with_dedupe() {
        let settings = IndexSettings::default()
            .with_tokenizer_config(TokenizerConfig::default().with_dedupe_tokens(true));
        let mut collection = EntryCollection::with_settings(settings);
        collection.add_entry(entry("ka hui ka", "a a a"));

        assert!(collection.settings().tokenizer_config.dedupe_tokens);
        assert_eq!(collection.entries_with_primary_word("ka").len(), 1);
        assert_eq!(collection.entries_with_secondary_word("a").len(), 1);
    }

    #[test]
    fn test_leading_whitespace_does_not_index_empty_word() {
        let mut collection = EntryCollection::new();
        collection.add_entry(entry("key", " Take good care of the land"));
        assert!(collection.entries_with_secondary_word("").is_empty());
        assert_eq!(collection.secondary_index().len(), 6);
    }

    #[test]
    fn test_from_iterator() {
        let collection: EntryCollection = ["b", "c", "a"]
            .into_iter()
            .map(|k| entry(k, k))
            .collect();

        let keys: Vec<&str> = collection
            .all_entries()
            .into_iter()
            .map(|e| e.primary_text())
            .collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(collection.primary_index().len(), 3);
        assert!(collection.tree().is_balanced());
    }
}
