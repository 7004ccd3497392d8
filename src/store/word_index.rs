//! Inverted word index over one entry field
//!
//! Maps an exact token to the entries whose indexed field contains it, in
//! insertion order. Lists are created on first use.

use std::collections::HashMap;
use std::sync::Arc;

use crate::models::Entry;

#[derive(Debug, Default)]
pub struct WordIndex {
    postings: HashMap<String, Vec<Arc<Entry>>>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` to the list for `word`
    pub fn record(&mut self, word: &str, entry: &Arc<Entry>) {
        self.postings
            .entry(word.to_string())
            .or_default()
            .push(Arc::clone(entry));
    }

    /// Entries recorded under `word`, empty if it was never seen
    pub fn lookup(&self, word: &str) -> &[Arc<Entry>] {
        self.postings.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Distinct indexed words, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str) -> Arc<Entry> {
        Arc::new(Entry::new(key, "", "", ""))
    }

    #[test]
    fn test_lookup_unknown_word_is_empty() {
        let index = WordIndex::new();
        assert!(index.lookup("nonexistent-token").is_empty());
        assert!(index.lookup("").is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut index = WordIndex::new();
        let first = entry("b");
        let second = entry("a");
        index.record("land", &first);
        index.record("land", &second);

        let found = index.lookup("land");
        assert_eq!(found.len(), 2);
        assert!(Arc::ptr_eq(&found[0], &first));
        assert!(Arc::ptr_eq(&found[1], &second));
    }

    #[test]
    fn test_words_are_case_sensitive() {
        let mut index = WordIndex::new();
        index.record("Land", &entry("a"));
        assert_eq!(index.lookup("Land").len(), 1);
        assert!(index.lookup("land").is_empty());
    }

    #[test]
    fn test_distinct_word_count() {
        let mut index = WordIndex::new();
        let e = entry("a");
        index.record("ka", &e);
        index.record("ka", &e);
        index.record("hui", &e);

        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("ka").len(), 2);

        let mut words: Vec<&str> = index.words().collect();
        words.sort_unstable();
        assert_eq!(words, vec!["hui", "ka"]);
    }
}
