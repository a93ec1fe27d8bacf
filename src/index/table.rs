//! Anagram index representation
//!
//! Maps each canonical key to the words sharing it, in first-seen order.

use crate::core::canonical_key;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Mapping from canonical key to anagram class
///
/// Built once from a word list (or loaded from cache) and read-only afterwards.
/// Classes keep source order and source duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnagramIndex {
    classes: FxHashMap<String, Vec<String>>,
    word_count: usize,
}

impl AnagramIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already folded word to the class of its key
    pub(crate) fn insert(&mut self, word: String) {
        let key = canonical_key(&word);
        self.classes.entry(key).or_default().push(word);
        self.word_count += 1;
    }

    /// Append every class of `other` after the matching class of `self`
    ///
    /// Merging partial indexes in source order yields the same index as one
    /// sequential pass over the concatenated input.
    pub(crate) fn merge(&mut self, other: Self) {
        for (key, words) in other.classes {
            self.classes.entry(key).or_default().extend(words);
        }
        self.word_count += other.word_count;
    }

    /// Get the anagram class stored under a canonical key
    #[inline]
    #[must_use]
    pub fn class(&self, key: &str) -> Option<&[String]> {
        self.classes.get(key).map(Vec::as_slice)
    }

    /// Number of anagram classes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check whether the index holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Total number of words ingested, duplicates included
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Iterate over `(key, class)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.classes
            .iter()
            .map(|(key, words)| (key.as_str(), words.as_slice()))
    }
}

impl<S: Into<String>> FromIterator<S> for AnagramIndex {
    /// Index already folded words in iteration order
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = Self::new();
        for word in iter {
            index.insert(word.into());
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_groups_by_key() {
        let index: AnagramIndex = ["listen", "silent", "enlist", "banana"]
            .into_iter()
            .collect();

        assert_eq!(index.len(), 2);
        assert_eq!(index.word_count(), 4);
        assert_eq!(
            index.class("eilnst").unwrap(),
            &["listen", "silent", "enlist"]
        );
        assert_eq!(index.class("aaabnn").unwrap(), &["banana"]);
        assert!(index.class("aegnor").is_none());
    }

    #[test]
    fn insert_keeps_duplicates() {
        let index: AnagramIndex = ["tea", "eat", "tea"].into_iter().collect();
        assert_eq!(index.class("aet").unwrap(), &["tea", "eat", "tea"]);
        assert_eq!(index.word_count(), 3);
    }

    #[test]
    fn merge_appends_in_order() {
        let mut left: AnagramIndex = ["tea", "dog"].into_iter().collect();
        let right: AnagramIndex = ["eat", "god", "cat"].into_iter().collect();
        left.merge(right);

        let sequential: AnagramIndex = ["tea", "dog", "eat", "god", "cat"].into_iter().collect();
        assert_eq!(left, sequential);
    }

    #[test]
    fn empty_index() {
        let index = AnagramIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.word_count(), 0);
        assert_eq!(index.iter().count(), 0);
    }
}
