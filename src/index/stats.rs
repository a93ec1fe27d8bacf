//! Summary statistics over an anagram index

use super::AnagramIndex;

/// Aggregate view of an index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub word_count: usize,
    pub class_count: usize,
    /// Classes with at least two members
    pub anagram_classes: usize,
    /// Largest classes as `(key, members)`, biggest first, ties broken by key
    pub largest: Vec<(String, Vec<String>)>,
}

impl IndexStats {
    /// Collect statistics, keeping the `top` largest classes
    #[must_use]
    pub fn from_index(index: &AnagramIndex, top: usize) -> Self {
        let mut classes: Vec<(&str, &[String])> = index.iter().collect();
        classes.sort_unstable_by(|(ka, wa), (kb, wb)| wb.len().cmp(&wa.len()).then(ka.cmp(kb)));

        let anagram_classes = classes.iter().filter(|(_, words)| words.len() > 1).count();
        let largest = classes
            .into_iter()
            .take(top)
            .map(|(key, words)| (key.to_string(), words.to_vec()))
            .collect();

        Self {
            word_count: index.word_count(),
            class_count: index.len(),
            anagram_classes,
            largest,
        }
    }
}
