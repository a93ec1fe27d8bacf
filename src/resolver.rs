//! Query resolution against a built index
//!
//! A query word is folded, keyed and looked up; its own spelling is never reported
//! as one of its anagrams.

use crate::core::{canonical_key, fold};
use crate::index::AnagramIndex;

/// Why a query produced no anagrams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    /// No dictionary word has the query's key
    NoClass,
    /// The class exists but holds only the query word itself
    OnlySelf,
}

/// Outcome of resolving one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Other class members, in stored order
    Anagrams(Vec<&'a str>),
    NotFound(Miss),
}

impl<'a> Resolution<'a> {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Anagrams(_))
    }

    /// Matching words, empty when nothing was found
    #[must_use]
    pub fn matches(&self) -> &[&'a str] {
        match self {
            Self::Anagrams(words) => words,
            Self::NotFound(_) => &[],
        }
    }
}

/// Resolve `query` against `index`
///
/// Entries exactly equal to the folded query are filtered out. A class left empty
/// by that filter is reported as [`Miss::OnlySelf`].
///
/// # Examples
/// ```
/// use anagram_finder::index::AnagramIndex;
/// use anagram_finder::resolver::{Miss, Resolution, resolve};
///
/// let index: AnagramIndex = ["listen", "silent", "enlist", "banana"].into_iter().collect();
///
/// assert_eq!(resolve(&index, "Listen"), Resolution::Anagrams(vec!["silent", "enlist"]));
/// assert_eq!(resolve(&index, "banana"), Resolution::NotFound(Miss::OnlySelf));
/// assert_eq!(resolve(&index, "orange"), Resolution::NotFound(Miss::NoClass));
/// ```
#[must_use]
pub fn resolve<'a>(index: &'a AnagramIndex, query: &str) -> Resolution<'a> {
    let query = fold(query);

    let Some(class) = index.class(&canonical_key(&query)) else {
        return Resolution::NotFound(Miss::NoClass);
    };

    let others: Vec<&str> = class
        .iter()
        .map(String::as_str)
        .filter(|&word| word != query)
        .collect();

    if others.is_empty() {
        Resolution::NotFound(Miss::OnlySelf)
    } else {
        Resolution::Anagrams(others)
    }
}
