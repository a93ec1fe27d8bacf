//! Single-word lookup command
//!
//! Loads the index through the configured chain and resolves one query.

use super::progress::with_spinner;
use crate::index::AnagramIndex;
use crate::resolver::{Miss, Resolution, resolve};
use crate::source::{IndexLoader, LoadError};

/// Result of looking up one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub query: String,
    pub matches: Vec<String>,
    /// Set when nothing was found
    pub miss: Option<Miss>,
}

impl LookupResult {
    /// Resolve `query` against an already loaded index
    #[must_use]
    pub fn from_index(index: &AnagramIndex, query: &str) -> Self {
        let (matches, miss) = match resolve(index, query) {
            Resolution::Anagrams(words) => (words.into_iter().map(str::to_string).collect(), None),
            Resolution::NotFound(miss) => (Vec::new(), Some(miss)),
        };

        Self {
            query: query.to_string(),
            matches,
            miss,
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.miss.is_none()
    }
}

/// Load the index and look up `word`
///
/// # Errors
///
/// Returns a [`LoadError`] if the index could neither be loaded nor rebuilt.
pub fn lookup_word(loader: &IndexLoader, word: &str) -> Result<LookupResult, LoadError> {
    let index = with_spinner("Loading word index...", || loader.load())?;
    Ok(LookupResult::from_index(&index, word))
}
