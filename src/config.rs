//! Run configuration
//!
//! Built once from the command line and passed explicitly to the loader.

use crate::index::{DEFAULT_CACHE_PATH, DEFAULT_HEADER_SENTINEL};
use crate::source::{DEFAULT_TIMEOUT_SECS, DEFAULT_WORDLIST_URL};
use std::path::PathBuf;
use std::time::Duration;

/// Where the words come from and where the index is cached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Dictionary URL, used when `wordlist` is unset
    pub url: String,
    /// Local word list overriding the URL
    pub wordlist: Option<PathBuf>,
    /// Cache artifact; `None` disables caching
    pub cache_path: Option<PathBuf>,
    /// Header terminator; `None` treats every line as a word
    pub header_sentinel: Option<String>,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Build the index with rayon
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_WORDLIST_URL.to_string(),
            wordlist: None,
            cache_path: Some(PathBuf::from(DEFAULT_CACHE_PATH)),
            header_sentinel: Some(DEFAULT_HEADER_SENTINEL.to_string()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            parallel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_aspell_source() {
        let config = Config::default();
        assert!(config.url.starts_with("http://app.aspell.net/create"));
        assert_eq!(config.cache_path, Some(PathBuf::from("anagram_map.bin")));
        assert_eq!(config.header_sentinel.as_deref(), Some("---"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.parallel);
    }
}
