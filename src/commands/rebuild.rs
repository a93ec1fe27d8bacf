//! Rebuild command
//!
//! Builds a fresh index from the word source and overwrites the cached
//! artifact. The old artifact stays in place if the rebuild fails.

use super::progress::with_spinner;
use crate::source::{IndexLoader, LoadError};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Result of a forced rebuild
#[derive(Debug, Clone)]
pub struct RebuildResult {
    pub origin: String,
    pub word_count: usize,
    pub class_count: usize,
    /// Artifact path, if the new index was cached
    pub cached_at: Option<PathBuf>,
    pub duration: Duration,
}

/// Rebuild the index from its word source and re-cache it
///
/// # Errors
///
/// Returns a [`LoadError`] if the word source fails or the list cannot be parsed.
pub fn rebuild_index(loader: &IndexLoader) -> Result<RebuildResult, LoadError> {
    let start = Instant::now();

    let (index, cached) = with_spinner("Rebuilding word index...", || loader.refresh_cached())?;

    let cached_at = loader
        .store()
        .filter(|_| cached)
        .map(|store| store.path().to_path_buf());

    Ok(RebuildResult {
        origin: loader.origin(),
        word_count: index.word_count(),
        class_count: index.len(),
        cached_at,
        duration: start.elapsed(),
    })
}
