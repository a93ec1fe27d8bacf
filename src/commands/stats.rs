//! Index statistics command

use super::progress::with_spinner;
use crate::index::IndexStats;
use crate::source::{IndexLoader, LoadError};

/// Load the index and summarise it, keeping the `top` largest classes
///
/// # Errors
///
/// Returns a [`LoadError`] if the index could neither be loaded nor rebuilt.
pub fn index_stats(loader: &IndexLoader, top: usize) -> Result<IndexStats, LoadError> {
    let index = with_spinner("Loading word index...", || loader.load())?;
    Ok(IndexStats::from_index(&index, top))
}
