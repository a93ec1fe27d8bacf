//! Swappable shared index for long-lived sessions

use super::AnagramIndex;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// An immutable index that readers share without locking
///
/// A refresh never mutates the current index: it builds a new one and swaps the
/// pointer, so in-flight readers keep the snapshot they started with.
pub struct SharedIndex {
    current: ArcSwap<AnagramIndex>,
}

impl SharedIndex {
    #[must_use]
    pub fn new(index: AnagramIndex) -> Self {
        Self {
            current: ArcSwap::from_pointee(index),
        }
    }

    /// Get the current index
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Arc<AnagramIndex> {
        self.current.load_full()
    }

    /// Atomically publish a freshly built index, returning the one it replaces
    pub fn replace(&self, index: AnagramIndex) -> Arc<AnagramIndex> {
        self.current.swap(Arc::new(index))
    }
}
