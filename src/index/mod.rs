//! Anagram index: construction, persistence and sharing

pub mod builder;
mod shared;
mod stats;
pub mod store;
mod table;

pub use builder::{BuildError, DEFAULT_HEADER_SENTINEL, IndexBuilder};
pub use shared::SharedIndex;
pub use stats::IndexStats;
pub use store::{CacheError, DEFAULT_CACHE_PATH, IndexStore};
pub use table::AnagramIndex;
