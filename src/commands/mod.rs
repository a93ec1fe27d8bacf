//! Command implementations

pub mod interactive;
pub mod lookup;
mod progress;
pub mod rebuild;
pub mod stats;

pub use interactive::run_interactive;
pub use lookup::{LookupResult, lookup_word};
pub use rebuild::{RebuildResult, rebuild_index};
pub use stats::index_stats;
