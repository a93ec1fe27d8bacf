//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_lookup_result, print_rebuild_result, print_stats};
pub use formatters::{NOT_RECOGNIZED, format_stats};
