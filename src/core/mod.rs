//! Core domain types for anagram lookup
//!
//! Pure functions with no I/O: everything here is deterministic and cheap to test.

mod key;

pub use key::{canonical_key, fold};
