//! Anagram Finder
//!
//! Groups a dictionary into anagram classes and answers single-word queries.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_finder::index::IndexBuilder;
//! use anagram_finder::resolver::resolve;
//!
//! let index = IndexBuilder::new()
//!     .build(b"listen\nsilent\nenlist\nbanana\n")
//!     .unwrap();
//!
//! let resolution = resolve(&index, "Listen");
//! assert_eq!(resolution.matches(), &["silent", "enlist"]);
//! ```

// Core domain types
pub mod core;

// Index construction, persistence and sharing
pub mod index;

// Query resolution
pub mod resolver;

// Word sources and loading chain
pub mod source;

// Run configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
