//! Anagram index construction from raw word lists
//!
//! Consumes newline-delimited text and produces a fully populated [`AnagramIndex`].

use super::AnagramIndex;
use crate::core::fold;
use rayon::prelude::*;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

/// Sentinel line closing the header of aspell/SCOWL generated word lists
pub const DEFAULT_HEADER_SENTINEL: &str = "---";

/// Lines per partition in a parallel build
const PARALLEL_CHUNK_LINES: usize = 4096;

/// Error raised when the word list cannot be read
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read word list: {0}")]
    Read(#[from] io::Error),
}

/// Configurable index builder
///
/// # Examples
/// ```
/// use anagram_finder::index::IndexBuilder;
///
/// let index = IndexBuilder::new().build(b"listen\nSilent\nbanana\n").unwrap();
/// assert_eq!(index.class("eilnst").unwrap(), &["listen", "silent"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    header_sentinel: Option<String>,
    parallel: bool,
}

impl IndexBuilder {
    /// Create a builder that treats every line as a word
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip lines up to and including the first line exactly equal to `sentinel`
    #[must_use]
    pub fn header_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.header_sentinel = Some(sentinel.into());
        self
    }

    /// Partition the word list and build partial indexes in parallel
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Settings that change which words are ingested, as a short stable tag
    ///
    /// Parallelism is left out: it never changes the built index.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        match &self.header_sentinel {
            Some(sentinel) => format!("sentinel={sentinel}"),
            None => "no-header".to_string(),
        }
    }

    /// Build an index from raw word list bytes
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Read`] if the input is not valid UTF-8.
    pub fn build(&self, raw: &[u8]) -> Result<AnagramIndex, BuildError> {
        self.build_from_reader(raw)
    }

    /// Build an index from any buffered reader
    ///
    /// Lines are split on `\n` with an optional trailing `\r` removed. Blank
    /// lines are skipped. The index is only returned once the whole input has
    /// been consumed.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Read`] on an I/O failure or invalid UTF-8.
    pub fn build_from_reader<R: BufRead>(&self, reader: R) -> Result<AnagramIndex, BuildError> {
        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
        let words = self.strip_header(&lines);

        let index = if self.parallel {
            build_parallel(words)
        } else {
            build_sequential(words)
        };

        debug!(
            words = index.word_count(),
            classes = index.len(),
            parallel = self.parallel,
            "built anagram index"
        );
        Ok(index)
    }

    /// Return the data lines following the header sentinel, if one is configured
    fn strip_header<'a>(&self, lines: &'a [String]) -> &'a [String] {
        let Some(sentinel) = &self.header_sentinel else {
            return lines;
        };

        match lines.iter().position(|line| line == sentinel) {
            Some(pos) => &lines[pos + 1..],
            None => {
                debug!(%sentinel, "header sentinel not found; no words ingested");
                &[]
            }
        }
    }
}

fn build_sequential(lines: &[String]) -> AnagramIndex {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| fold(line))
        .collect()
}

/// Map-reduce build: partial indexes per partition, merged in partition order
fn build_parallel(lines: &[String]) -> AnagramIndex {
    lines
        .par_chunks(PARALLEL_CHUNK_LINES)
        .map(build_sequential)
        .reduce(AnagramIndex::new, |mut left, right| {
            left.merge(right);
            left
        })
}
