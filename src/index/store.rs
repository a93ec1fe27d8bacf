//! Durable cache artifact for a built index
//!
//! The artifact is a bincode-encoded [`CacheArtifact`]. It is written to a
//! uniquely named sibling temporary file and renamed into place, so a reader
//! sees either the previous artifact or one complete new one, even with
//! several writers racing.

use super::AnagramIndex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

/// Default artifact location, relative to the working directory
pub const DEFAULT_CACHE_PATH: &str = "anagram_map.bin";

/// Bumped whenever the encoded layout changes
const FORMAT_VERSION: u32 = 1;

/// Error raised by [`IndexStore`]
///
/// Every load-side variant is a recoverable cache miss.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("no cached index at {}", .0.display())]
    Missing(PathBuf),
    #[error("failed to read cached index at {}: {source}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },
    #[error("cached index at {} is malformed: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },
    #[error("cached index at {} was built from {found}, expected {expected}", .path.display())]
    Stale {
        path: PathBuf,
        found: String,
        expected: String,
    },
    #[error("failed to encode index: {0}")]
    Encode(#[source] bincode::Error),
    #[error("failed to write cached index to {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// On-disk layout of the cache
#[derive(Debug, Serialize, Deserialize)]
struct CacheArtifact {
    format_version: u32,
    /// Word source and build settings the index was built from
    origin: String,
    index: AnagramIndex,
}

/// Same layout, borrowed for encoding without cloning the index
#[derive(Serialize)]
struct CacheArtifactRef<'a> {
    format_version: u32,
    origin: &'a str,
    index: &'a AnagramIndex,
}

/// Reads and writes the cache artifact at a fixed path
#[derive(Debug, Clone)]
pub struct IndexStore {
    path: PathBuf,
}

impl IndexStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `index`, recording the origin it was built from
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Encode`] or [`CacheError::Write`]. The in-memory index
    /// is untouched either way and an existing artifact is left in place.
    pub fn save(&self, index: &AnagramIndex, origin: &str) -> Result<(), CacheError> {
        let artifact = CacheArtifactRef {
            format_version: FORMAT_VERSION,
            origin,
            index,
        };
        let bytes = bincode::serialize(&artifact).map_err(CacheError::Encode)?;

        self.write_atomically(&bytes).map_err(|source| CacheError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "saved cached index");
        Ok(())
    }

    /// Load the cached index if it was built from `expected_origin`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Missing`], [`CacheError::Unreadable`],
    /// [`CacheError::Malformed`] or [`CacheError::Stale`].
    pub fn load(&self, expected_origin: &str) -> Result<AnagramIndex, CacheError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CacheError::Missing(self.path.clone()));
            }
            Err(source) => {
                return Err(CacheError::Unreadable {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let artifact: CacheArtifact =
            bincode::deserialize(&bytes).map_err(|e| CacheError::Malformed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        if artifact.format_version != FORMAT_VERSION {
            return Err(CacheError::Malformed {
                path: self.path.clone(),
                reason: format!(
                    "format version {} (expected {FORMAT_VERSION})",
                    artifact.format_version
                ),
            });
        }

        if artifact.origin != expected_origin {
            return Err(CacheError::Stale {
                path: self.path.clone(),
                found: artifact.origin,
                expected: expected_origin.to_string(),
            });
        }

        debug!(
            path = %self.path.display(),
            words = artifact.index.word_count(),
            "loaded cached index"
        );
        Ok(artifact.index)
    }

    fn write_atomically(&self, bytes: &[u8]) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Removed on drop unless persisted
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}
