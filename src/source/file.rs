//! Local word list source

use super::{SourceError, WordSource};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads a newline-delimited word list from disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileSource {
    fn origin(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        info!(path = %self.path.display(), "reading word list");
        fs::read(&self.path).map_err(|source| SourceError::Io {
            origin: self.origin(),
            source,
        })
    }
}
