//! Word sources and the index loading chain
//!
//! A [`WordSource`] produces raw word list bytes. An [`IndexSource`] produces a
//! complete [`AnagramIndex`](crate::index::AnagramIndex), either from the cache or
//! by building from a word source; [`Fallback`] composes the two.

mod chain;
mod file;
mod remote;

pub use chain::{BuiltSource, CachedSource, Fallback, IndexLoader, IndexSource, LoadError};
pub use file::FileSource;
pub use remote::{DEFAULT_TIMEOUT_SECS, DEFAULT_WORDLIST_URL, RemoteSource};

use std::io;
use thiserror::Error;

/// Failure to obtain raw word list bytes
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("{url} returned HTTP {status} {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },
    #[error("failed to read word list from {origin}: {source}")]
    Io { origin: String, source: io::Error },
}

/// Provider of raw, newline-delimited word list bytes
pub trait WordSource {
    /// Stable description of where the words come from
    ///
    /// Recorded in the cache artifact so an index built from one source is never
    /// served for another.
    fn origin(&self) -> String;

    /// Fetch the whole word list
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the words cannot be obtained.
    fn fetch(&self) -> Result<Vec<u8>, SourceError>;
}

/// Enum wrapper for all word sources
///
/// Allows runtime selection of the source while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum SourceType {
    Remote(RemoteSource),
    File(FileSource),
}

impl WordSource for SourceType {
    fn origin(&self) -> String {
        match self {
            Self::Remote(s) => s.origin(),
            Self::File(s) => s.origin(),
        }
    }

    fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        match self {
            Self::Remote(s) => s.fetch(),
            Self::File(s) => s.fetch(),
        }
    }
}

impl<W: WordSource + ?Sized> WordSource for &W {
    fn origin(&self) -> String {
        (**self).origin()
    }

    fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        (**self).fetch()
    }
}
