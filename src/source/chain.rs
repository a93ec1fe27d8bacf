//! Index loading chain
//!
//! Cache first, then fetch-and-build. Only when every link fails is the run
//! considered fatal.

use super::{FileSource, RemoteSource, SourceError, SourceType, WordSource};
use crate::config::Config;
use crate::index::{AnagramIndex, BuildError, CacheError, IndexBuilder, IndexStore};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Failure to produce an index
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Build(#[from] BuildError),
    /// Neither the cache nor the word source produced an index
    #[error("word index unavailable: {primary}; {fallback}")]
    SourceUnavailable {
        primary: Box<LoadError>,
        fallback: Box<LoadError>,
    },
}

/// Something that can produce a complete anagram index
pub trait IndexSource {
    /// Short label used in log messages
    fn describe(&self) -> String;

    /// Produce the index
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`]; no partially built index is ever returned.
    fn load(&self) -> Result<AnagramIndex, LoadError>;
}

/// Index read back from the cache artifact
pub struct CachedSource<'a> {
    store: &'a IndexStore,
    origin: String,
}

impl<'a> CachedSource<'a> {
    /// Accept only artifacts built from `origin`
    #[must_use]
    pub fn new(store: &'a IndexStore, origin: impl Into<String>) -> Self {
        Self {
            store,
            origin: origin.into(),
        }
    }
}

impl IndexSource for CachedSource<'_> {
    fn describe(&self) -> String {
        format!("cache {}", self.store.path().display())
    }

    fn load(&self) -> Result<AnagramIndex, LoadError> {
        Ok(self.store.load(&self.origin)?)
    }
}

/// Index built from a word source, then written back to the cache
pub struct BuiltSource<'a, W: WordSource> {
    source: W,
    builder: &'a IndexBuilder,
    store: Option<&'a IndexStore>,
}

impl<'a, W: WordSource> BuiltSource<'a, W> {
    #[must_use]
    pub const fn new(source: W, builder: &'a IndexBuilder, store: Option<&'a IndexStore>) -> Self {
        Self {
            source,
            builder,
            store,
        }
    }

    /// Origin recorded in the cache: the word source plus the builder settings
    #[must_use]
    pub fn origin(&self) -> String {
        cache_origin(&self.source, self.builder)
    }

    /// Fetch and build, then try to cache the result
    ///
    /// The flag is `true` only if the index was written to the store.
    ///
    /// # Errors
    ///
    /// Returns the word source or build error. Cache write failures are
    /// logged, not returned.
    pub fn build_and_cache(&self) -> Result<(AnagramIndex, bool), LoadError> {
        let raw = self.source.fetch()?;
        let index = self.builder.build(&raw)?;
        info!(
            words = index.word_count(),
            classes = index.len(),
            "built anagram index"
        );

        let Some(store) = self.store else {
            return Ok((index, false));
        };
        match store.save(&index, &self.origin()) {
            Ok(()) => Ok((index, true)),
            Err(e) => {
                warn!(error = %e, "could not cache anagram index");
                Ok((index, false))
            }
        }
    }
}

impl<W: WordSource> IndexSource for BuiltSource<'_, W> {
    fn describe(&self) -> String {
        self.source.origin()
    }

    fn load(&self) -> Result<AnagramIndex, LoadError> {
        self.build_and_cache().map(|(index, _)| index)
    }
}

fn cache_origin<W: WordSource>(source: &W, builder: &IndexBuilder) -> String {
    format!("{}#{}", source.origin(), builder.fingerprint())
}

/// Try `primary`, then `fallback` if it fails
pub struct Fallback<A, B> {
    primary: A,
    fallback: B,
}

impl<A: IndexSource, B: IndexSource> Fallback<A, B> {
    #[must_use]
    pub const fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: IndexSource, B: IndexSource> IndexSource for Fallback<A, B> {
    fn describe(&self) -> String {
        format!("{} or {}", self.primary.describe(), self.fallback.describe())
    }

    fn load(&self) -> Result<AnagramIndex, LoadError> {
        let primary = match self.primary.load() {
            Ok(index) => return Ok(index),
            Err(e) => e,
        };

        match &primary {
            LoadError::Cache(CacheError::Missing(_)) => {
                debug!(source = %self.primary.describe(), "cache miss");
            }
            other => info!(source = %self.primary.describe(), error = %other, "falling back"),
        }

        self.fallback
            .load()
            .map_err(|fallback| LoadError::SourceUnavailable {
                primary: Box::new(primary),
                fallback: Box::new(fallback),
            })
    }
}

/// The configured loading chain for one run
#[derive(Debug, Clone)]
pub struct IndexLoader {
    source: SourceType,
    builder: IndexBuilder,
    store: Option<IndexStore>,
}

impl IndexLoader {
    #[must_use]
    pub const fn new(source: SourceType, builder: IndexBuilder, store: Option<IndexStore>) -> Self {
        Self {
            source,
            builder,
            store,
        }
    }

    /// Wire the source, builder and store described by `config`
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let source = match &config.wordlist {
            Some(path) => SourceType::File(FileSource::new(path)),
            None => SourceType::Remote(RemoteSource::with_timeout(&config.url, config.timeout)),
        };

        let mut builder = IndexBuilder::new().parallel(config.parallel);
        if let Some(sentinel) = &config.header_sentinel {
            builder = builder.header_sentinel(sentinel.clone());
        }

        Self::new(source, builder, config.cache_path.clone().map(IndexStore::new))
    }

    #[must_use]
    pub const fn store(&self) -> Option<&IndexStore> {
        self.store.as_ref()
    }

    /// Origin the cache artifact must carry to be reused by this loader
    #[must_use]
    pub fn origin(&self) -> String {
        cache_origin(&self.source, &self.builder)
    }

    /// Load from the cache, falling back to fetching and building
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::SourceUnavailable`] when both the cache and the word
    /// source fail, or the word source error when caching is disabled.
    pub fn load(&self) -> Result<AnagramIndex, LoadError> {
        let built = BuiltSource::new(&self.source, &self.builder, self.store.as_ref());

        match &self.store {
            Some(store) => Fallback::new(CachedSource::new(store, self.origin()), built).load(),
            None => built.load(),
        }
    }

    /// Fetch and build, ignoring any cached artifact, then re-cache
    ///
    /// # Errors
    ///
    /// Returns the word source or build error.
    pub fn refresh(&self) -> Result<AnagramIndex, LoadError> {
        self.refresh_cached().map(|(index, _)| index)
    }

    /// Like [`refresh`](Self::refresh), also reporting whether the new index
    /// was cached
    ///
    /// A failed fetch or build leaves any existing artifact untouched.
    ///
    /// # Errors
    ///
    /// Returns the word source or build error.
    pub fn refresh_cached(&self) -> Result<(AnagramIndex, bool), LoadError> {
        BuiltSource::new(&self.source, &self.builder, self.store.as_ref()).build_and_cache()
    }
}
