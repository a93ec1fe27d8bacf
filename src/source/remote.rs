//! HTTP word list source

use super::{SourceError, WordSource};
use std::io::Read;
use std::time::Duration;
use tracing::info;

/// SCOWL word list generator on app.aspell.net (US spelling, size 60)
pub const DEFAULT_WORDLIST_URL: &str = "http://app.aspell.net/create?max_size=60&spelling=US&max_variant=2&diacritic=strip&special=hacker&special=roman-numerals&download=wordlist&encoding=utf-8&format=inline";

/// Default total request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Fetches a word list with a blocking HTTP GET
#[derive(Debug, Clone)]
pub struct RemoteSource {
    url: String,
    agent: ureq::Agent,
}

impl RemoteSource {
    /// Create a source for `url` with the default timeouts
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a source whose requests give up after `timeout`
    #[must_use]
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        let connect_timeout = timeout.min(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));
        Self {
            url: url.into(),
            agent: ureq::AgentBuilder::new()
                .timeout(timeout)
                .timeout_connect(connect_timeout)
                .build(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl WordSource for RemoteSource {
    fn origin(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        info!(url = %self.url, "downloading word list");

        let response = match self.agent.get(&self.url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                return Err(SourceError::Status {
                    url: self.url.clone(),
                    status,
                    reason: response.status_text().to_string(),
                });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(SourceError::Transport {
                    url: self.url.clone(),
                    message: transport.to_string(),
                });
            }
        };

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|source| SourceError::Io {
                origin: self.url.clone(),
                source,
            })?;

        info!(bytes = body.len(), "downloaded word list");
        Ok(body)
    }
}
