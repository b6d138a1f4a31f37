//! HTTP client configuration with sensible defaults.
//!
//! [`ClientConfig`] controls where requests go, how long a single fetch may
//! take, and which User-Agent is sent. It is deserializable so a host can load
//! it from a TOML `[client]` table.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Default document source.
pub const DEFAULT_BASE_URL: &str = "https://www.searchtruth.com";

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Configuration for the fetch/parse shim.
///
/// Use [`Default::default()`] for the production source, or override
/// `base_url` to point at a mock server in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme and host of the document source. Endpoint paths are joined onto it.
    pub base_url: String,
    /// Timeout in seconds applied to every fetch, for every domain.
    pub timeout_seconds: u64,
    /// Fixed User-Agent header.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_seconds: 10,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `user_agent` must not be blank
    /// - `base_url` must be an absolute http(s) URL
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(SearchError::Config("user_agent must not be empty".into()));
        }
        self.parsed_base_url()?;
        Ok(())
    }

    /// Parse `base_url`, rejecting anything that is not http or https.
    ///
    /// The returned path always ends in `/`, so endpoint paths joined onto it
    /// stay under any prefix such as `https://host/st`.
    pub fn parsed_base_url(&self) -> Result<Url, SearchError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| SearchError::Config(format!("invalid base_url: {e}")))?;
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(SearchError::Config(format!(
                    "base_url scheme must be http or https, got {other}"
                )));
            }
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
