//! Fetch shim: one GET per query, fixed timeout, fixed User-Agent.
//!
//! [`Transport`] is the seam between the engine and the network. The
//! production [`HttpTransport`] wraps a [`reqwest::Client`]; tests inject
//! their own implementation to serve fixtures or simulate failures.

use crate::config::ClientConfig;
use crate::error::SearchError;
use std::time::Duration;
use url::Url;

/// A single GET against the document source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Endpoint path, joined onto the configured base URL.
    pub path: &'static str,
    /// Query-string parameters, in the order they are sent.
    pub params: Vec<(&'static str, String)>,
}

impl FetchRequest {
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            params: Vec::new(),
        }
    }

    /// Append a query-string parameter.
    pub fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    /// Value of the first parameter named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Performs the network retrieval for one query.
///
/// Implementations make exactly one attempt. There is no retry and no
/// backoff; a failed attempt is terminal for that query.
pub trait Transport: Send + Sync {
    /// Fetch the body for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Timeout`] if the request exceeded the timeout,
    /// or [`SearchError::Http`] for connection failures, non-2xx statuses and
    /// unreadable bodies.
    fn get(
        &self,
        request: &FetchRequest,
    ) -> impl std::future::Future<Output = Result<String, SearchError>> + Send;
}

/// Build a [`reqwest::Client`] configured for the document source.
///
/// The client has:
/// - Timeout from config, shared by every domain
/// - The configured fixed User-Agent
/// - No cookie store
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &ClientConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// [`Transport`] backed by a real HTTP client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Build a transport from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for invalid configuration, or
    /// [`SearchError::Http`] if the client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            client: build_client(config)?,
            base_url: config.parsed_base_url()?,
        })
    }

    /// Absolute URL for `request`, without the query string.
    ///
    /// The request path is resolved below the base URL's own path.
    pub fn endpoint(&self, request: &FetchRequest) -> Result<Url, SearchError> {
        self.base_url
            .join(request.path.trim_start_matches('/'))
            .map_err(|e| SearchError::Config(format!("invalid endpoint {}: {e}", request.path)))
    }
}

impl Transport for HttpTransport {
    async fn get(&self, request: &FetchRequest) -> Result<String, SearchError> {
        let url = self.endpoint(request)?;
        tracing::trace!(%url, params = ?request.params, "fetching");

        let response = self
            .client
            .get(url)
            .query(&request.params)
            .header("Accept", "text/html,application/xhtml+xml")
            .send()
            .await
            .map_err(|e| classify(e, "request failed"))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| classify(e, "response read failed"))?;

        tracing::trace!(bytes = body.len(), "response received");
        Ok(body)
    }
}

fn classify(err: reqwest::Error, context: &str) -> SearchError {
    if err.is_timeout() {
        SearchError::Timeout(format!("{context}: {err}"))
    } else {
        SearchError::Http(format!("{context}: {err}"))
    }
}
