//! # searchtruth-engine
//!
//! Resilient extraction of Quran verses, Hadith narrations, Arabic/English
//! dictionary entries and prayer-time city names from searchtruth.com.
//!
//! The source publishes no API, only HTML whose layout has drifted over the
//! years. Every query performs one GET and then hands the page to an ordered
//! chain of extraction strategies. The first strategy that yields qualifying
//! candidates wins; a whole-document text scan runs only if none does.
//!
//! ## Design
//!
//! - One fetch per query, no retries, fixed timeout and User-Agent
//! - Strategies are small pure functions over a parsed document
//! - Results are entity-decoded, whitespace-collapsed and truncated
//! - Failures never escape: callers always get results or a sentinel string
//!
//! ## Security
//!
//! - No credentials, no cookies, no listeners
//! - Queries are logged at trace level; the keyword also appears in the
//!   debug line for a not-found search and in the warn line for a failed one

pub mod config;
pub mod document;
pub mod domains;
pub mod error;
pub mod http;
pub mod normalize;
pub mod pipeline;
pub mod strategy;
pub mod types;

pub use config::ClientConfig;
pub use domains::SearchPlan;
pub use error::{Result, SearchError};
pub use http::{FetchRequest, HttpTransport, Transport};
pub use strategy::{ExtractionStrategy, SelectorStrategy};
pub use types::{
    CityError, CityErrorKind, CityListResult, CityListing, Domain, MatchMode, Query,
    QueryResult, SearchOutcome,
};

use document::RawDocument;
use pipeline::assemble::{assemble, assemble_cities, cities_unavailable};

/// Runs queries against the document source through a [`Transport`].
///
/// The engine holds no state besides its transport, so one instance can
/// serve any number of concurrent queries.
#[derive(Debug, Clone)]
pub struct Engine<T> {
    transport: T,
}

impl Engine<HttpTransport> {
    /// An engine that talks to the real source.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> Engine<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Search verses, narrations or dictionary entries.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidQuery`] if the query is invalid or is a
    /// city listing. Fetch and parse failures are reported through
    /// [`SearchOutcome::Unavailable`], never as `Err`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example() -> searchtruth_engine::Result<()> {
    /// use searchtruth_engine::{ClientConfig, Engine, Query};
    ///
    /// let engine = Engine::from_config(&ClientConfig::default())?;
    /// let outcome = engine.search(&Query::verses("mercy").with_chapter("7")).await?;
    /// for line in outcome.lines() {
    ///     println!("{line}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &Query) -> Result<SearchOutcome> {
        let plan = domains::plan_search(query)?;
        Ok(self.execute(query, &plan).await)
    }

    /// Fetch and extract with a caller-supplied plan.
    ///
    /// `query` supplies the domain and keyword for sentinels and logging; the
    /// request, strategies and thresholds all come from `plan`.
    pub async fn execute(&self, query: &Query, plan: &SearchPlan) -> SearchOutcome {
        let keyword = query.keyword_str();
        tracing::trace!(domain = %query.domain, keyword, "searching");

        let extracted = self
            .transport
            .get(&plan.request)
            .await
            .and_then(|body| {
                let document = RawDocument::parse(&body)?;
                pipeline::extract(&document, &plan.extraction)
            });

        let outcome = assemble(query.domain, keyword, plan.extraction.max_results, extracted);
        tracing::debug!(
            domain = %query.domain,
            results = outcome.lines().len(),
            sentinel = outcome.is_sentinel(),
            "search finished"
        );
        outcome
    }

    /// List prayer-time cities for the query's country.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidQuery`] if the query is invalid or not a
    /// city listing. Fetch and parse failures become a [`CityError`] with
    /// [`CityErrorKind::Unavailable`].
    pub async fn prayer_cities(&self, query: &Query) -> Result<CityListResult> {
        query.validate()?;
        if query.domain != Domain::Cities {
            return Err(SearchError::InvalidQuery(format!(
                "{} queries are run with search",
                query.domain
            )));
        }
        let country = query.country().unwrap_or_default();
        tracing::trace!(country, "listing cities");

        let request = domains::cities::request(query);
        let links = self.transport.get(&request).await.and_then(|body| {
            let document = RawDocument::parse(&body)?;
            domains::cities::city_link_texts(&document)
        });

        Ok(match links {
            Ok(links) => assemble_cities(country, links, query.max_results),
            Err(err) => cities_unavailable(country, &err),
        })
    }

    /// Run any query, dispatching on its domain.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidQuery`] if the query is invalid.
    pub async fn run(&self, query: &Query) -> Result<QueryResult> {
        match query.domain {
            Domain::Cities => self.prayer_cities(query).await.map(QueryResult::Cities),
            _ => self.search(query).await.map(QueryResult::Search),
        }
    }
}

/// Run one query against the source described by `config`.
///
/// Convenience wrapper that builds a throwaway [`Engine`].
///
/// # Errors
///
/// Returns [`SearchError::Config`] for invalid configuration and
/// [`SearchError::InvalidQuery`] for an invalid query.
pub async fn run_query(query: &Query, config: &ClientConfig) -> Result<QueryResult> {
    Engine::from_config(config)?.run(query).await
}
