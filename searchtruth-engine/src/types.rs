//! Core types: query domains, queries, candidates and assembled outcomes.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Scope filter key for the Quran chapter number.
pub const CHAPTER_FILTER: &str = "chapter";
/// Scope filter key for the dictionary match mode.
pub const WORD_OPTION_FILTER: &str = "word_option";
/// Scope filter key for the prayer-times country.
pub const COUNTRY_FILTER: &str = "country";

/// Default Quran translator (Yusuf Ali).
pub const DEFAULT_TRANSLATOR: &str = "2";
/// Default Hadith collection (Sahih Bukhari).
pub const DEFAULT_COLLECTION: &str = "1";
/// Hard cap on the number of city names reported for one country.
pub const MAX_CITIES: usize = 20;

/// The four kinds of record the engine knows how to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Quran verses.
    Verses,
    /// Hadith narrations.
    Narrations,
    /// Arabic/English dictionary entries.
    DictionaryEntries,
    /// Prayer-times city listing for a country.
    Cities,
}

impl Domain {
    /// Returns the human-readable name of this domain.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Verses => "verses",
            Self::Narrations => "narrations",
            Self::DictionaryEntries => "dictionary",
            Self::Cities => "cities",
        }
    }

    /// Default result cap when the caller does not choose one.
    pub fn default_max_results(&self) -> usize {
        match self {
            Self::Verses => 5,
            Self::Narrations => 5,
            Self::DictionaryEntries => 8,
            Self::Cities => MAX_CITIES,
        }
    }

    /// Whether queries in this domain carry a keyword.
    pub fn requires_keyword(&self) -> bool {
        !matches!(self, Self::Cities)
    }

    /// Returns all domain variants.
    pub fn all() -> &'static [Domain] {
        &[
            Self::Verses,
            Self::Narrations,
            Self::DictionaryEntries,
            Self::Cities,
        ]
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dictionary lookup mode, sent as `word_option`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Whole-word match (`word_option=1`).
    #[default]
    Exact,
    /// Sub-word match (`word_option=2`).
    Partial,
}

impl MatchMode {
    /// The value the source expects for `word_option`.
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Exact => "1",
            Self::Partial => "2",
        }
    }

    fn from_param(value: &str) -> Self {
        if value == "2" {
            Self::Partial
        } else {
            Self::Exact
        }
    }
}

/// A caller's semantic request.
///
/// Build one with [`Query::verses`], [`Query::narrations`],
/// [`Query::dictionary`] or [`Query::cities`] and refine it with the
/// `with_*` methods. [`Query::validate`] checks the per-domain invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Which record kind to search.
    pub domain: Domain,
    /// Search keyword; required for every domain except [`Domain::Cities`].
    pub keyword: Option<String>,
    /// Extra scope such as `chapter`, `word_option` or `country`.
    pub scope_filters: BTreeMap<String, String>,
    /// Quran translator or Hadith collection identifier.
    pub translator_or_collection: Option<String>,
    /// Upper bound on the number of results returned.
    pub max_results: usize,
}

impl Query {
    fn keyword_query(domain: Domain, keyword: impl Into<String>) -> Self {
        Self {
            domain,
            keyword: Some(keyword.into()),
            scope_filters: BTreeMap::new(),
            translator_or_collection: None,
            max_results: domain.default_max_results(),
        }
    }

    /// A Quran verse search using the default translator.
    pub fn verses(keyword: impl Into<String>) -> Self {
        Self::keyword_query(Domain::Verses, keyword)
            .with_translator(DEFAULT_TRANSLATOR)
    }

    /// A Hadith search in the default collection.
    pub fn narrations(keyword: impl Into<String>) -> Self {
        Self::keyword_query(Domain::Narrations, keyword)
            .with_collection(DEFAULT_COLLECTION)
    }

    /// A dictionary lookup in exact-match mode.
    pub fn dictionary(word: impl Into<String>) -> Self {
        Self::keyword_query(Domain::DictionaryEntries, word).with_match_mode(MatchMode::Exact)
    }

    /// A prayer-times city listing for `country`.
    pub fn cities(country: impl Into<String>) -> Self {
        let mut scope_filters = BTreeMap::new();
        scope_filters.insert(COUNTRY_FILTER.to_owned(), country.into());
        Self {
            domain: Domain::Cities,
            keyword: None,
            scope_filters,
            translator_or_collection: None,
            max_results: MAX_CITIES,
        }
    }

    /// Restrict a verse search to one chapter. An empty chapter clears the scope.
    pub fn with_chapter(mut self, chapter: impl Into<String>) -> Self {
        let chapter = chapter.into();
        if chapter.trim().is_empty() {
            self.scope_filters.remove(CHAPTER_FILTER);
        } else {
            self.scope_filters
                .insert(CHAPTER_FILTER.to_owned(), chapter.trim().to_owned());
        }
        self
    }

    /// Choose the Quran translator.
    pub fn with_translator(mut self, translator: impl Into<String>) -> Self {
        self.translator_or_collection = Some(translator.into());
        self
    }

    /// Choose the Hadith collection.
    pub fn with_collection(self, collection: impl Into<String>) -> Self {
        self.with_translator(collection)
    }

    /// Choose exact or partial dictionary matching.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.scope_filters
            .insert(WORD_OPTION_FILTER.to_owned(), mode.as_param().to_owned());
        self
    }

    /// Override the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// The keyword, or an empty string for keyword-less domains.
    pub fn keyword_str(&self) -> &str {
        self.keyword.as_deref().unwrap_or_default()
    }

    /// The chapter scope, if any.
    pub fn chapter(&self) -> Option<&str> {
        self.scope_filters.get(CHAPTER_FILTER).map(String::as_str)
    }

    /// The country scope, if any.
    pub fn country(&self) -> Option<&str> {
        self.scope_filters.get(COUNTRY_FILTER).map(String::as_str)
    }

    /// The dictionary match mode, defaulting to exact.
    pub fn match_mode(&self) -> MatchMode {
        self.scope_filters
            .get(WORD_OPTION_FILTER)
            .map(|v| MatchMode::from_param(v))
            .unwrap_or_default()
    }

    /// Validates the per-domain invariants.
    ///
    /// Checks:
    /// - `max_results` must be greater than 0
    /// - keyword domains need a non-blank keyword
    /// - [`Domain::Cities`] needs a non-blank `country` filter and no keyword
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::InvalidQuery(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.domain.requires_keyword() {
            if self.keyword_str().trim().is_empty() {
                return Err(SearchError::InvalidQuery(format!(
                    "{} search requires a non-empty keyword",
                    self.domain
                )));
            }
        } else {
            if self.keyword.is_some() {
                return Err(SearchError::InvalidQuery(
                    "city listing does not take a keyword".into(),
                ));
            }
            if self.country().map_or(true, |c| c.trim().is_empty()) {
                return Err(SearchError::InvalidQuery(
                    "city listing requires a non-empty country".into(),
                ));
            }
        }
        Ok(())
    }
}

/// A text block pulled out of the markup before filtering and normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Flattened text of the node, line or paragraph.
    pub raw_text: String,
    /// Name of the strategy that produced it.
    pub source_strategy: String,
}

impl Candidate {
    pub fn new(raw_text: impl Into<String>, source_strategy: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            source_strategy: source_strategy.into(),
        }
    }
}

/// The assembled answer to a text-block search.
///
/// `Found` always holds between 1 and `max_results` normalized strings.
/// The two sentinel variants carry exactly one display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Extracted results in document order.
    Found(Vec<String>),
    /// Fetch succeeded but nothing qualified.
    NotFound(String),
    /// Fetch or parse failed.
    Unavailable(String),
}

impl SearchOutcome {
    /// The caller-facing sequence: the results, or the single sentinel.
    pub fn lines(&self) -> &[String] {
        match self {
            Self::Found(results) => results,
            Self::NotFound(sentinel) | Self::Unavailable(sentinel) => {
                std::slice::from_ref(sentinel)
            }
        }
    }

    /// Consume the outcome into its caller-facing sequence.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Self::Found(results) => results,
            Self::NotFound(sentinel) | Self::Unavailable(sentinel) => vec![sentinel],
        }
    }

    /// Whether this outcome is a sentinel rather than real content.
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Found(_))
    }
}

/// Cities found for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityListing {
    /// Country as the caller spelled it.
    pub country: String,
    /// Unique city names in first-seen order, at most [`MAX_CITIES`].
    pub available_cities: Vec<String>,
    /// Number of unique city names found, before the cap.
    pub total_cities: usize,
}

/// Why a city listing could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CityErrorKind {
    /// The page loaded but held no city links.
    NoCities,
    /// Fetch or parse failed.
    Unavailable,
}

/// Error object returned in place of a [`CityListing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityError {
    pub kind: CityErrorKind,
    #[serde(rename = "error")]
    pub message: String,
    pub suggestion: String,
}

/// Outcome of a city listing query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CityListResult {
    Listing(CityListing),
    Error(CityError),
}

/// Outcome of any query, as returned by [`crate::Engine::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryResult {
    Search(SearchOutcome),
    Cities(CityListResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_display() {
        assert_eq!(Domain::Verses.to_string(), "verses");
        assert_eq!(Domain::Narrations.to_string(), "narrations");
        assert_eq!(Domain::DictionaryEntries.to_string(), "dictionary");
        assert_eq!(Domain::Cities.to_string(), "cities");
    }

    #[test]
    fn domain_default_caps() {
        assert_eq!(Domain::Verses.default_max_results(), 5);
        assert_eq!(Domain::Narrations.default_max_results(), 5);
        assert_eq!(Domain::DictionaryEntries.default_max_results(), 8);
        assert_eq!(Domain::Cities.default_max_results(), 20);
    }

    #[test]
    fn domain_all_has_four_variants() {
        assert_eq!(Domain::all().len(), 4);
        assert!(!Domain::Cities.requires_keyword());
        assert!(Domain::Verses.requires_keyword());
    }

    #[test]
    fn verse_query_defaults() {
        let query = Query::verses("mercy");
        assert_eq!(query.domain, Domain::Verses);
        assert_eq!(query.keyword_str(), "mercy");
        assert_eq!(query.translator_or_collection.as_deref(), Some("2"));
        assert_eq!(query.chapter(), None);
        assert_eq!(query.max_results, 5);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn chapter_scope_set_and_cleared() {
        let query = Query::verses("patience").with_chapter("2");
        assert_eq!(query.chapter(), Some("2"));
        let query = query.with_chapter("");
        assert_eq!(query.chapter(), None);
    }

    #[test]
    fn narration_query_uses_default_collection() {
        let query = Query::narrations("fasting");
        assert_eq!(query.translator_or_collection.as_deref(), Some("1"));
        let query = query.with_collection("3");
        assert_eq!(query.translator_or_collection.as_deref(), Some("3"));
    }

    #[test]
    fn dictionary_match_mode_round_trips_through_filters() {
        let query = Query::dictionary("book");
        assert_eq!(query.match_mode(), MatchMode::Exact);
        let query = query.with_match_mode(MatchMode::Partial);
        assert_eq!(query.match_mode(), MatchMode::Partial);
        assert_eq!(query.scope_filters.get("word_option").map(String::as_str), Some("2"));
    }

    #[test]
    fn empty_keyword_rejected() {
        let err = Query::verses("   ").validate().unwrap_err();
        assert!(err.to_string().contains("keyword"));
    }

    #[test]
    fn zero_max_results_rejected() {
        let err = Query::narrations("prayer")
            .with_max_results(0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("max_results"));
    }

    #[test]
    fn city_query_requires_country() {
        assert!(Query::cities("Egypt").validate().is_ok());
        let err = Query::cities(" ").validate().unwrap_err();
        assert!(err.to_string().contains("country"));
    }

    #[test]
    fn city_query_rejects_keyword() {
        let mut query = Query::cities("Egypt");
        query.keyword = Some("Cairo".into());
        assert!(query.validate().is_err());
    }

    #[test]
    fn outcome_lines_hold_single_sentinel() {
        let outcome = SearchOutcome::NotFound("No hadith found containing 'x'".into());
        assert_eq!(outcome.lines().len(), 1);
        assert!(outcome.is_sentinel());

        let outcome = SearchOutcome::Found(vec!["a".into(), "b".into()]);
        assert_eq!(outcome.lines().len(), 2);
        assert!(!outcome.is_sentinel());
        assert_eq!(outcome.into_lines(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn city_error_serializes_with_error_key() {
        let result = CityListResult::Error(CityError {
            kind: CityErrorKind::Unavailable,
            message: "Unable to get cities for Egypt".into(),
            suggestion: "Please try again later.".into(),
        });
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["error"], "Unable to get cities for Egypt");
        assert_eq!(json["kind"], "unavailable");
    }

    #[test]
    fn city_listing_serializes_flat() {
        let result = CityListResult::Listing(CityListing {
            country: "Egypt".into(),
            available_cities: vec!["Cairo".into()],
            total_cities: 1,
        });
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["country"], "Egypt");
        assert_eq!(json["total_cities"], 1);
    }
}
