//! Domain query builders.
//!
//! Each module maps a [`Query`] for its domain onto the endpoint and
//! parameters to fetch, plus the strategies and thresholds that suit that
//! domain's markup. City listings are not text-block searches and have their
//! own extraction in [`cities`].

pub mod cities;
pub mod dictionary;
pub mod narrations;
pub mod verses;

use crate::error::{Result, SearchError};
use crate::http::FetchRequest;
use crate::pipeline::ExtractionPlan;
use crate::strategy::{ExtractionStrategy, SelectorStrategy};
use crate::types::{Domain, Query};

/// What to fetch and how to read it, for one text-block query.
#[derive(Debug)]
pub struct SearchPlan {
    pub request: FetchRequest,
    pub extraction: ExtractionPlan,
}

/// Build the fetch request and extraction plan for `query`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidQuery`] if the query fails validation or
/// belongs to [`Domain::Cities`], which has no text-block plan.
pub fn plan_search(query: &Query) -> Result<SearchPlan> {
    query.validate()?;
    let (request, extraction) = match query.domain {
        Domain::Verses => (verses::request(query), verses::plan(query)),
        Domain::Narrations => (narrations::request(query), narrations::plan(query)),
        Domain::DictionaryEntries => (dictionary::request(query), dictionary::plan(query)),
        Domain::Cities => {
            return Err(SearchError::InvalidQuery(
                "city listings are fetched with prayer_cities".into(),
            ))
        }
    };
    Ok(SearchPlan {
        request,
        extraction,
    })
}

/// Box a static strategy table for an [`ExtractionPlan`].
fn boxed(strategies: &[SelectorStrategy]) -> Vec<Box<dyn ExtractionStrategy>> {
    strategies
        .iter()
        .cloned()
        .map(|s| Box::new(s) as Box<dyn ExtractionStrategy>)
        .collect()
}
