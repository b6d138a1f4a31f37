//! Quran verse search.
//!
//! Results have appeared as margin-styled `div`s, full-width tables, and
//! classed blocks over the source's lifetime. Unrecognised pages fall back
//! to a line-by-line scan, since one verse usually renders on one line.

use super::boxed;
use crate::http::FetchRequest;
use crate::pipeline::{CandidateFilter, ExtractionPlan, FallbackMode, FallbackScanner};
use crate::strategy::SelectorStrategy;
use crate::types::{Query, DEFAULT_TRANSLATOR};

pub const PATH: &str = "/search.php";
pub const MIN_CANDIDATE_LEN: usize = 20;
pub const TRUNCATE_TO: usize = 500;

/// Known verse layouts, newest first.
pub const STRATEGIES: &[SelectorStrategy] = &[
    SelectorStrategy::new(r#"div[style*="margin"]"#),
    SelectorStrategy::new(r#"table[width="100%"]"#),
    SelectorStrategy::new(".search_result"),
    SelectorStrategy::new(".verse_div"),
];

/// `keyword`, `chapter` (empty when unscoped) and `translator`.
pub fn request(query: &Query) -> FetchRequest {
    FetchRequest::new(PATH)
        .param("keyword", query.keyword_str())
        .param("chapter", query.chapter().unwrap_or_default())
        .param(
            "translator",
            query
                .translator_or_collection
                .as_deref()
                .unwrap_or(DEFAULT_TRANSLATOR),
        )
}

pub fn plan(query: &Query) -> ExtractionPlan {
    ExtractionPlan {
        strategies: boxed(STRATEGIES),
        fallback: Some(Box::new(FallbackScanner::new(FallbackMode::Lines))),
        filter: CandidateFilter::new(MIN_CANDIDATE_LEN).with_keyword(query.keyword_str()),
        truncate_to: TRUNCATE_TO,
        max_results: query.max_results,
    }
}
