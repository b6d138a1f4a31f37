//! Hadith narration search.
//!
//! Narrations run to several lines, so the whole-document fallback works on
//! blank-line paragraphs instead of single lines.

use super::boxed;
use crate::http::FetchRequest;
use crate::pipeline::{CandidateFilter, ExtractionPlan, FallbackMode, FallbackScanner};
use crate::strategy::SelectorStrategy;
use crate::types::{Query, DEFAULT_COLLECTION};

pub const PATH: &str = "/searchHadith.php";
pub const MIN_CANDIDATE_LEN: usize = 30;
pub const TRUNCATE_TO: usize = 600;

pub const STRATEGIES: &[SelectorStrategy] = &[
    SelectorStrategy::new(r#"div[style*="margin"]"#),
    SelectorStrategy::new(r#"table[border="0"]"#),
    SelectorStrategy::new(".hadith_result"),
    SelectorStrategy::new("tr[bgcolor]"),
];

/// The collection id travels in the `translator` parameter.
pub fn request(query: &Query) -> FetchRequest {
    FetchRequest::new(PATH)
        .param("keyword", query.keyword_str())
        .param(
            "translator",
            query
                .translator_or_collection
                .as_deref()
                .unwrap_or(DEFAULT_COLLECTION),
        )
}

pub fn plan(query: &Query) -> ExtractionPlan {
    ExtractionPlan {
        strategies: boxed(STRATEGIES),
        fallback: Some(Box::new(FallbackScanner::new(FallbackMode::Paragraphs))),
        filter: CandidateFilter::new(MIN_CANDIDATE_LEN).with_keyword(query.keyword_str()),
        truncate_to: TRUNCATE_TO,
        max_results: query.max_results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RawDocument;
    use crate::pipeline::extract;

    const FIXTURE: &str = include_str!("../../test-data/narrations.html");
    const FIXTURE_NO_RESULTS: &str = include_str!("../../test-data/no_results.html");

    fn run(html: &str, query: &Query) -> Vec<String> {
        let doc = RawDocument::parse(html).expect("fixture should parse");
        extract(&doc, &plan(query)).expect("extract")
    }

    #[test]
    fn request_sends_collection_as_translator() {
        let request = request(&Query::narrations("fasting").with_collection("2"));
        assert_eq!(request.path, "/searchHadith.php");
        assert_eq!(request.get("keyword"), Some("fasting"));
        assert_eq!(request.get("translator"), Some("2"));
        assert_eq!(request.get("chapter"), None);
    }

    #[test]
    fn plan_uses_narration_thresholds() {
        let plan = plan(&Query::narrations("fasting"));
        assert_eq!(plan.filter.min_len(), 30);
        assert_eq!(plan.truncate_to, 600);
        assert_eq!(
            plan.fallback.as_ref().map(|f| f.name()),
            Some("fallback:paragraphs")
        );
    }

    #[test]
    fn fixture_extracts_bordered_tables() {
        let results = run(FIXTURE, &Query::narrations("fasting"));
        assert_eq!(results.len(), 3);
        assert!(results[0].starts_with("Narrated Abu Huraira"));
        for r in &results {
            assert!(r.to_lowercase().contains("fasting"));
            assert!(r.chars().count() <= 600);
        }
    }

    #[test]
    fn fixture_filters_by_keyword() {
        let results = run(FIXTURE, &Query::narrations("charity"));
        assert_eq!(results.len(), 1);
        assert!(results[0].contains("Narrated Abu Musa"));
    }

    #[test]
    fn no_results_page_yields_nothing() {
        let results = run(FIXTURE_NO_RESULTS, &Query::narrations("zzzznotfound"));
        assert!(results.is_empty());
    }
}
