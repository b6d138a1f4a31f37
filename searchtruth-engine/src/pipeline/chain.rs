//! Ordered strategy chain with first-success short-circuit.

use super::CandidateFilter;
use crate::document::RawDocument;
use crate::error::Result;
use crate::strategy::ExtractionStrategy;
use crate::types::Candidate;

/// Try each strategy in order and return the qualifying candidates of the
/// first one that yields any.
///
/// Results are never merged across strategies, and strategies after the
/// winning one are not invoked.
///
/// # Errors
///
/// Returns the first error raised by a strategy.
pub fn run_chain(
    document: &RawDocument,
    strategies: &[Box<dyn ExtractionStrategy>],
    filter: &CandidateFilter,
    max_results: usize,
) -> Result<Vec<Candidate>> {
    for strategy in strategies {
        let qualifying: Vec<Candidate> = strategy
            .candidates(document)?
            .into_iter()
            .filter(|candidate| filter.qualifies(&candidate.raw_text))
            .take(max_results)
            .collect();

        if !qualifying.is_empty() {
            tracing::debug!(
                strategy = strategy.name(),
                count = qualifying.len(),
                "strategy matched"
            );
            return Ok(qualifying);
        }
        tracing::trace!(strategy = strategy.name(), "strategy yielded nothing");
    }

    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::SelectorStrategy;

    const PAGE: &str = r#"<html><body>
        <table width="100%"><tr><td>Layout table mentioning patience once, long enough</td></tr></table>
        <div class="search_result">Be patient: indeed the promise of Allah is true</div>
        <div class="search_result">Seek help through patience and prayer</div>
        <div class="search_result">short patience</div>
        <div class="search_result">Nothing about the keyword in this one at all</div>
        <div class="verse_div">Verily with hardship comes ease, so have patience</div>
    </body></html>"#;

    fn doc() -> RawDocument {
        RawDocument::parse(PAGE).expect("parse")
    }

    fn strategies(selectors: &[&'static str]) -> Vec<Box<dyn ExtractionStrategy>> {
        selectors
            .iter()
            .map(|&s| Box::new(SelectorStrategy::new(s)) as Box<dyn ExtractionStrategy>)
            .collect()
    }

    #[test]
    fn first_matching_strategy_wins() {
        let filter = CandidateFilter::new(20).with_keyword("patience");
        let results = run_chain(
            &doc(),
            &strategies(&[".missing", ".search_result", ".verse_div"]),
            &filter,
            10,
        )
        .expect("chain");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].source_strategy, ".search_result");
        assert_eq!(results[0].raw_text, "Seek help through patience and prayer");
    }

    #[test]
    fn does_not_merge_across_strategies() {
        let filter = CandidateFilter::new(20).with_keyword("patien");
        let results = run_chain(
            &doc(),
            &strategies(&[".search_result", ".verse_div"]),
            &filter,
            10,
        )
        .expect("chain");
        assert!(results.iter().all(|c| c.source_strategy == ".search_result"));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn caps_qualifying_candidates() {
        let filter = CandidateFilter::new(20).with_keyword("patien");
        let results = run_chain(&doc(), &strategies(&[".search_result"]), &filter, 1)
            .expect("chain");
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].raw_text,
            "Be patient: indeed the promise of Allah is true"
        );
    }

    #[test]
    fn falls_through_to_later_strategy() {
        let filter = CandidateFilter::new(20).with_keyword("ease");
        let results = run_chain(
            &doc(),
            &strategies(&[".search_result", ".verse_div"]),
            &filter,
            1,
        )
        .expect("chain");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].source_strategy, ".verse_div");
    }

    #[test]
    fn nothing_qualifies_yields_empty() {
        let filter = CandidateFilter::new(20).with_keyword("zzzznotfound");
        let results = run_chain(
            &doc(),
            &strategies(&["table[width=\"100%\"]", ".search_result", ".verse_div"]),
            &filter,
            5,
        )
        .expect("chain");
        assert!(results.is_empty());
    }

    #[test]
    fn broken_selector_aborts_chain() {
        let filter = CandidateFilter::new(20).with_keyword("zzzznotfound");
        let result = run_chain(&doc(), &strategies(&[".missing", "div[["]), &filter, 5);
        assert!(result.is_err());
    }
}
