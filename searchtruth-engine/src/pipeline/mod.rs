//! Extraction pipeline: strategy chain, fallback scan, normalization, assembly.
//!
//! A query's [`ExtractionPlan`] lists the structural strategies to try in
//! priority order, an optional whole-document fallback, and the thresholds
//! that decide which candidates qualify. [`extract`] runs the plan against
//! one document and returns normalized strings in extraction order.

pub mod assemble;
pub mod chain;
pub mod fallback;

use crate::document::RawDocument;
use crate::error::Result;
use crate::normalize::normalize;
use crate::strategy::ExtractionStrategy;

pub use chain::run_chain;
pub use fallback::{run_fallback, FallbackMode, FallbackScanner};

/// Decides whether a raw candidate is worth keeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFilter {
    min_len: usize,
    keyword: Option<String>,
}

impl CandidateFilter {
    /// Keep candidates strictly longer than `min_len` characters.
    pub fn new(min_len: usize) -> Self {
        Self {
            min_len,
            keyword: None,
        }
    }

    /// Additionally require `keyword` as a case-insensitive substring.
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_lowercase());
        self
    }

    /// Minimum length, exclusive.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// The lowercased keyword, if one is required.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// Whether `text` passes the length and keyword checks.
    pub fn qualifies(&self, text: &str) -> bool {
        if text.chars().count() <= self.min_len {
            return false;
        }
        match &self.keyword {
            Some(keyword) => text.to_lowercase().contains(keyword.as_str()),
            None => true,
        }
    }
}

/// Everything the pipeline needs to turn one document into results.
pub struct ExtractionPlan {
    /// Structural strategies, highest priority first.
    pub strategies: Vec<Box<dyn ExtractionStrategy>>,
    /// Whole-document scan used only when every strategy comes up empty.
    pub fallback: Option<Box<dyn ExtractionStrategy>>,
    pub filter: CandidateFilter,
    /// Character budget for each returned string.
    pub truncate_to: usize,
    pub max_results: usize,
}

impl std::fmt::Debug for ExtractionPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionPlan")
            .field(
                "strategies",
                &self.strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .field("fallback", &self.fallback.as_ref().map(|s| s.name()))
            .field("filter", &self.filter)
            .field("truncate_to", &self.truncate_to)
            .field("max_results", &self.max_results)
            .finish()
    }
}

/// Run `plan` against `document`.
///
/// Tries the strategy chain first; the fallback scanner runs only if the
/// chain produced nothing. Every surviving candidate is normalized and
/// truncated to `plan.truncate_to`.
///
/// # Errors
///
/// Propagates [`crate::SearchError::Parse`] from a strategy that cannot be
/// applied.
pub fn extract(document: &RawDocument, plan: &ExtractionPlan) -> Result<Vec<String>> {
    let mut candidates = run_chain(document, &plan.strategies, &plan.filter, plan.max_results)?;

    if candidates.is_empty() {
        if let Some(fallback) = &plan.fallback {
            tracing::debug!(fallback = fallback.name(), "no strategy matched, scanning document text");
            candidates = run_fallback(
                document,
                fallback.as_ref(),
                &plan.filter,
                plan.max_results,
                plan.truncate_to,
            )?;
        }
    }

    Ok(candidates
        .iter()
        .map(|candidate| normalize(&candidate.raw_text, plan.truncate_to))
        .collect())
}
