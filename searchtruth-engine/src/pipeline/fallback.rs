//! Last-resort scan over the whole rendered document text.
//!
//! Used only when no structural strategy recognises the page. Precision is
//! lower than structural extraction, so results are de-duplicated and capped
//! here rather than trusted as-is.

use super::CandidateFilter;
use crate::document::RawDocument;
use crate::error::Result;
use crate::normalize::normalize;
use crate::strategy::ExtractionStrategy;
use crate::types::Candidate;
use std::collections::HashSet;

/// Granularity of the whole-document scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackMode {
    /// One candidate per non-blank line. Suits short verse-like records.
    Lines,
    /// One candidate per blank-line-delimited paragraph. Suits narrations.
    Paragraphs,
}

/// Splits the rendered document into lines or paragraphs.
#[derive(Debug, Clone, Copy)]
pub struct FallbackScanner {
    mode: FallbackMode,
}

impl FallbackScanner {
    pub fn new(mode: FallbackMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> FallbackMode {
        self.mode
    }
}

impl ExtractionStrategy for FallbackScanner {
    fn name(&self) -> &str {
        match self.mode {
            FallbackMode::Lines => "fallback:lines",
            FallbackMode::Paragraphs => "fallback:paragraphs",
        }
    }

    fn candidates(&self, document: &RawDocument) -> Result<Vec<Candidate>> {
        let text = document.rendered_text();
        let blocks = match self.mode {
            FallbackMode::Lines => split_lines(&text),
            FallbackMode::Paragraphs => split_paragraphs(&text),
        };
        Ok(blocks
            .into_iter()
            .map(|block| Candidate::new(block, self.name()))
            .collect())
    }
}

/// Filter, de-duplicate and cap the fallback's candidates.
///
/// Two candidates are repeats when their normalized, truncated forms match,
/// so the caller never sees the same string twice.
///
/// # Errors
///
/// Returns any error raised by `scanner`.
pub fn run_fallback(
    document: &RawDocument,
    scanner: &dyn ExtractionStrategy,
    filter: &CandidateFilter,
    max_results: usize,
    truncate_to: usize,
) -> Result<Vec<Candidate>> {
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for candidate in scanner.candidates(document)? {
        if results.len() >= max_results {
            break;
        }
        if !filter.qualifies(&candidate.raw_text) {
            continue;
        }
        if seen.insert(normalize(&candidate.raw_text, truncate_to)) {
            results.push(candidate);
        }
    }

    tracing::debug!(
        scanner = scanner.name(),
        count = results.len(),
        "fallback scan finished"
    );
    Ok(results)
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs
}
