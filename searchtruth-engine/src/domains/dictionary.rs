//! Arabic/English dictionary lookup.
//!
//! Entry rows rarely echo the looked-up word verbatim (the Arabic column
//! carries the match), so `tr[bgcolor]` rows are kept on length alone.
//! Full-width tables also frame the page chrome, so they only count when
//! they mention the word. Cells are joined with `" | "` to keep the columns
//! apart. There is no text fallback: outside a table the page text is
//! navigation, not entries.

use crate::document::RawDocument;
use crate::error::Result;
use crate::http::FetchRequest;
use crate::pipeline::{CandidateFilter, ExtractionPlan};
use crate::strategy::{ExtractionStrategy, SelectorStrategy};
use crate::types::{Candidate, Query};

pub const PATH: &str = "/dictionary/arabic_english_dictionary.php";
pub const MIN_CANDIDATE_LEN: usize = 10;
/// Exclusive minimum for a full-width table to stand in for entry rows.
pub const TABLE_MIN_LEN: usize = 20;
pub const TRUNCATE_TO: usize = 400;
pub const CELL_SEPARATOR: &str = " | ";

pub const ENTRY_ROWS: SelectorStrategy =
    SelectorStrategy::new("tr[bgcolor]").with_separator(CELL_SEPARATOR);
pub const LAYOUT_TABLES: SelectorStrategy =
    SelectorStrategy::new(r#"table[width="100%"]"#).with_separator(CELL_SEPARATOR);

/// Full-width tables that mention the looked-up word.
#[derive(Debug, Clone)]
pub struct WordTables {
    tables: SelectorStrategy,
    filter: CandidateFilter,
}

impl WordTables {
    pub fn new(word: &str) -> Self {
        Self {
            tables: LAYOUT_TABLES,
            filter: CandidateFilter::new(TABLE_MIN_LEN).with_keyword(word),
        }
    }
}

impl ExtractionStrategy for WordTables {
    fn name(&self) -> &str {
        self.tables.name()
    }

    fn candidates(&self, document: &RawDocument) -> Result<Vec<Candidate>> {
        Ok(self
            .tables
            .candidates(document)?
            .into_iter()
            .filter(|candidate| self.filter.qualifies(&candidate.raw_text))
            .collect())
    }
}

pub fn request(query: &Query) -> FetchRequest {
    FetchRequest::new(PATH)
        .param("word", query.keyword_str())
        .param("word_option", query.match_mode().as_param())
}

pub fn plan(query: &Query) -> ExtractionPlan {
    ExtractionPlan {
        strategies: vec![
            Box::new(ENTRY_ROWS),
            Box::new(WordTables::new(query.keyword_str())),
        ],
        fallback: None,
        filter: CandidateFilter::new(MIN_CANDIDATE_LEN),
        truncate_to: TRUNCATE_TO,
        max_results: query.max_results,
    }
}
