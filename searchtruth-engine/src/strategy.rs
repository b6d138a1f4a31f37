//! Pluggable candidate sources.
//!
//! Each strategy encodes one known layout of the source's result pages and
//! turns a [`RawDocument`] into raw [`Candidate`] text blocks. Strategies do
//! no filtering; the pipeline decides which candidates qualify.

use crate::document::RawDocument;
use crate::error::{Result, SearchError};
use crate::types::Candidate;
use scraper::{ElementRef, Selector};

/// A pure function from a parsed document to raw candidates.
///
/// Implementors must be stateless with respect to the document: calling
/// [`candidates`](Self::candidates) twice on the same document yields the
/// same blocks in the same (document) order.
pub trait ExtractionStrategy: Send + Sync {
    /// Identifier recorded on every candidate this strategy produces.
    fn name(&self) -> &str;

    /// Produce raw candidates in document order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Parse`] if the strategy cannot be applied,
    /// e.g. its selector does not compile.
    fn candidates(&self, document: &RawDocument) -> Result<Vec<Candidate>>;
}

/// Selects every node matching a CSS selector and flattens its text.
#[derive(Debug, Clone)]
pub struct SelectorStrategy {
    name: &'static str,
    selector: &'static str,
    separator: &'static str,
}

impl SelectorStrategy {
    /// A strategy named after its selector, joining text with a single space.
    pub const fn new(selector: &'static str) -> Self {
        Self {
            name: selector,
            selector,
            separator: " ",
        }
    }

    /// Use `separator` between descendant text pieces.
    pub const fn with_separator(self, separator: &'static str) -> Self {
        Self { separator, ..self }
    }

    /// The CSS selector this strategy applies.
    pub fn selector(&self) -> &'static str {
        self.selector
    }
}

impl ExtractionStrategy for SelectorStrategy {
    fn name(&self) -> &str {
        self.name
    }

    fn candidates(&self, document: &RawDocument) -> Result<Vec<Candidate>> {
        let selector = Selector::parse(self.selector)
            .map_err(|e| SearchError::Parse(format!("invalid selector {}: {e:?}", self.selector)))?;

        Ok(document
            .html()
            .select(&selector)
            .map(|element| Candidate::new(flatten_text(element, self.separator), self.name))
            .collect())
    }
}

/// Join an element's descendant text, trimming each piece and dropping empty
/// ones. Pieces that are just the separator itself are dropped too.
pub fn flatten_text(element: ElementRef<'_>, separator: &str) -> String {
    let bare = separator.trim();
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty() && *piece != bare)
        .collect::<Vec<_>>()
        .join(separator)
}
