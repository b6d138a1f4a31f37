//! Parsed response bodies.
//!
//! A [`RawDocument`] lives for exactly one query. It is built after the
//! network round-trip has finished and is never held across an await point.

use crate::error::{Result, SearchError};
use scraper::{Html, Node};

/// Elements whose text is never part of the rendered page.
const NON_RENDERED: &[&str] = &["script", "style", "noscript", "template"];

/// A navigable HTML tree for one fetched page.
#[derive(Debug)]
pub struct RawDocument {
    html: Html,
}

impl RawDocument {
    /// Parse a response body.
    ///
    /// The HTML parser itself tolerates any markup, so the only body that
    /// cannot become a document is one with no content at all.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Parse`] if `body` is empty or whitespace-only.
    pub fn parse(body: &str) -> Result<Self> {
        if body.trim().is_empty() {
            return Err(SearchError::Parse("empty response body".into()));
        }
        Ok(Self {
            html: Html::parse_document(body),
        })
    }

    /// The underlying tree, for selector-based strategies.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// All visible text in document order, with the source's own line breaks
    /// kept so it can be split into lines or paragraphs.
    pub fn rendered_text(&self) -> String {
        let mut text = String::new();
        for node in self.html.tree.root().descendants() {
            let Node::Text(fragment) = node.value() else {
                continue;
            };
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| NON_RENDERED.contains(&el.name()))
            });
            if !hidden {
                text.push_str(fragment);
            }
        }
        text
    }
}
