//! Prayer-times city listing.

use crate::document::RawDocument;
use crate::error::{Result, SearchError};
use crate::http::FetchRequest;
use crate::strategy::flatten_text;
use crate::types::Query;
use scraper::Selector;

pub const PATH: &str = "/prayertimes/city.php";

/// Links into a city's prayer-times page.
pub const CITY_LINK_SELECTOR: &str = r#"a[href*="prayertimes"][href*="city="]"#;

/// The source expects lowercase country slugs with underscores for spaces.
pub fn country_slug(country: &str) -> String {
    country.trim().to_lowercase().replace(' ', "_")
}

pub fn request(query: &Query) -> FetchRequest {
    FetchRequest::new(PATH).param("country", country_slug(query.country().unwrap_or_default()))
}

/// Text of every city link in document order, duplicates included.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if the link selector does not compile.
pub fn city_link_texts(document: &RawDocument) -> Result<Vec<String>> {
    let selector = Selector::parse(CITY_LINK_SELECTOR)
        .map_err(|e| SearchError::Parse(format!("invalid selector {CITY_LINK_SELECTOR}: {e:?}")))?;
    Ok(document
        .html()
        .select(&selector)
        .map(|link| flatten_text(link, " "))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../test-data/cities.html");

    #[test]
    fn slug_lowercases_and_underscores() {
        assert_eq!(country_slug("Saudi Arabia"), "saudi_arabia");
        assert_eq!(country_slug(" Egypt "), "egypt");
        assert_eq!(country_slug("United Arab Emirates"), "united_arab_emirates");
    }

    #[test]
    fn request_carries_slug() {
        let request = request(&Query::cities("Saudi Arabia"));
        assert_eq!(request.path, "/prayertimes/city.php");
        assert_eq!(request.get("country"), Some("saudi_arabia"));
    }

    #[test]
    fn fixture_links_in_document_order() {
        let doc = RawDocument::parse(FIXTURE).expect("fixture should parse");
        let texts = city_link_texts(&doc).expect("links");
        assert_eq!(texts.first().map(String::as_str), Some("Cairo"));
        assert_eq!(texts.len(), 6);
        assert!(texts.contains(&"Port Said".to_string()));
        assert!(texts.contains(&"Aswan".to_string()));
        assert!(!texts.iter().any(|t| t.contains("Change country")));
    }
}
