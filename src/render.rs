//! Plain-text rendering of search outcomes for the terminal.

use crate::catalog;
use searchtruth_engine::{CityListResult, SearchOutcome};
use std::fmt::Write;

/// Numbered results, or a not-found message with suggestions.
fn render_outcome(
    header: &str,
    outcome: &SearchOutcome,
    cap: usize,
    not_found: &str,
    suggestions: &[&str],
) -> String {
    match outcome {
        SearchOutcome::Found(results) => {
            let mut out = format!("{header}\n\n");
            for (i, result) in results.iter().enumerate() {
                let _ = writeln!(out, "{}. {result}\n", i + 1);
            }
            if results.len() == cap {
                let _ = writeln!(out, "Showing {cap} results");
            }
            out.trim_end().to_owned()
        }
        SearchOutcome::NotFound(_) => {
            let mut out = format!("{not_found}\n\nSuggestions:\n");
            for suggestion in suggestions {
                let _ = writeln!(out, "- {suggestion}");
            }
            out.trim_end().to_owned()
        }
        SearchOutcome::Unavailable(message) => message.clone(),
    }
}

/// Render a verse search.
///
/// The header names the chapter only when it is in the catalog, and the
/// translation by name when known, by id otherwise.
pub fn render_verses(
    keyword: &str,
    chapter: Option<&str>,
    translator: &str,
    outcome: &SearchOutcome,
    cap: usize,
) -> String {
    let mut header = match chapter.and_then(catalog::chapter_by_number) {
        Some(chapter) => format!("Results for '{keyword}' in {}", chapter.name),
        None => format!("Results for '{keyword}'"),
    };
    let translation = catalog::translation_by_id(translator).map_or(translator, |t| t.name);
    let _ = write!(header, "\nTranslation: {translation}");

    render_outcome(
        &header,
        outcome,
        cap,
        &format!("No Quran verses found for '{keyword}'"),
        &[
            "Try different keywords",
            "Use Arabic words",
            "Try broader search terms",
        ],
    )
}

pub fn render_narrations(
    keyword: &str,
    collection: &str,
    outcome: &SearchOutcome,
    cap: usize,
) -> String {
    let collection = catalog::collection_by_id(collection).map_or(collection, |c| c.name);
    render_outcome(
        &format!("Hadith results for '{keyword}'\nCollection: {collection}"),
        outcome,
        cap,
        &format!("No hadith found for '{keyword}' in {collection}"),
        &[
            "Try different keywords",
            "Search another collection",
            "Use simpler terms",
        ],
    )
}

pub fn render_dictionary(word: &str, outcome: &SearchOutcome, cap: usize) -> String {
    render_outcome(
        &format!("Dictionary results for '{word}'"),
        outcome,
        cap,
        &format!("No dictionary entries found for '{word}'"),
        &["Different spelling", "Root words", "Simpler terms"],
    )
}

/// Render a city listing, showing at most `display` names.
pub fn render_cities(result: &CityListResult, display: usize) -> String {
    match result {
        CityListResult::Listing(listing) => {
            let mut out = format!(
                "Prayer Times - {}\n\nFound {} cities.\n",
                listing.country, listing.total_cities
            );
            for (i, city) in listing.available_cities.iter().take(display).enumerate() {
                let _ = writeln!(out, "{}. {city}", i + 1);
            }
            if listing.total_cities > display {
                let _ = write!(
                    out,
                    "\nShowing first {display} cities. For more cities, visit SearchTruth.com"
                );
            }
            out.trim_end().to_owned()
        }
        CityListResult::Error(err) => format!("{}\n{}", err.message, err.suggestion),
    }
}

/// One line per entry, for `translations`.
pub fn render_translations() -> String {
    catalog::TRANSLATIONS
        .iter()
        .map(|t| format!("{:>3}  {} ({})", t.id, t.name, t.language))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per entry, for `collections`.
pub fn render_collections() -> String {
    catalog::COLLECTIONS
        .iter()
        .map(|c| format!("{:>3}  {}", c.id, c.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Popular countries first, then the full list.
pub fn render_countries() -> String {
    format!(
        "Popular: {}\n\nAll countries:\n{}",
        catalog::POPULAR_COUNTRIES.join(", "),
        catalog::COUNTRIES.join("\n")
    )
}
