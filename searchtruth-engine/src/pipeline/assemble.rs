//! Result assembly: caps, sentinels, and the city listing shape.
//!
//! This is where a failed fetch or an empty extraction becomes a value the
//! caller can render. Nothing past this point returns an error.

use crate::error::SearchError;
use crate::types::{
    CityError, CityErrorKind, CityListResult, CityListing, Domain, SearchOutcome, MAX_CITIES,
};
use std::collections::HashSet;

/// The "no results" sentinel for `domain`, embedding the caller's keyword.
pub fn not_found_message(domain: Domain, keyword: &str) -> String {
    match domain {
        Domain::Verses => format!("No Quran verses found containing '{keyword}'"),
        Domain::Narrations => format!("No hadith found containing '{keyword}'"),
        Domain::DictionaryEntries => format!("No dictionary entries found for '{keyword}'"),
        Domain::Cities => format!("No cities found for {keyword}"),
    }
}

/// The "service unavailable" sentinel for `domain`.
pub fn unavailable_message(domain: Domain) -> String {
    match domain {
        Domain::Verses => "Unable to search Quran at the moment. Please try again later.",
        Domain::Narrations => "Unable to search Hadith at the moment. Please try again later.",
        Domain::DictionaryEntries => {
            "Unable to access dictionary at the moment. Please try again later."
        }
        Domain::Cities => "Unable to get cities at the moment. Please try again later.",
    }
    .to_owned()
}

/// Wrap an extraction attempt into a [`SearchOutcome`].
///
/// Failures are logged with domain and keyword context and turned into the
/// unavailable sentinel; an empty result becomes the not-found sentinel; a
/// non-empty result is capped at `max_results`.
pub fn assemble(
    domain: Domain,
    keyword: &str,
    max_results: usize,
    extracted: Result<Vec<String>, SearchError>,
) -> SearchOutcome {
    match extracted {
        Ok(mut results) if !results.is_empty() => {
            results.truncate(max_results);
            SearchOutcome::Found(results)
        }
        Ok(_) => {
            tracing::debug!(%domain, keyword, "no qualifying candidates");
            SearchOutcome::NotFound(not_found_message(domain, keyword))
        }
        Err(err) => {
            tracing::warn!(%domain, keyword, error = %err, "search failed");
            SearchOutcome::Unavailable(unavailable_message(domain))
        }
    }
}

/// Build the city listing from the link texts found on the page.
///
/// Names are trimmed and blank ones skipped, then de-duplicated
/// case-sensitively in first-seen order. `total_cities` counts unique
/// names before the list is cut to `cap` (itself never above
/// [`MAX_CITIES`]).
pub fn assemble_cities(country: &str, link_texts: Vec<String>, cap: usize) -> CityListResult {
    let mut seen = HashSet::new();
    let cities: Vec<String> = link_texts
        .into_iter()
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.clone()))
        .collect();

    if cities.is_empty() {
        tracing::debug!(country, "no city links found");
        return CityListResult::Error(CityError {
            kind: CityErrorKind::NoCities,
            message: not_found_message(Domain::Cities, country),
            suggestion: "Please try a different country or check the country name.".into(),
        });
    }

    let total_cities = cities.len();
    let available_cities = cities.into_iter().take(cap.min(MAX_CITIES)).collect();
    CityListResult::Listing(CityListing {
        country: country.to_owned(),
        available_cities,
        total_cities,
    })
}

/// The error object returned when the city page could not be fetched.
pub fn cities_unavailable(country: &str, err: &SearchError) -> CityListResult {
    tracing::warn!(domain = %Domain::Cities, country, error = %err, "city listing failed");
    CityListResult::Error(CityError {
        kind: CityErrorKind::Unavailable,
        message: format!("Unable to get cities for {country}"),
        suggestion: "Please try again later.".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_extraction_is_not_found_with_keyword() {
        let outcome = assemble(Domain::Narrations, "zzzznotfound", 5, Ok(vec![]));
        assert_eq!(
            outcome.lines(),
            ["No hadith found containing 'zzzznotfound'".to_string()]
        );
        assert!(matches!(outcome, SearchOutcome::NotFound(_)));
    }

    #[test]
    fn failure_is_unavailable() {
        let outcome = assemble(
            Domain::Verses,
            "mercy",
            5,
            Err(SearchError::Timeout("10s".into())),
        );
        assert_eq!(
            outcome,
            SearchOutcome::Unavailable(
                "Unable to search Quran at the moment. Please try again later.".into()
            )
        );
    }

    #[test]
    fn sentinels_are_distinguishable() {
        for domain in [Domain::Verses, Domain::Narrations, Domain::DictionaryEntries] {
            assert!(unavailable_message(domain).contains("Unable"));
            assert!(not_found_message(domain, "x").starts_with("No "));
            assert!(not_found_message(domain, "x").contains("'x'"));
        }
    }

    #[test]
    fn found_results_capped() {
        let outcome = assemble(
            Domain::DictionaryEntries,
            "book",
            2,
            Ok(names(&["a", "b", "c"])),
        );
        assert_eq!(outcome, SearchOutcome::Found(names(&["a", "b"])));
    }

    #[test]
    fn city_dedup_keeps_first_seen_order_and_counts_unique() {
        let result = assemble_cities("Egypt", names(&["Cairo", "Giza", "Cairo"]), MAX_CITIES);
        let CityListResult::Listing(listing) = result else {
            panic!("expected listing");
        };
        assert_eq!(listing.available_cities, names(&["Cairo", "Giza"]));
        assert_eq!(listing.total_cities, 2);
        assert_eq!(listing.country, "Egypt");
    }

    #[test]
    fn city_identity_is_case_sensitive() {
        let result = assemble_cities("Egypt", names(&["Cairo", "cairo"]), MAX_CITIES);
        let CityListResult::Listing(listing) = result else {
            panic!("expected listing");
        };
        assert_eq!(listing.total_cities, 2);
    }

    #[test]
    fn city_list_capped_but_total_is_true_count() {
        let many: Vec<String> = (0..35).map(|i| format!("City {i}")).collect();
        let result = assemble_cities("India", many, MAX_CITIES);
        let CityListResult::Listing(listing) = result else {
            panic!("expected listing");
        };
        assert_eq!(listing.available_cities.len(), 20);
        assert_eq!(listing.total_cities, 35);
        assert_eq!(listing.available_cities[0], "City 0");
    }

    #[test]
    fn city_cap_never_exceeds_twenty() {
        let many: Vec<String> = (0..30).map(|i| format!("City {i}")).collect();
        let CityListResult::Listing(listing) = assemble_cities("India", many, 100) else {
            panic!("expected listing");
        };
        assert_eq!(listing.available_cities.len(), 20);
    }

    #[test]
    fn no_city_names_is_error_with_suggestion() {
        let result = assemble_cities("Atlantis", names(&["  ", ""]), MAX_CITIES);
        let CityListResult::Error(err) = result else {
            panic!("expected error");
        };
        assert_eq!(err.kind, CityErrorKind::NoCities);
        assert!(err.message.contains("Atlantis"));
        assert!(err.suggestion.contains("different country"));
    }

    #[test]
    fn unavailable_city_error() {
        let result = cities_unavailable("Egypt", &SearchError::Http("503".into()));
        let CityListResult::Error(err) = result else {
            panic!("expected error");
        };
        assert_eq!(err.kind, CityErrorKind::Unavailable);
        assert_eq!(err.message, "Unable to get cities for Egypt");
    }
}
