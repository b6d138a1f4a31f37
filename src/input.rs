//! Free-text search input.

use crate::error::{AppError, Result};

/// A verse search as typed: a keyword, optionally followed by a chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseInput {
    pub keyword: String,
    pub chapter: Option<String>,
}

/// Parse `"keyword [chapter]"` or `"keyword chapter:verse"`.
///
/// Only the first word is the keyword. The verse part of `chapter:verse`
/// is dropped, since the source searches whole chapters. A second word that
/// is not a chapter number is ignored.
///
/// # Errors
///
/// Returns [`AppError::Usage`] if `text` has no words.
pub fn parse_verse_input(text: &str) -> Result<VerseInput> {
    let mut words = text.split_whitespace();
    let keyword = words
        .next()
        .ok_or_else(|| AppError::Usage("please enter a search keyword".into()))?;

    let chapter = words.next().and_then(|scope| {
        let number = scope.split_once(':').map_or(scope, |(chapter, _)| chapter);
        is_number(number).then(|| number.to_owned())
    });

    Ok(VerseInput {
        keyword: keyword.to_owned(),
        chapter,
    })
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
