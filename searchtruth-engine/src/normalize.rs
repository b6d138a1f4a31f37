//! Text normalization applied to every candidate before it is returned.
//!
//! Decodes character entities, collapses whitespace, trims, and hard-truncates
//! to a character budget. The result is a fixed point: normalizing it again
//! with the same budget changes nothing.

/// Normalize `text` and truncate it to at most `max_chars` characters.
pub fn normalize(text: &str, max_chars: usize) -> String {
    let decoded = decode_entities(text);
    let collapsed = collapse_whitespace(&decoded);
    truncate_chars(&collapsed, max_chars)
}

/// Decode HTML/XML character entities until none are left.
///
/// Double-encoded input such as `&amp;amp;` is decoded all the way down.
/// Every successful pass shrinks the string, so the loop terminates.
pub fn decode_entities(text: &str) -> String {
    let mut current = decode_once(text);
    loop {
        let next = decode_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Collapse every whitespace run (including non-breaking spaces) to one
/// space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `text` to `max_chars` characters. Mid-token cuts are fine; whitespace
/// left dangling at the cut is trimmed.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].trim_end().to_owned(),
        None => text.to_owned(),
    }
}

/// Longest entity body we bother looking at, e.g. `#x10FFFF` or `hellip`.
const MAX_ENTITY_LEN: usize = 10;

fn decode_once(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        let decoded = after
            .char_indices()
            .take(MAX_ENTITY_LEN + 1)
            .find(|&(_, c)| c == ';')
            .and_then(|(semi, _)| lookup_entity(&after[..semi]).map(|ch| (ch, semi)));

        match decoded {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn lookup_entity(body: &str) -> Option<char> {
    if let Some(numeric) = body.strip_prefix('#') {
        let hex = numeric
            .strip_prefix('x')
            .or_else(|| numeric.strip_prefix('X'));
        let code = match hex {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        if code == 0 {
            return None;
        }
        return char::from_u32(code);
    }

    let ch = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        _ => return None,
    };
    Some(ch)
}
