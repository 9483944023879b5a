//! Email and name segmentation.

use crate::{NameOrder, RowError};

/// Explicit first/last name separator; always beats the word-order option.
pub const NAME_MARKER: char = '=';

/// Split a trailing `local@domain.tld` token off `text`.
pub fn split_email(text: &str) -> (&str, Option<&str>) {
    let trimmed = text.trim_end();
    let (head, last) = trimmed.rsplit_once(char::is_whitespace).unwrap_or(("", trimmed));

    if regex!(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").is_match(last) { (head, Some(last)) } else { (text, None) }
}

/// Split a name remainder into upper-cased `(first, last)`.
pub fn segment_name(fragment: &str, order: NameOrder) -> Result<(String, String), RowError> {
    let (first, last) = match fragment.split_once(NAME_MARKER) {
        Some((first, last)) => (normalize(first), normalize(last)),
        None => {
            let words: Vec<&str> = fragment.split_whitespace().collect();
            let split = match order {
                NameOrder::LastNameLast => words.split_last(),
                NameOrder::LastNameFirst => words.split_first(),
            };
            match split {
                Some((last, rest)) => (normalize(&rest.join(" ")), normalize(last)),
                None => (String::new(), String::new()),
            }
        }
    };

    if first.is_empty() {
        return Err(RowError::EmptyFirstName);
    }
    if last.is_empty() {
        return Err(RowError::EmptyLastName);
    }
    Ok((first, last))
}

/// Collapse whitespace, drop stray commas at the edges, upper-case.
fn normalize(part: &str) -> String {
    let collapsed = part.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_matches(|c: char| c == ',' || c.is_whitespace()).to_uppercase()
}
