use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Upper-case three-letter month abbreviations, January first.
pub(crate) const MONTH_ABBR: [&str; 12] =
    ["JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC"];

pub(crate) static MONTH_NAME: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("january", 1),
        ("jan", 1),
        ("february", 2),
        ("feb", 2),
        ("march", 3),
        ("mar", 3),
        ("april", 4),
        ("apr", 4),
        ("may", 5),
        ("june", 6),
        ("jun", 6),
        ("july", 7),
        ("jul", 7),
        ("august", 8),
        ("aug", 8),
        ("september", 9),
        ("sept", 9),
        ("sep", 9),
        ("october", 10),
        ("oct", 10),
        ("november", 11),
        ("nov", 11),
        ("december", 12),
        ("dec", 12),
    ])
});

/// Month number for a full name or abbreviation (any case, trailing `.` allowed).
pub fn month_from_name(text: &str) -> Option<u32> {
    let normalized = text.trim().trim_end_matches('.').to_ascii_lowercase();
    MONTH_NAME.get(normalized.as_str()).copied()
}

/// Month number for a strict three-letter abbreviation.
pub fn month_from_abbr(text: &str) -> Option<u32> {
    if text.len() != 3 {
        return None;
    }
    month_from_name(text)
}

/// Returns true when `word` names a month.
pub fn is_month_word(word: &str) -> bool {
    month_from_name(word).is_some()
}
