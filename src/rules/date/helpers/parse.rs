//! Parsing utilities for extracting values from capture groups

use std::borrow::Cow;

/// Extract an unsigned integer from a specific capture group.
pub fn group_int(groups: &[&str], idx: usize) -> Option<u32> {
    groups.get(idx)?.parse().ok()
}

/// Extract a capture group as text; empty groups count as missing.
pub fn group_text<'a>(groups: &[&'a str], idx: usize) -> Option<&'a str> {
    groups.get(idx).copied().filter(|g| !g.is_empty())
}

/// Drop English ordinal suffixes from day numbers ("1st" -> "1", "22nd" -> "22").
pub fn strip_ordinals(text: &str) -> Cow<'_, str> {
    regex!(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b").replace_all(text, "$1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_removed_from_day_numbers() {
        assert_eq!(strip_ordinals("May 1st, 1990"), "May 1, 1990");
        assert_eq!(strip_ordinals("22ND march 2001"), "22 march 2001");
        assert_eq!(strip_ordinals("3rd 4th"), "3 4");
    }

    #[test]
    fn ordinals_inside_words_are_kept() {
        assert_eq!(strip_ordinals("Smith 20MAY93"), "Smith 20MAY93");
        assert_eq!(strip_ordinals("1990th"), "1990th");
    }

    #[test]
    fn group_helpers_read_captures() {
        let groups = ["20MAY93", "20", "MAY", ""];
        assert_eq!(group_int(&groups, 1), Some(20));
        assert_eq!(group_int(&groups, 2), None);
        assert_eq!(group_text(&groups, 2), Some("MAY"));
        assert_eq!(group_text(&groups, 3), None);
        assert_eq!(group_text(&groups, 9), None);
    }
}
