use regex::Regex;

use super::rules_named::*;
use super::rules_numeric::*;
use crate::DateRule;

/// All date rules, in the order they are tried.
pub fn get() -> Vec<DateRule> {
    vec![
        rule_compact(),
        rule_yyyy_mm_dd(),
        rule_month_day_year(),
        rule_day_month_year(),
        rule_numeric_separated(),
        rule_numeric_spaced(),
    ]
}

/// End-anchored patterns that locate a date-like tail in a longer row.
///
/// Listed in the same precedence as [`get`]; a hit is only accepted if a rule
/// then parses the matched text.
pub fn trailing() -> [&'static Regex; 6] {
    [
        regex!(r"(?i)\b\d{1,2}[a-z]{3}\d{2,4}\s*$"),
        regex!(r"\b\d{4}-\d{1,2}-\d{1,2}\s*$"),
        regex!(r"(?i)\b[a-z]+\.?\s+\d{1,2}(?:\s*,\s*|\s+)\d{2,4}\s*$"),
        regex!(r"(?i)\b\d{1,2}[\s\-/.]*[a-z]+\.?[\s\-/.,]*\d{2,4}\s*$"),
        regex!(r"\b\d{1,2}[-/.]\d{1,2}[-/.]\d{2,4}\s*$"),
        regex!(r"\b\d{1,2}\s+\d{1,2}\s+\d{2,4}\s*$"),
    ]
}
