//! Finding the date inside a whole row.
//!
//! Three attempts, in order:
//!
//! ```text
//! (1) whole fragment          -> Recognizer::recognize
//! (2) trailing pattern search -> rules::date::rules::trailing, first hit that parses
//! (3) backward word scan      -> last word, last two words, ... whole fragment
//! ```
//!
//! Whatever precedes the accepted date is returned as the name remainder.

use super::recognizer::Recognizer;
use crate::DateOrder;
use crate::rules::date::helpers::strip_ordinals;
use crate::rules::date::rules::trailing;
use chrono::NaiveDate;

/// A date located in a row plus the text that preceded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub date: NaiveDate,
    pub rest: String,
    pub rule: &'static str,
}

pub fn locate_date(text: &str, order: DateOrder, recognizer: &Recognizer<'_>) -> Option<Located> {
    let cleaned = strip_ordinals(text);
    let text = cleaned.trim();

    if let Some(m) = recognizer.recognize(text, order) {
        return Some(Located { date: m.date, rest: String::new(), rule: m.rule });
    }

    for pattern in trailing() {
        let Some(found) = pattern.find(text) else {
            continue;
        };
        if let Some(m) = recognizer.recognize(found.as_str(), order) {
            let rest = text[..found.start()].trim_end().to_string();
            return Some(Located { date: m.date, rest, rule: m.rule });
        }
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    for start in (0..words.len()).rev() {
        let candidate = words[start..].join(" ");
        if let Some(m) = recognizer.recognize(&candidate, order) {
            return Some(Located { date: m.date, rest: words[..start].join(" "), rule: m.rule });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::date::rules;

    fn locate(text: &str, order: DateOrder) -> Option<(String, String)> {
        let rules = rules::get();
        let recognizer = Recognizer::new(&rules);
        locate_date(text, order, &recognizer).map(|l| (l.date.to_string(), l.rest))
    }

    #[test]
    fn trailing_compact_date_with_long_year() {
        let (date, rest) = locate("John Smith 20MAY1993", DateOrder::DayFirst).unwrap();
        assert_eq!(date, "1993-05-20");
        assert_eq!(rest, "John Smith");
    }

    #[test]
    fn trailing_numeric_date_keeps_marker_in_rest() {
        let (date, rest) = locate("Maria =Van Der Berg 05/20/2023", DateOrder::MonthFirst).unwrap();
        assert_eq!(date, "2023-05-20");
        assert_eq!(rest, "Maria =Van Der Berg");
    }

    #[test]
    fn month_name_first_with_ordinal() {
        let (date, rest) = locate("Ann Lee May 1st, 1990", DateOrder::DayFirst).unwrap();
        assert_eq!(date, "1990-05-01");
        assert_eq!(rest, "Ann Lee");
    }

    #[test]
    fn spaced_numeric_date() {
        let (date, rest) = locate("Jane Doe 12 05 1990", DateOrder::DayFirst).unwrap();
        assert_eq!(date, "1990-05-12");
        assert_eq!(rest, "Jane Doe");
    }

    #[test]
    fn numeric_order_decides_validity() {
        // Month-first reads "25/12/2020" as month 25; no shorter tail parses either.
        assert!(locate("Tom Ray 25/12/2020", DateOrder::MonthFirst).is_none());

        let (date, rest) = locate("Tom Ray 25/12/2020", DateOrder::DayFirst).unwrap();
        assert_eq!(date, "2020-12-25");
        assert_eq!(rest, "Tom Ray");
    }

    #[test]
    fn trailing_hit_must_parse() {
        // "12 Kay 1990" has the shape of a day-month-year tail but no month.
        assert!(locate("Jo Ma 12 Kay 1990", DateOrder::DayFirst).is_none());

        let (date, rest) = locate("Bo Li 3 Sept. 01", DateOrder::DayFirst).unwrap();
        assert_eq!(date, "2001-09-03");
        assert_eq!(rest, "Bo Li");
    }

    #[test]
    fn whole_fragment_date_leaves_empty_rest() {
        let (date, rest) = locate("2024-06-01", DateOrder::DayFirst).unwrap();
        assert_eq!(date, "2024-06-01");
        assert_eq!(rest, "");
    }

    #[test]
    fn text_without_date() {
        assert!(locate("just some text", DateOrder::DayFirst).is_none());
        assert!(locate("", DateOrder::DayFirst).is_none());
    }
}
