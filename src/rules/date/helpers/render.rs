use chrono::{Datelike, NaiveDate};

use crate::rules::date::predicates::MONTH_ABBR;

/// Render a date as `DDMMMYY`, e.g. `20MAY93`.
pub fn six_char_date(date: NaiveDate) -> String {
    format!("{:02}{}{:02}", date.day(), MONTH_ABBR[date.month0() as usize], date.year().rem_euclid(100))
}
