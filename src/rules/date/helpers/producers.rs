use chrono::NaiveDate;

/// Normalize a written year to a full year.
///
/// Exactly two digits pivot at 30:
/// - 30-99 are interpreted as 1930-1999
/// - 00-29 are interpreted as 2000-2029
///
/// Any other width is taken literally.
pub fn year_from(text: &str) -> Option<i32> {
    let val: i32 = text.parse().ok()?;
    if text.len() == 2 {
        Some(if val >= 30 { 1900 + val } else { 2000 + val })
    } else {
        Some(val)
    }
}

/// Build a calendar date, rejecting impossible days such as 31 April.
pub fn date_from(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_digit_years_pivot_at_thirty() {
        assert_eq!(year_from("29"), Some(2029));
        assert_eq!(year_from("30"), Some(1930));
        assert_eq!(year_from("00"), Some(2000));
        assert_eq!(year_from("99"), Some(1999));
    }

    #[test]
    fn other_widths_are_literal() {
        assert_eq!(year_from("1993"), Some(1993));
        assert_eq!(year_from("2029"), Some(2029));
        assert_eq!(year_from("x9"), None);
    }

    #[test]
    fn impossible_days_are_rejected() {
        assert!(date_from(2023, 4, 31).is_none());
        assert!(date_from(2023, 2, 29).is_none());
        assert!(date_from(2024, 2, 29).is_some());
        assert!(date_from(2024, 13, 1).is_none());
    }
}
