use chrono::{Datelike, NaiveDate};

use crate::{Category, CategoryHint};

/// Whole years between `birth` and `reference`, birthday-exact.
///
/// The year difference drops by one when the reference month/day falls
/// before the birthday.
pub fn age_on(birth: NaiveDate, reference: NaiveDate) -> i32 {
    let years = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) { years - 1 } else { years }
}

/// Age and resolved category for one passenger.
pub(crate) fn classify(hint: CategoryHint, birth: NaiveDate, reference: NaiveDate) -> (i32, Category) {
    let age = age_on(birth, reference);
    (age, hint.resolve(age))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn age_counts_whole_birthdays() {
        let reference = d(2024, 6, 1);
        let cases = vec![
            (31, d(1993, 5, 20)),
            (31, d(1993, 6, 1)),
            (30, d(1993, 6, 2)),
            (1, d(2023, 5, 20)),
            (0, d(2023, 6, 2)),
            (-1, d(2025, 1, 1)),
        ];
        for (expected, birth) in cases {
            assert_eq!(age_on(birth, reference), expected, "born {birth}");
        }
    }

    #[test]
    fn leap_day_birthday_turns_over_on_march_first() {
        assert_eq!(age_on(d(2000, 2, 29), d(2023, 2, 28)), 22);
        assert_eq!(age_on(d(2000, 2, 29), d(2023, 3, 1)), 23);
    }

    #[test]
    fn classify_uses_age_when_inferring() {
        let reference = d(2024, 6, 1);
        assert_eq!(classify(CategoryHint::Infer, d(2023, 5, 20), reference), (1, Category::LapInfant));
        assert_eq!(classify(CategoryHint::Infer, d(2020, 1, 1), reference), (4, Category::Child));
        assert_eq!(classify(CategoryHint::Fixed(Category::Child), d(1990, 1, 1), reference), (34, Category::Child));
    }
}
