//! Date rules with a written month (MONTHISH bucket)

use crate::DateRule;
use crate::engine::BucketMask;
use crate::rules::date::helpers::*;
use crate::rules::date::predicates::*;

/// ddMMMyy compact form (e.g., "20MAY93")
pub fn rule_compact() -> DateRule {
    date_rule! {
        name: "ddMMMyy (compact)",
        pattern: r"(?i)^(\d{1,2})([a-z]{3})(\d{2})$",
        buckets: (BucketMask::HAS_DIGITS | BucketMask::MONTHISH).bits(),
        prod: |groups, _order| {
            let day = group_int(groups, 1)?;
            let month = month_from_abbr(group_text(groups, 2)?)?;
            let year = year_from(group_text(groups, 3)?)?;

            date_from(year, month, day)
        },
    }
}

/// <month> <day>[,] <year> (e.g., "May 20, 1993", "Sept 3 01")
pub fn rule_month_day_year() -> DateRule {
    date_rule! {
        name: "<month> <day> <year>",
        pattern: r"(?i)^([a-z]+)\.?\s+(\d{1,2})(?:\s*,\s*|\s+)(\d{2,4})$",
        buckets: (BucketMask::HAS_DIGITS | BucketMask::MONTHISH).bits(),
        prod: |groups, _order| {
            let month = month_from_name(group_text(groups, 1)?)?;
            let day = group_int(groups, 2)?;
            let year = year_from(group_text(groups, 3)?)?;

            date_from(year, month, day)
        },
    }
}

/// <day> <month> <year> (e.g., "20 May 1993", "20-may-93", "20MAY1993")
pub fn rule_day_month_year() -> DateRule {
    date_rule! {
        name: "<day> <month> <year>",
        pattern: r"(?i)^(\d{1,2})[\s\-/.]*([a-z]+)\.?[\s\-/.,]*(\d{2,4})$",
        buckets: (BucketMask::HAS_DIGITS | BucketMask::MONTHISH).bits(),
        prod: |groups, _order| {
            let day = group_int(groups, 1)?;
            let month = month_from_name(group_text(groups, 2)?)?;
            let year = year_from(group_text(groups, 3)?)?;

            date_from(year, month, day)
        },
    }
}
