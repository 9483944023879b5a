//! All-digit date rules (HAS_DIGITS bucket)

use crate::DateRule;
use crate::engine::BucketMask;
use crate::rules::date::helpers::*;

/// yyyy-mm-dd format
pub fn rule_yyyy_mm_dd() -> DateRule {
    date_rule! {
        name: "yyyy-mm-dd",
        pattern: r"^(\d{4})-(\d{1,2})-(\d{1,2})$",
        buckets: (BucketMask::HAS_DIGITS | BucketMask::HAS_SEPARATOR).bits(),
        prod: |groups, _order| {
            let year = group_text(groups, 1)?.parse().ok()?;
            let month = group_int(groups, 2)?;
            let day = group_int(groups, 3)?;

            date_from(year, month, day)
        },
    }
}

/// dd/mm/yy or mm/dd/yy with `-`, `/` or `.` separators
pub fn rule_numeric_separated() -> DateRule {
    date_rule! {
        name: "nn/nn/yy (separated)",
        pattern: r"^(\d{1,2})[-/.](\d{1,2})[-/.](\d{2,4})$",
        buckets: (BucketMask::HAS_DIGITS | BucketMask::HAS_SEPARATOR).bits(),
        prod: |groups, order| {
            let (month, day) = order.month_day(group_int(groups, 1)?, group_int(groups, 2)?);
            let year = year_from(group_text(groups, 3)?)?;

            date_from(year, month, day)
        },
    }
}

/// dd mm yy or mm dd yy separated by spaces
pub fn rule_numeric_spaced() -> DateRule {
    date_rule! {
        name: "nn nn yy (spaced)",
        pattern: r"^(\d{1,2})\s+(\d{1,2})\s+(\d{2,4})$",
        buckets: BucketMask::HAS_DIGITS.bits(),
        prod: |groups, order| {
            let (month, day) = order.month_day(group_int(groups, 1)?, group_int(groups, 2)?);
            let year = year_from(group_text(groups, 3)?)?;

            date_from(year, month, day)
        },
    }
}
