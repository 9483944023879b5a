//! Trigger scanning (fragment pre-classification).
//!
//! Before any date rule runs, the fragment is scanned for coarse signals so
//! rules that cannot possibly match are skipped without touching their regex.
//!
//! - This is a *heuristic* scan. False positives are fine because the rule
//!   still has to match its full anchored pattern.
//! - Month detection splits on every non-letter, so glued forms such as
//!   `20MAY93` still count as month-like.

use crate::rules::date::predicates::is_month_word;

bitflags::bitflags! {
    /// Coarse buckets for fast fragment classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        const HAS_DIGITS    = 1 << 0;
        const MONTHISH      = 1 << 1;
        const HAS_SEPARATOR = 1 << 2;
    }
}

/// Fragment characteristics detected from the raw text.
#[derive(Debug, Clone, Copy)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    /// Scan `fragment` for coarse buckets.
    pub fn scan(fragment: &str) -> Self {
        let mut buckets = BucketMask::empty();

        if fragment.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }

        if fragment.bytes().any(|b| matches!(b, b'-' | b'/' | b'.')) {
            buckets |= BucketMask::HAS_SEPARATOR;
        }

        if fragment.split(|c: char| !c.is_ascii_alphabetic()).any(is_month_word) {
            buckets |= BucketMask::MONTHISH;
        }

        TriggerInfo { buckets }
    }

    /// True when every bucket a rule requires was seen.
    pub fn admits(&self, required: u32) -> bool {
        self.buckets.contains(BucketMask::from_bits_truncate(required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_dates_are_month_like() {
        let info = TriggerInfo::scan("20MAY93");
        assert!(info.buckets.contains(BucketMask::HAS_DIGITS | BucketMask::MONTHISH));
        assert!(!info.buckets.contains(BucketMask::HAS_SEPARATOR));
    }

    #[test]
    fn numeric_dates_have_separators_but_no_month() {
        let info = TriggerInfo::scan("05/20/2023");
        assert!(info.buckets.contains(BucketMask::HAS_DIGITS | BucketMask::HAS_SEPARATOR));
        assert!(!info.buckets.contains(BucketMask::MONTHISH));
    }

    #[test]
    fn names_alone_trigger_nothing() {
        let info = TriggerInfo::scan("just some text");
        assert!(info.buckets.is_empty());
        assert!(info.admits(0));
        assert!(!info.admits(BucketMask::HAS_DIGITS.bits()));
    }
}
