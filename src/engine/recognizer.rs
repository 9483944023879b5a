//! Whole-fragment date recognition.
//!
//! A `Recognizer` holds the ordered rule list and answers one question: does
//! this entire fragment read as a date? Rules are tried in precedence order
//! and the first production that yields a valid calendar date wins.

use super::trigger::TriggerInfo;
use crate::rules::date::helpers::strip_ordinals;
use crate::{DateMatch, DateOrder, DateRule};
use tracing::trace;

#[derive(Debug, Clone, Copy)]
pub struct Recognizer<'a> {
    rules: &'a [DateRule],
}

impl<'a> Recognizer<'a> {
    pub fn new(rules: &'a [DateRule]) -> Self {
        Self { rules }
    }

    /// Parse `fragment` as a date, or `None` when no rule covers all of it.
    pub fn recognize(&self, fragment: &str, order: DateOrder) -> Option<DateMatch> {
        let cleaned = strip_ordinals(fragment);
        let fragment = cleaned.trim();
        if fragment.is_empty() {
            return None;
        }

        let trigger = TriggerInfo::scan(fragment);

        for rule in self.rules.iter().filter(|rule| trigger.admits(rule.buckets)) {
            let Some(caps) = rule.pattern.captures(fragment) else {
                continue;
            };
            let groups: Vec<&str> = caps.iter().map(|m| m.map_or("", |m| m.as_str())).collect();
            if let Some(date) = (rule.production)(&groups, order) {
                trace!(rule = rule.name, fragment, %date, "date rule matched");
                return Some(DateMatch { date, rule: rule.name });
            }
        }

        None
    }
}
