extern crate self as paxline;

use chrono::NaiveDate;
use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;

mod passenger;

pub use api::{
    Context, GenerateDetails, GenerateResultVerbose, Options, Output, RowOutcome, generate, generate_verbose_with,
    generate_with, recognize_date,
};
pub use engine::age_on;
pub use error::{Error, Result, RowError};
pub use passenger::{Assignment, Category, CategoryHint, DateOrder, Gender, NameOrder, ParsedPassenger, RawPassenger};
pub use rules::date::helpers::render::six_char_date;

/// Largest number of rows a caller is expected to submit in one run.
///
/// The library itself processes whatever it is given; the CLI enforces the cap.
pub const MAX_ROWS: usize = 10;

// --- Internal types ---------------------------------------------------------

pub(crate) type Production = Box<dyn Fn(&[&str], DateOrder) -> Option<NaiveDate> + Send + Sync>;

/// A date-format rule: a name, an anchored regex over the whole fragment,
/// a coarse bucket requirement and a `production` that turns the capture
/// groups into a calendar date.
///
/// `groups[0]` is the full match; `groups[1..]` are the capture groups in
/// pattern order. Groups that did not participate are passed as `""`.
pub(crate) struct DateRule {
    pub name: &'static str,
    pub pattern: &'static Regex,
    /// Buckets that must all be present in the fragment for this rule to run.
    pub buckets: u32,
    pub production: Production,
}

impl std::fmt::Debug for DateRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("production", &"<function>")
            .field("buckets", &self.buckets)
            .finish()
    }
}

/// A date found by a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateMatch {
    pub date: NaiveDate,
    /// Name of the rule that produced the date.
    pub rule: &'static str,
}
