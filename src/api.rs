use crate::engine::{self, Recognizer, locate_date};
use crate::error::{Error, Result};
use crate::{DateOrder, DateRule, NameOrder, ParsedPassenger, RawPassenger, RowError};
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use std::fmt;

static DEFAULT_RULES: Lazy<Vec<DateRule>> = Lazy::new(crate::rules::date::rules::get);

/// Run context.
///
/// Holds the reference date (the return-flight date) that ages are computed
/// against. It is kept as text and parsed with the same date rules as the
/// rows; if it does not parse, the run produces no output at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub reference_date: String,
}

impl Context {
    pub fn new(reference_date: impl Into<String>) -> Self {
        Self { reference_date: reference_date.into() }
    }

    /// Parse the reference date with the default rules.
    pub fn reference(&self, order: DateOrder) -> Result<NaiveDate> {
        self.reference_with(order, &Recognizer::new(&DEFAULT_RULES))
    }

    pub(crate) fn reference_with(&self, order: DateOrder, recognizer: &Recognizer<'_>) -> Result<NaiveDate> {
        locate_date(&self.reference_date, order, recognizer)
            .map(|located| located.date)
            .ok_or_else(|| Error::InvalidReferenceDate(self.reference_date.clone()))
    }
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            Self::new("2024-06-01")
        } else {
            Self::new(Local::now().date_naive().format("%Y-%m-%d").to_string())
        }
    }
}

/// Options applied uniformly to every row of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// How all-numeric dates are read.
    pub date_order: DateOrder,
    /// Where the last name sits when a row has no `=` marker.
    pub name_order: NameOrder,
    /// Emit a child directive line per child passenger.
    pub child_directives: bool,
}

/// The two rendered blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    /// Name-entry lines, one per passenger.
    pub names: String,
    /// Document, infant, child and contact directives.
    pub directives: String,
}

impl Output {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.directives.is_empty()
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}", self.names, self.directives)
    }
}

/// What became of one input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Blank,
    Parsed(ParsedPassenger),
    Dropped(RowError),
}

/// Additional details returned by [`generate_verbose_with`].
#[derive(Debug, Clone)]
pub struct GenerateDetails {
    /// Parsed reference date; `None` when it did not parse.
    pub reference: Option<NaiveDate>,
    /// One outcome per input row, in row order.
    pub rows: Vec<RowOutcome>,
    /// Names of the date rules that fired for the parsed rows, in row order.
    pub fired_rules: Vec<String>,
}

/// Result from [`generate_verbose_with`].
#[derive(Debug, Clone)]
pub struct GenerateResultVerbose {
    pub output: Output,
    pub details: GenerateDetails,
}

/// Generate both blocks using today's date as the reference and default [`Options`].
///
/// # Example
/// ```
/// use paxline::{Gender, CategoryHint, RawPassenger, generate};
///
/// let rows = [RawPassenger::new("John Smith 20MAY1993", Gender::Male, CategoryHint::Infer)];
/// let out = generate(&rows);
/// assert!(out.names.starts_with("-1SMITH/JOHN*20MAY93"));
/// ```
pub fn generate(rows: &[RawPassenger]) -> Output {
    generate_with(rows, &Context::default(), &Options::default())
}

/// Generate both blocks with an explicit reference date and options.
///
/// Rows that cannot be parsed are left out silently; an unparsable reference
/// date yields an empty [`Output`].
pub fn generate_with(rows: &[RawPassenger], context: &Context, options: &Options) -> Output {
    engine::Pipeline::new(rows, &DEFAULT_RULES).run(context, options)
}

/// Like [`generate_with`], plus per-row diagnostics.
///
/// The rendered output is identical to what [`generate_with`] returns.
pub fn generate_verbose_with(rows: &[RawPassenger], context: &Context, options: &Options) -> GenerateResultVerbose {
    let run = engine::Pipeline::new(rows, &DEFAULT_RULES).run_with_details(context, options);

    let details = GenerateDetails {
        reference: run.reference,
        rows: run.outcomes,
        fired_rules: run.fired_rules.into_iter().map(str::to_string).collect(),
    };

    GenerateResultVerbose { output: run.output, details }
}

/// Parse a standalone date fragment with the default rules.
///
/// Accepts the same forms as passenger rows, including a date at the end of
/// longer text.
pub fn recognize_date(text: &str, order: DateOrder) -> Option<NaiveDate> {
    locate_date(text, order, &Recognizer::new(&DEFAULT_RULES)).map(|located| located.date)
}
