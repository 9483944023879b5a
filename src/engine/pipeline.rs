//! The full run: rows in, rendered blocks out.
//!
//! ```text
//! (0) reference date      -> NaiveDate, or empty output
//! (1) per row             -> blank / ParsedPassenger / RowError
//! (2) sequence + assign   -> seats and guardians
//! (3) render              -> names block, directive block
//! ```
//!
//! Dropped rows are logged at `debug` level and kept in the run's outcomes;
//! they never affect the rendered text of the rows that did parse.

use chrono::NaiveDate;
use tracing::debug;

use super::classify::classify;
use super::locate::locate_date;
use super::recognizer::Recognizer;
use super::render::{directive_block, names_block};
use super::segment::{segment_name, split_email};
use super::sequence::assign;
use crate::rules::date::helpers::render::six_char_date;
use crate::{Assignment, Context, DateRule, Options, Output, ParsedPassenger, RawPassenger, RowError, RowOutcome};

/// Pipeline output bundled with per-row diagnostics.
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub output: Output,
    /// Parsed reference date; `None` means the whole run was suppressed.
    pub reference: Option<NaiveDate>,
    /// One entry per input row, in row order. Empty when `reference` is `None`.
    pub outcomes: Vec<RowOutcome>,
    /// Date rules that produced each accepted date, in row order.
    pub fired_rules: Vec<&'static str>,
}

/// Runs the parse → classify → sequence → render pipeline over a set of rows.
#[derive(Debug)]
pub struct Pipeline<'a> {
    rows: &'a [RawPassenger],
    recognizer: Recognizer<'a>,
}

enum Slot {
    Blank,
    Passenger(usize),
    Dropped(RowError),
}

impl<'a> Pipeline<'a> {
    pub fn new(rows: &'a [RawPassenger], rules: &'a [DateRule]) -> Self {
        Self { rows, recognizer: Recognizer::new(rules) }
    }

    pub fn run(&self, context: &Context, options: &Options) -> Output {
        self.run_with_details(context, options).output
    }

    pub fn run_with_details(&self, context: &Context, options: &Options) -> RunResult {
        let reference = match context.reference_with(options.date_order, &self.recognizer) {
            Ok(date) => date,
            Err(err) => {
                debug!(%err, "reference date unusable, output suppressed");
                return RunResult::default();
            }
        };

        let mut passengers = Vec::new();
        let mut slots = Vec::with_capacity(self.rows.len());
        let mut fired_rules = Vec::new();

        for (idx, raw) in self.rows.iter().enumerate() {
            if raw.is_blank() {
                slots.push(Slot::Blank);
                continue;
            }
            match self.parse_row(raw, reference, options) {
                Ok((passenger, rule)) => {
                    slots.push(Slot::Passenger(passengers.len()));
                    passengers.push(passenger);
                    fired_rules.push(rule);
                }
                Err(reason) => {
                    debug!(row = idx + 1, text = raw.text.as_str(), %reason, "dropping row");
                    slots.push(Slot::Dropped(reason));
                }
            }
        }

        assign(&mut passengers);

        let output =
            Output { names: names_block(&passengers), directives: directive_block(&passengers, options.child_directives) };
        let outcomes = slots
            .into_iter()
            .map(|slot| match slot {
                Slot::Blank => RowOutcome::Blank,
                Slot::Passenger(i) => RowOutcome::Parsed(passengers[i].clone()),
                Slot::Dropped(reason) => RowOutcome::Dropped(reason),
            })
            .collect();

        RunResult { output, reference: Some(reference), outcomes, fired_rules }
    }

    fn parse_row(
        &self,
        raw: &RawPassenger,
        reference: NaiveDate,
        options: &Options,
    ) -> Result<(ParsedPassenger, &'static str), RowError> {
        let (text, email) = split_email(&raw.text);
        let located = locate_date(text, options.date_order, &self.recognizer).ok_or(RowError::NoDate)?;
        let (first_name, last_name) = segment_name(&located.rest, options.name_order)?;
        let (age, category) = classify(raw.category, located.date, reference);

        let passenger = ParsedPassenger {
            first_name,
            last_name,
            birth_date: located.date,
            birth_code: six_char_date(located.date),
            email: email.map(str::to_string),
            gender: raw.gender,
            category,
            age,
            assignment: Assignment::Pending,
        };
        Ok((passenger, located.rule))
    }
}
