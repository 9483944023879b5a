//! Date-of-birth rules.
//!
//! Each supported written form is one `DateRule`; `rules::get` returns them in
//! precedence order. `trailing` holds the end-anchored search patterns used to
//! pull a date off the end of a longer row.

pub mod helpers;
pub mod predicates;
pub mod rules;
mod rules_named;
mod rules_numeric;
