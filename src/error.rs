use thiserror::Error;

/// Errors raised at the configuration boundary (reference date, CLI tags).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unrecognised reference date: {0:?}")]
    InvalidReferenceDate(String),
    #[error("invalid {kind}: {value:?}")]
    InvalidTag { kind: &'static str, value: String },
}

/// Why a non-blank row produced no passenger.
///
/// Never escapes the generator; rows that fail are dropped from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("no recognisable date")]
    NoDate,
    #[error("first name is empty")]
    EmptyFirstName,
    #[error("last name is empty")]
    EmptyLastName,
}

pub type Result<T> = std::result::Result<T, Error>;
