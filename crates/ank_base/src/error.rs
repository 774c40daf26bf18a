//! Error types for numerology calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ank_time::DateError;

/// Errors from numerology base calculations.
///
/// Once a `BirthDate` exists the numeric paths are total; these variants
/// cover raw-string entry points and catalog decoding.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum NumerologyError {
    /// Error from date parsing.
    Date(DateError),
    /// Invalid argument to a calculation.
    InvalidInput(&'static str),
    /// A rule catalog could not be decoded.
    Catalog(String),
}

impl Display for NumerologyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(e) => write!(f, "date error: {e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Catalog(msg) => write!(f, "catalog error: {msg}"),
        }
    }
}

impl Error for NumerologyError {}

impl From<DateError> for NumerologyError {
    fn from(e: DateError) -> Self {
        Self::Date(e)
    }
}

impl From<serde_json::Error> for NumerologyError {
    fn from(e: serde_json::Error) -> Self {
        Self::Catalog(e.to_string())
    }
}
