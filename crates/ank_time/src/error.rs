//! Error types for date parsing and calendar validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from birth-date parsing or strict calendar validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateError {
    /// Input does not match `DD/MM/YYYY`, `DD-MM-YYYY` or `YYYY-MM-DD`.
    InvalidDateFormat(String),
    /// Parsed fields do not form a real calendar date inside the allowed range.
    OutOfRange(&'static str),
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateFormat(input) => write!(f, "invalid date format: {input:?}"),
            Self::OutOfRange(msg) => write!(f, "date out of range: {msg}"),
        }
    }
}

impl Error for DateError {}
