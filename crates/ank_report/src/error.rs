//! Error types for report building and narrative generation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ank_base::NumerologyError;
use ank_config::ConfigError;
use ank_time::DateError;

/// Errors from validating input and building a report.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ReportError {
    /// A required field is empty.
    IncompleteInput(&'static str),
    /// Name has the wrong length or disallowed characters.
    InvalidName(String),
    /// Date of birth failed to parse or is not a real date in range.
    Date(DateError),
    Numerology(NumerologyError),
    Config(ConfigError),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompleteInput(field) => write!(f, "missing input: {field}"),
            Self::InvalidName(msg) => write!(f, "invalid name: {msg}"),
            Self::Date(e) => write!(f, "date error: {e}"),
            Self::Numerology(e) => write!(f, "numerology error: {e}"),
            Self::Config(e) => write!(f, "config error: {e}"),
        }
    }
}

impl Error for ReportError {}

impl From<DateError> for ReportError {
    fn from(e: DateError) -> Self {
        Self::Date(e)
    }
}

impl From<NumerologyError> for ReportError {
    fn from(e: NumerologyError) -> Self {
        Self::Numerology(e)
    }
}

impl From<ConfigError> for ReportError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Failure of the external text generator. Recovered by falling back to
/// deterministic text; never surfaces from report building.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerationError {
    Failed(String),
    Timeout,
    /// Superseded by a newer request.
    Aborted,
}

impl Display for GenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failed(msg) => write!(f, "text generation failed: {msg}"),
            Self::Timeout => f.write_str("text generation timed out"),
            Self::Aborted => f.write_str("text generation aborted"),
        }
    }
}

impl Error for GenerationError {}
