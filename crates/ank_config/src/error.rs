//! Error types for configuration and catalog loading.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ank_base::NumerologyError;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// A file could not be read.
    Io(String),
    /// TOML could not be parsed into the settings schema.
    Parse(String),
    /// A catalog file could not be decoded.
    Catalog(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Catalog(msg) => write!(f, "catalog error: {msg}"),
        }
    }
}

impl Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<NumerologyError> for ConfigError {
    fn from(e: NumerologyError) -> Self {
        Self::Catalog(e.to_string())
    }
}
