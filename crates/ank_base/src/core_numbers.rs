//! Basic and Destiny numbers derived from a birth date.

use ank_time::{BirthDate, parse_date};
use serde::{Deserialize, Serialize};

use crate::error::NumerologyError;
use crate::reduce::reduce_with_masters;

/// Basic number: reduced day of birth.
pub fn basic_number(dob: &BirthDate) -> u8 {
    reduce_with_masters(u64::from(dob.day), false)
}

/// Destiny number: reduced sum of day, month and full year.
pub fn destiny_number(dob: &BirthDate) -> u8 {
    reduce_with_masters(destiny_sum(dob), false)
}

fn destiny_sum(dob: &BirthDate) -> u64 {
    u64::from(dob.day) + u64::from(dob.month) + u64::from(dob.year.unsigned_abs())
}

/// The pair of identity numbers every analysis keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoreNumbers {
    pub basic: u8,
    pub destiny: u8,
}

impl CoreNumbers {
    pub fn from_date(dob: &BirthDate) -> Self {
        Self::with_masters(dob, false)
    }

    /// Same as [`from_date`](Self::from_date) but keeps 11/22/33 unreduced
    /// when `preserve_masters` is set.
    pub fn with_masters(dob: &BirthDate, preserve_masters: bool) -> Self {
        Self {
            basic: reduce_with_masters(u64::from(dob.day), preserve_masters),
            destiny: reduce_with_masters(destiny_sum(dob), preserve_masters),
        }
    }

    pub fn from_dob_str(dob: &str) -> Result<Self, NumerologyError> {
        Ok(Self::from_date(&parse_date(dob)?))
    }
}
