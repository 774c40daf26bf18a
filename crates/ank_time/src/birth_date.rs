//! Birth date as entered by the user, plus the lenient parser that produces it.
//!
//! `BirthDate` keeps the raw day/month/year fields exactly as parsed. The
//! parser does not check calendar validity: `31/04/1990` parses fine and
//! rolls over to 1 May 1990 when converted with [`BirthDate::to_naive`].
//! Use [`BirthDate::validate_calendar`] for the strict check.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{civil_date, days_in_month};
use crate::error::DateError;

/// Day, month and year of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BirthDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl BirthDate {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Build from a calendar date (always calendar-valid).
    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }

    /// Calendar date with roll-over semantics (day 31 of a 30-day month is
    /// the 1st of the next month). `None` only outside chrono's range.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        civil_date(self.year, self.month, self.day)
    }

    /// Strict check: month 1-12, day within the month, year within bounds.
    pub fn validate_calendar(&self, min_year: i32, max_year: i32) -> Result<(), DateError> {
        if self.year < min_year || self.year > max_year {
            return Err(DateError::OutOfRange("year outside accepted range"));
        }
        if !(1..=12).contains(&self.month) {
            return Err(DateError::OutOfRange("month must be 1-12"));
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(DateError::OutOfRange("day does not exist in that month"));
        }
        Ok(())
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl FromStr for BirthDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}

/// Parse `DD/MM/YYYY`, `DD-MM-YYYY` or `YYYY-MM-DD`.
///
/// Day and month take one or two digits. In the day-first forms the year may
/// have two digits, which are expanded by prefixing "20". Both separators
/// must be the same character. Zero day, month or year is rejected.
pub fn parse_date(input: &str) -> Result<BirthDate, DateError> {
    let invalid = || DateError::InvalidDateFormat(input.to_string());
    let s = input.trim();

    let sep = s.chars().find(|c| *c == '/' || *c == '-').ok_or_else(invalid)?;
    let parts: Vec<&str> = s.split(sep).collect();
    if parts.len() != 3
        || parts
            .iter()
            .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(invalid());
    }

    let short = |p: &str| (1..=2).contains(&p.len());
    let (day_s, month_s, year) = if sep == '-' && parts[0].len() == 4 {
        if !short(parts[1]) || !short(parts[2]) {
            return Err(invalid());
        }
        (parts[2], parts[1], parts[0].to_string())
    } else {
        if !short(parts[0]) || !short(parts[1]) {
            return Err(invalid());
        }
        let year = match parts[2].len() {
            2 => format!("20{}", parts[2]),
            4 => parts[2].to_string(),
            _ => return Err(invalid()),
        };
        (parts[0], parts[1], year)
    };

    let day: u32 = day_s.parse().map_err(|_| invalid())?;
    let month: u32 = month_s.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    if day == 0 || month == 0 || year == 0 {
        return Err(invalid());
    }

    Ok(BirthDate { day, month, year })
}
