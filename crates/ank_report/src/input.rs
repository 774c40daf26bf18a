//! Name and date-of-birth validation ahead of report building.

use ank_time::{BirthDate, parse_date};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;

/// Raw user input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportInput {
    pub name: String,
    pub dob: String,
}

/// Input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedInput {
    pub name: String,
    pub dob: BirthDate,
}

impl ReportInput {
    pub fn new(name: impl Into<String>, dob: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dob: dob.into(),
        }
    }

    /// Validate with the current local year as the upper bound.
    pub fn validate(&self, min_year: i32) -> Result<ValidatedInput, ReportError> {
        self.validate_at(min_year, Local::now().year())
    }

    /// Birth year must lie in `min_year..=max_year` and the date must exist
    /// on the calendar.
    pub fn validate_at(&self, min_year: i32, max_year: i32) -> Result<ValidatedInput, ReportError> {
        let name = self.name.trim();
        let dob = self.dob.trim();
        if name.is_empty() {
            return Err(ReportError::IncompleteInput("name"));
        }
        if dob.is_empty() {
            return Err(ReportError::IncompleteInput("date of birth"));
        }
        validate_name(name)?;

        let date = parse_date(dob)?;
        date.validate_calendar(min_year, max_year)?;
        Ok(ValidatedInput {
            name: name.to_string(),
            dob: date,
        })
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Trimmed name of 2-50 characters: ASCII letters, Devanagari and spaces.
pub fn validate_name(name: &str) -> Result<(), ReportError> {
    let len = name.chars().count();
    if len < NAME_MIN_CHARS {
        return Err(ReportError::InvalidName(format!(
            "must be at least {NAME_MIN_CHARS} characters"
        )));
    }
    if len > NAME_MAX_CHARS {
        return Err(ReportError::InvalidName(format!(
            "cannot exceed {NAME_MAX_CHARS} characters"
        )));
    }
    if !name.chars().all(is_name_char) {
        return Err(ReportError::InvalidName(
            "can only contain letters (English or Hindi) and spaces".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ank_time::DateError;

    #[test]
    fn accepts_english_and_devanagari() {
        let v = ReportInput::new("  Asha Rao ", "22/04/1987").validate_at(1900, 2026).unwrap();
        assert_eq!(v.name, "Asha Rao");
        assert_eq!(v.dob, BirthDate::new(22, 4, 1987));
        assert!(ReportInput::new("आशा राव", "1987-04-22").validate_at(1900, 2026).is_ok());
    }

    #[test]
    fn empty_fields() {
        assert_eq!(
            ReportInput::new(" ", "01/01/2000").validate_at(1900, 2026),
            Err(ReportError::IncompleteInput("name"))
        );
        assert_eq!(
            ReportInput::new("Ravi", "").validate_at(1900, 2026),
            Err(ReportError::IncompleteInput("date of birth"))
        );
    }

    #[test]
    fn bad_names() {
        let long = "a".repeat(51);
        for name in ["R", "R2D2", "O'Neil", long.as_str()] {
            assert!(
                matches!(validate_name(name), Err(ReportError::InvalidName(_))),
                "{name:?}"
            );
        }
        assert!(validate_name(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn bad_dates() {
        let check = |dob: &str| ReportInput::new("Ravi", dob).validate_at(1900, 2026);
        assert!(matches!(check("31/02/1990"), Err(ReportError::Date(DateError::OutOfRange(_)))));
        assert!(matches!(check("01/01/1899"), Err(ReportError::Date(DateError::OutOfRange(_)))));
        assert!(matches!(check("01/01/2027"), Err(ReportError::Date(DateError::OutOfRange(_)))));
        assert!(matches!(
            check("1st May"),
            Err(ReportError::Date(DateError::InvalidDateFormat(_)))
        ));
    }
}
