//! Personal year, month and day numbers for a calendar date.

use ank_time::BirthDate;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::reduce::reduce_to_digit;

pub fn personal_year(dob: &BirthDate, on: NaiveDate) -> u8 {
    reduce_to_digit(
        u64::from(dob.day) + u64::from(dob.month) + u64::from(on.year().unsigned_abs()),
    )
}

pub fn personal_month(dob: &BirthDate, on: NaiveDate) -> u8 {
    reduce_to_digit(u64::from(personal_year(dob, on)) + u64::from(on.month()))
}

pub fn personal_day(dob: &BirthDate, on: NaiveDate) -> u8 {
    reduce_to_digit(u64::from(personal_month(dob, on)) + u64::from(on.day()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalCycles {
    pub on: NaiveDate,
    pub year: u8,
    pub month: u8,
    pub day: u8,
}

impl PersonalCycles {
    pub fn on(dob: &BirthDate, on: NaiveDate) -> Self {
        Self {
            on,
            year: personal_year(dob, on),
            month: personal_month(dob, on),
            day: personal_day(dob, on),
        }
    }
}
