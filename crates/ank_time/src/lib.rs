//! Birth-date parsing and civil calendar arithmetic.
//!
//! This crate provides:
//! - `BirthDate`, the raw day/month/year triple entered by a user
//! - A lenient parser for `DD/MM/YYYY`, `DD-MM-YYYY` and `YYYY-MM-DD`
//! - Roll-over date construction and year/day shifting used to tile timelines

pub mod birth_date;
pub mod calendar;
pub mod error;

pub use birth_date::{BirthDate, parse_date};
pub use calendar::{add_days, add_years, civil_date, days_in_month, inclusive_days, is_leap_year};
pub use error::DateError;

pub use chrono::NaiveDate;
