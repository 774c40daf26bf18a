//! Maha periods: multi-year spans starting at birth.
//!
//! The first period carries the Basic number and lasts that many years; each
//! following period carries the next number (9 wraps to 1) and lasts its own
//! number of years. The cursor advances by chained year additions, so a
//! leap-day birth drifts to 1 March after the first common year.

use ank_time::{BirthDate, add_days, add_years, parse_date};
use chrono::NaiveDate;

use super::types::{DashaLevel, DashaPeriod, MAX_PERIODS_PER_LEVEL, TilerConfig};
use crate::core_numbers::basic_number;
use crate::reduce::next_number;

/// Maha timeline from birth until the cursor reaches birth + horizon.
///
/// Empty when the birth date cannot be placed on the calendar.
pub fn maha_timeline(dob: &BirthDate, config: &TilerConfig) -> Vec<DashaPeriod> {
    let Some(birth) = dob.to_naive() else {
        return Vec::new();
    };
    maha_from(birth, basic_number(dob), config.horizon_years)
}

/// [`maha_timeline`] for a raw date string; empty when it does not parse.
pub fn maha_timeline_for_dob(dob: &str, config: &TilerConfig) -> Vec<DashaPeriod> {
    parse_date(dob)
        .map(|d| maha_timeline(&d, config))
        .unwrap_or_default()
}

fn maha_from(birth: NaiveDate, first: u8, horizon_years: u32) -> Vec<DashaPeriod> {
    let Some(horizon) = i32::try_from(horizon_years)
        .ok()
        .and_then(|h| add_years(birth, h))
    else {
        return Vec::new();
    };

    let mut periods = Vec::new();
    let mut number = first;
    let mut cursor = birth;
    while cursor < horizon && periods.len() < MAX_PERIODS_PER_LEVEL {
        let Some(next) = add_years(cursor, i32::from(number.max(1))) else {
            break;
        };
        debug_assert!(next > cursor, "maha period must move forward");
        let end = add_days(next, -1).map_or(cursor, |e| e.max(cursor));
        periods.push(DashaPeriod {
            number,
            start: cursor,
            end,
            level: DashaLevel::Maha,
            order: periods.len() as u32 + 1,
            year: None,
        });
        cursor = next;
        number = next_number(number);
    }
    log::debug!("maha timeline from {birth}: {} periods", periods.len());
    periods
}
