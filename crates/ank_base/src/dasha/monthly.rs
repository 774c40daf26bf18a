//! Monthly periods: a dasha year split by per-number day counts.

use ank_time::{BirthDate, add_days, parse_date};

use super::types::{DashaLevel, DashaPeriod, MAX_PERIODS_PER_LEVEL, monthly_duration};
use super::yearly::yearly_period;
use crate::reduce::next_number;

/// Monthly periods for the dasha year starting on the birthday in `year`.
///
/// The first period carries that year's Yearly number. Each period lasts
/// [`monthly_duration`] days; the last one is clipped to the year's end.
pub fn monthly_timeline(dob: &BirthDate, year: i32) -> Vec<DashaPeriod> {
    let Some(yearly) = yearly_period(dob, year) else {
        return Vec::new();
    };
    let year_end = yearly.end;

    let mut periods = Vec::new();
    let mut number = yearly.number;
    let mut cursor = yearly.start;
    while cursor <= year_end && periods.len() < MAX_PERIODS_PER_LEVEL {
        let days = i64::from(monthly_duration(number).max(1));
        let Some(full_end) = add_days(cursor, days - 1) else {
            break;
        };
        let end = full_end.min(year_end);
        periods.push(DashaPeriod {
            number,
            start: cursor,
            end,
            level: DashaLevel::Monthly,
            order: periods.len() as u32 + 1,
            year: Some(year),
        });
        let Some(next) = add_days(end, 1) else {
            break;
        };
        cursor = next;
        number = next_number(number);
    }
    log::debug!("monthly timeline for dasha year {year}: {} periods", periods.len());
    periods
}

/// [`monthly_timeline`] for a raw date string; empty when it does not parse.
pub fn monthly_timeline_for_dob(dob: &str, year: i32) -> Vec<DashaPeriod> {
    parse_date(dob)
        .map(|d| monthly_timeline(&d, year))
        .unwrap_or_default()
}
