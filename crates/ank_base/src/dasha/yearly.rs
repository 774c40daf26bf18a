//! Yearly periods: one per dasha year, birthday to the day before the next.

use ank_time::{BirthDate, add_days, civil_date, parse_date};
use chrono::NaiveDate;

use super::types::{DashaLevel, DashaPeriod, TilerConfig, weekday_digit};
use crate::core_numbers::basic_number;
use crate::reduce::reduce_to_digit;

/// Inclusive bounds of the dasha year that starts on the birthday in `year`.
///
/// Birthdays that do not exist in `year` roll over (29 Feb becomes 1 Mar).
pub fn dasha_year_span(dob: &BirthDate, year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let start = civil_date(year, dob.month, dob.day)?;
    let next = civil_date(year.checked_add(1)?, dob.month, dob.day)?;
    debug_assert!(next > start, "dasha year must have positive length");
    let end = add_days(next, -1)?.max(start);
    Some((start, end))
}

/// Yearly number for `year`: Basic + birth month + last two digits of the
/// year + weekday digit of the year's start, reduced.
pub fn yearly_number(dob: &BirthDate, year: i32, start: NaiveDate) -> u8 {
    let sum = u64::from(basic_number(dob))
        + u64::from(dob.month)
        + u64::from(year.rem_euclid(100).unsigned_abs())
        + u64::from(weekday_digit(start));
    reduce_to_digit(sum)
}

/// The Yearly period for one dasha year.
pub fn yearly_period(dob: &BirthDate, year: i32) -> Option<DashaPeriod> {
    let first_year = dob.year;
    let (start, end) = dasha_year_span(dob, year)?;
    Some(DashaPeriod {
        number: yearly_number(dob, year, start),
        start,
        end,
        level: DashaLevel::Yearly,
        order: u32::try_from(year - first_year + 1).unwrap_or(0),
        year: Some(year),
    })
}

/// Yearly periods for `from_year..=to_year`.
pub fn yearly_timeline(dob: &BirthDate, from_year: i32, to_year: i32) -> Vec<DashaPeriod> {
    let periods: Vec<DashaPeriod> = (from_year..=to_year)
        .map_while(|y| yearly_period(dob, y))
        .collect();
    log::debug!("yearly timeline {from_year}..={to_year}: {} periods", periods.len());
    periods
}

/// Yearly periods from the birth year through birth year + horizon.
pub fn yearly_timeline_default(dob: &BirthDate, config: &TilerConfig) -> Vec<DashaPeriod> {
    let horizon = i32::try_from(config.horizon_years).unwrap_or(i32::MAX);
    yearly_timeline(dob, dob.year, dob.year.saturating_add(horizon))
}

/// [`yearly_timeline_default`] for a raw date string; empty when it does not parse.
pub fn yearly_timeline_for_dob(dob: &str, config: &TilerConfig) -> Vec<DashaPeriod> {
    parse_date(dob)
        .map(|d| yearly_timeline_default(&d, config))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn span_is_birthday_to_birthday() {
        let dob = BirthDate::new(22, 4, 1987);
        assert_eq!(
            dasha_year_span(&dob, 2024),
            Some((ymd(2024, 4, 22), ymd(2025, 4, 21)))
        );
    }

    #[test]
    fn number_formula() {
        let dob = BirthDate::new(22, 4, 1987);
        // 2024-04-22 is a Monday (2): 4 + 4 + 24 + 2 = 34 -> 7
        let p = yearly_period(&dob, 2024).unwrap();
        assert_eq!(p.number, 7);
        assert_eq!(p.year, Some(2024));
        assert_eq!(p.order, 38);
    }

    #[test]
    fn leap_day_birthday_rolls_over() {
        let dob = BirthDate::new(29, 2, 2000);
        let (start, end) = dasha_year_span(&dob, 2001).unwrap();
        assert_eq!(start, ymd(2001, 3, 1));
        assert_eq!(end, ymd(2002, 2, 28));
        let (start, end) = dasha_year_span(&dob, 2003).unwrap();
        assert_eq!(start, ymd(2003, 3, 1));
        assert_eq!(end, ymd(2004, 2, 28));
        assert_eq!(dasha_year_span(&dob, 2004).unwrap().0, ymd(2004, 2, 29));
    }

    #[test]
    fn default_range_is_horizon_plus_one_years() {
        let dob = BirthDate::new(1, 6, 1990);
        let t = yearly_timeline_default(&dob, &TilerConfig::default());
        assert_eq!(t.len(), 121);
        assert_eq!(t[0].year, Some(1990));
        assert_eq!(t[120].year, Some(2110));
    }
}
