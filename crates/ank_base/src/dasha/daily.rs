//! Daily periods: one span per day of a dasha year.

use ank_time::{BirthDate, add_days, parse_date};

use super::monthly::monthly_timeline;
use super::types::{DashaLevel, DashaPeriod, MAX_PERIODS_PER_LEVEL, weekday_digit};
use crate::reduce::reduce_to_digit;

/// Daily periods for the dasha year starting on the birthday in `year`.
///
/// Each day's number is the Monthly number covering it plus the day's
/// weekday digit, reduced.
pub fn daily_timeline(dob: &BirthDate, year: i32) -> Vec<DashaPeriod> {
    daily_from_monthly(&monthly_timeline(dob, year), year)
}

/// Daily periods over an already built Monthly timeline.
pub fn daily_from_monthly(monthly: &[DashaPeriod], year: i32) -> Vec<DashaPeriod> {
    let mut periods = Vec::new();
    for m in monthly {
        let mut day = m.start;
        while day <= m.end && periods.len() < MAX_PERIODS_PER_LEVEL {
            periods.push(DashaPeriod {
                number: reduce_to_digit(u64::from(m.number) + u64::from(weekday_digit(day))),
                start: day,
                end: day,
                level: DashaLevel::Daily,
                order: periods.len() as u32 + 1,
                year: Some(year),
            });
            let Some(next) = add_days(day, 1) else {
                break;
            };
            day = next;
        }
    }
    log::debug!("daily timeline for dasha year {year}: {} days", periods.len());
    periods
}

/// [`daily_timeline`] for a raw date string; empty when it does not parse.
pub fn daily_timeline_for_dob(dob: &str, year: i32) -> Vec<DashaPeriod> {
    parse_date(dob)
        .map(|d| daily_timeline(&d, year))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::yearly::dasha_year_span;

    #[test]
    fn one_entry_per_day() {
        let dob = BirthDate::new(22, 4, 1987);
        let t = daily_timeline(&dob, 2024);
        let (start, end) = dasha_year_span(&dob, 2024).unwrap();
        assert_eq!(t.first().unwrap().start, start);
        assert_eq!(t.last().unwrap().end, end);
        assert_eq!(t.len() as i64, (end - start).num_days() + 1);
    }

    #[test]
    fn number_is_monthly_plus_weekday() {
        let dob = BirthDate::new(22, 4, 1987);
        let monthly = monthly_timeline(&dob, 2024);
        let daily = daily_from_monthly(&monthly, 2024);
        let first = daily[0];
        let expected = reduce_to_digit(u64::from(monthly[0].number) + u64::from(weekday_digit(first.start)));
        assert_eq!(first.number, expected);
        assert!(daily.iter().all(|d| (1..=9).contains(&d.number)));
    }

    #[test]
    fn unparseable_is_empty() {
        assert!(daily_timeline_for_dob("31/31", 2024).is_empty());
    }
}
