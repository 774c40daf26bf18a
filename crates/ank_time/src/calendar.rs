//! Civil calendar arithmetic with roll-over semantics.
//!
//! Out-of-range day or month values carry into the next unit instead of
//! failing, so `(1990, 4, 31)` is 1990-05-01 and adding one year to
//! 2000-02-29 lands on 2001-03-01. Timelines are tiled with these rules.

use chrono::{Datelike, Days, NaiveDate};

/// Gregorian leap-year test.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Date for (year, month, day) where month and day may overflow.
///
/// Day 0 is the last day of the previous month. `None` only when the result
/// leaves chrono's representable range.
pub fn civil_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let months = i64::from(year) * 12 + i64::from(month) - 1;
    let y = i32::try_from(months.div_euclid(12)).ok()?;
    let m = u32::try_from(months.rem_euclid(12)).ok()? + 1;
    let first = NaiveDate::from_ymd_opt(y, m, 1)?;
    if day == 0 {
        first.checked_sub_days(Days::new(1))
    } else {
        first.checked_add_days(Days::new(u64::from(day) - 1))
    }
}

/// Shift by whole years keeping month and day, rolling 29 Feb forward to
/// 1 Mar when the target year is not a leap year.
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    civil_date(date.year().checked_add(years)?, date.month(), date.day())
}

/// Shift by a signed number of days.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Inclusive day count of `[start, end]`.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn civil_date_plain() {
        assert_eq!(civil_date(1987, 4, 22), Some(ymd(1987, 4, 22)));
    }

    #[test]
    fn civil_date_rolls_day() {
        assert_eq!(civil_date(1990, 4, 31), Some(ymd(1990, 5, 1)));
        assert_eq!(civil_date(2001, 2, 29), Some(ymd(2001, 3, 1)));
    }

    #[test]
    fn civil_date_rolls_month() {
        assert_eq!(civil_date(1990, 13, 1), Some(ymd(1991, 1, 1)));
        assert_eq!(civil_date(1990, 3, 0), Some(ymd(1990, 2, 28)));
    }

    #[test]
    fn add_years_leap_day() {
        assert_eq!(add_years(ymd(2000, 2, 29), 4), Some(ymd(2004, 2, 29)));
        assert_eq!(add_years(ymd(2000, 2, 29), 1), Some(ymd(2001, 3, 1)));
    }

    #[test]
    fn add_days_both_directions() {
        assert_eq!(add_days(ymd(2024, 1, 1), -1), Some(ymd(2023, 12, 31)));
        assert_eq!(add_days(ymd(2024, 2, 28), 1), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 9), 30);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn inclusive_day_count() {
        assert_eq!(inclusive_days(ymd(2024, 1, 1), ymd(2024, 1, 1)), 1);
        assert_eq!(inclusive_days(ymd(2024, 1, 1), ymd(2024, 12, 31)), 366);
    }
}
