//! Active-period lookup over sorted, contiguous timelines.

use ank_time::BirthDate;
use chrono::{Datelike, NaiveDate};

use super::daily::daily_from_monthly;
use super::monthly::monthly_timeline;
use super::types::{DashaPeriod, DashaSnapshot};

/// Index of the period containing `date` (inclusive at both ends).
///
/// Binary search; `periods` must be sorted and non-overlapping, as every
/// timeline in this crate is.
pub fn find_active_period(periods: &[DashaPeriod], date: NaiveDate) -> Option<usize> {
    let idx = periods.partition_point(|p| p.end < date);
    periods.get(idx).filter(|p| p.contains(date)).map(|_| idx)
}

pub fn active_period(periods: &[DashaPeriod], date: NaiveDate) -> Option<&DashaPeriod> {
    find_active_period(periods, date).map(|i| &periods[i])
}

/// Snapshot from prebuilt timelines. Monthly and Daily are only meaningful
/// for the dasha year they were built for; a date outside it resolves to
/// `None` at those levels.
pub fn snapshot_from_timelines(
    maha: &[DashaPeriod],
    yearly: &[DashaPeriod],
    monthly: &[DashaPeriod],
    daily: &[DashaPeriod],
    date: NaiveDate,
) -> DashaSnapshot {
    DashaSnapshot {
        query_date: Some(date),
        maha: active_period(maha, date).copied(),
        yearly: active_period(yearly, date).copied(),
        monthly: active_period(monthly, date).copied(),
        daily: active_period(daily, date).copied(),
    }
}

/// Yearly period of the dasha year starting in `year`, when the timeline
/// covers it.
pub fn yearly_for_year(yearly: &[DashaPeriod], year: i32) -> Option<&DashaPeriod> {
    let first = yearly.first()?.year?;
    let idx = usize::try_from(year.checked_sub(first)?).ok()?;
    yearly.get(idx).filter(|p| p.year == Some(year))
}

/// Year whose Monthly and Daily periods can hold `date`: the calendar year
/// of `date`, once its birthday has passed. `None` before the birthday and
/// outside the Yearly timeline.
pub fn selected_year(yearly: &[DashaPeriod], date: NaiveDate) -> Option<i32> {
    let year = date.year();
    yearly_for_year(yearly, year)
        .filter(|p| p.start <= date)
        .map(|_| year)
}

/// Full snapshot for `date`. Monthly and Daily are built for the calendar
/// year of `date`, whose dasha year opens on that year's birthday, so a date
/// between 1 January and the birthday has no Monthly or Daily period.
pub fn dasha_snapshot(
    dob: &BirthDate,
    maha: &[DashaPeriod],
    yearly: &[DashaPeriod],
    date: NaiveDate,
) -> DashaSnapshot {
    let Some(year) = selected_year(yearly, date) else {
        return snapshot_from_timelines(maha, yearly, &[], &[], date);
    };
    let monthly = monthly_timeline(dob, year);
    let daily = daily_from_monthly(&monthly, year);
    snapshot_from_timelines(maha, yearly, &monthly, &daily, date)
}
