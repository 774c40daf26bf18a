//! Per-birth-date dasha calendar with lazily built Monthly/Daily years.
//!
//! Maha and Yearly timelines are built once, up front. Monthly and Daily
//! periods exist only per year and are built the first time a date in that
//! year is queried, then shared through an `Arc`. Only years covered by the
//! Yearly timeline are ever built, which bounds the cache.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use ank_base::dasha::{
    daily_from_monthly, monthly_timeline, selected_year, snapshot_from_timelines, yearly_for_year,
};
use ank_base::{DashaPeriod, DashaSnapshot, DashaTimelines, TilerConfig};
use ank_time::BirthDate;
use chrono::NaiveDate;

/// Monthly and Daily periods of one dasha year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearPeriods {
    pub year: i32,
    pub monthly: Vec<DashaPeriod>,
    pub daily: Vec<DashaPeriod>,
}

impl YearPeriods {
    pub fn build(dob: &BirthDate, year: i32) -> Self {
        let monthly = monthly_timeline(dob, year);
        let daily = daily_from_monthly(&monthly, year);
        Self { year, monthly, daily }
    }
}

#[derive(Debug)]
pub struct DashaCalendar {
    dob: BirthDate,
    timelines: DashaTimelines,
    years: Mutex<BTreeMap<i32, Arc<YearPeriods>>>,
}

impl DashaCalendar {
    pub fn new(dob: BirthDate, config: &TilerConfig) -> Self {
        Self {
            dob,
            timelines: DashaTimelines::build(&dob, config),
            years: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn dob(&self) -> &BirthDate {
        &self.dob
    }

    pub fn maha(&self) -> &[DashaPeriod] {
        &self.timelines.maha
    }

    pub fn yearly(&self) -> &[DashaPeriod] {
        &self.timelines.yearly
    }

    /// Monthly and Daily periods for the dasha year starting on the `year`
    /// birthday.
    /// `None` outside the Yearly timeline.
    pub fn year(&self, year: i32) -> Option<Arc<YearPeriods>> {
        yearly_for_year(self.yearly(), year)?;
        // A panic while building cannot leave a half-inserted entry, so a
        // poisoned map is still consistent.
        let mut years = self.years.lock().unwrap_or_else(PoisonError::into_inner);
        Some(Arc::clone(years.entry(year).or_insert_with(|| {
            log::debug!("building monthly/daily periods for dasha year {year}");
            Arc::new(YearPeriods::build(&self.dob, year))
        })))
    }

    /// Number of years built so far.
    pub fn cached_years(&self) -> usize {
        self.years.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Active periods at every level on `date`. Monthly and Daily come from
    /// the calendar year of `date`; before that year's birthday they are
    /// `None`.
    pub fn snapshot(&self, date: NaiveDate) -> DashaSnapshot {
        let maha = self.maha();
        let yearly = self.yearly();
        match selected_year(yearly, date).and_then(|y| self.year(y)) {
            Some(periods) => {
                snapshot_from_timelines(maha, yearly, &periods.monthly, &periods.daily, date)
            }
            None => snapshot_from_timelines(maha, yearly, &[], &[], date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ank_base::dasha::dasha_snapshot;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn matches_uncached_snapshot() {
        let dob = BirthDate::new(22, 4, 1987);
        let cal = DashaCalendar::new(dob, &TilerConfig::default());
        for date in [ymd(1987, 4, 22), ymd(2024, 4, 21), ymd(2024, 4, 22), ymd(2030, 12, 31)] {
            assert_eq!(
                cal.snapshot(date),
                dasha_snapshot(&dob, cal.maha(), cal.yearly(), date)
            );
        }
    }

    #[test]
    fn years_are_memoized() {
        let cal = DashaCalendar::new(BirthDate::new(5, 5, 2005), &TilerConfig::default());
        assert_eq!(cal.cached_years(), 0);
        let a = cal.year(2024).unwrap();
        let b = cal.year(2024).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        cal.snapshot(ymd(2024, 6, 1));
        cal.snapshot(ymd(2024, 12, 31));
        assert_eq!(cal.cached_years(), 1);
        // Before the 2025 birthday nothing is built.
        cal.snapshot(ymd(2025, 1, 1));
        assert_eq!(cal.cached_years(), 1);
        cal.snapshot(ymd(2025, 5, 5));
        assert_eq!(cal.cached_years(), 2);
    }

    #[test]
    fn january_before_birthday_has_no_monthly() {
        let cal = DashaCalendar::new(BirthDate::new(5, 5, 2005), &TilerConfig::default());
        let s = cal.snapshot(ymd(2025, 1, 1));
        assert_eq!(s.yearly.unwrap().year, Some(2024));
        assert!(s.monthly.is_none() && s.daily.is_none());
        assert_eq!(cal.snapshot(ymd(2025, 5, 5)).monthly.unwrap().year, Some(2025));
    }

    #[test]
    fn years_outside_horizon_are_not_cached() {
        let cal = DashaCalendar::new(BirthDate::new(5, 5, 2005), &TilerConfig { horizon_years: 10 });
        assert!(cal.year(2004).is_none());
        assert!(cal.year(2016).is_none());
        assert!(cal.year(i32::MAX).is_none());
        assert!(cal.year(2015).is_some());
        assert_eq!(cal.cached_years(), 1);
        let late = cal.snapshot(ymd(2030, 6, 1));
        assert!(late.yearly.is_none() && late.monthly.is_none() && late.daily.is_none());
    }

    #[test]
    fn before_birth_has_no_periods() {
        let cal = DashaCalendar::new(BirthDate::new(5, 5, 2005), &TilerConfig::default());
        let s = cal.snapshot(ymd(2000, 1, 1));
        assert!(s.periods().is_empty());
        assert_eq!(cal.cached_years(), 0);
    }
}
