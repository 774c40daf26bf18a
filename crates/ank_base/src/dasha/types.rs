//! Core types for the numeric dasha (period) timelines.
//!
//! Four nested levels partition time: Maha periods span years of life,
//! Yearly periods run birthday to birthday, Monthly periods subdivide a dasha
//! year by fixed day counts, and Daily periods cover single days.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Default horizon for Maha and Yearly timelines.
pub const DEFAULT_HORIZON_YEARS: u32 = 120;

/// Hard cap on periods per timeline.
pub const MAX_PERIODS_PER_LEVEL: usize = 100_000;

/// Monthly period length in days, indexed by number - 1.
pub const MONTHLY_DURATIONS: [u32; 9] = [8, 16, 24, 32, 41, 49, 57, 64, 74];

/// Weekday digit, indexed Sunday..Saturday.
pub const WEEKDAY_DIGITS: [u8; 7] = [1, 2, 9, 5, 3, 6, 8];

/// Monthly duration for `number`; out-of-range numbers get the shortest span.
pub fn monthly_duration(number: u8) -> u32 {
    match number {
        1..=9 => MONTHLY_DURATIONS[number as usize - 1],
        _ => MONTHLY_DURATIONS[0],
    }
}

pub fn weekday_digit(date: NaiveDate) -> u8 {
    WEEKDAY_DIGITS[date.weekday().num_days_from_sunday() as usize]
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// The four timeline levels, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DashaLevel {
    Maha = 0,
    Yearly = 1,
    Monthly = 2,
    Daily = 3,
}

pub const ALL_DASHA_LEVELS: [DashaLevel; 4] = [
    DashaLevel::Maha,
    DashaLevel::Yearly,
    DashaLevel::Monthly,
    DashaLevel::Daily,
];

impl DashaLevel {
    pub fn from_u8(v: u8) -> Option<Self> {
        ALL_DASHA_LEVELS.get(v as usize).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Maha => "Maha",
            Self::Yearly => "Yearly",
            Self::Monthly => "Monthly",
            Self::Daily => "Daily",
        }
    }

    /// Lowercase key, as used for `formed_by` lists.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Maha => "maha",
            Self::Yearly => "yearly",
            Self::Monthly => "monthly",
            Self::Daily => "daily",
        }
    }

    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Maha => Some(Self::Yearly),
            Self::Yearly => Some(Self::Monthly),
            Self::Monthly => Some(Self::Daily),
            Self::Daily => None,
        }
    }
}

/// Which levels feed the dynamic grid. A view includes its own level and
/// every level above it.
pub type DashaView = DashaLevel;

/// One numbered span of a timeline. Both ends are inclusive whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashaPeriod {
    /// Ruling number, 1..=9.
    pub number: u8,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub level: DashaLevel,
    /// 1-indexed position within its timeline.
    pub order: u32,
    /// Dasha year (birthday-to-birthday) for Yearly, Monthly and Daily spans.
    pub year: Option<i32>,
}

impl DashaPeriod {
    /// Length in whole days, counting both ends.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Timeline construction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilerConfig {
    pub horizon_years: u32,
}

impl Default for TilerConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

/// Active period at each level for one date. A level is `None` when the date
/// falls outside that timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashaSnapshot {
    pub query_date: Option<NaiveDate>,
    pub maha: Option<DashaPeriod>,
    pub yearly: Option<DashaPeriod>,
    pub monthly: Option<DashaPeriod>,
    pub daily: Option<DashaPeriod>,
}

impl DashaSnapshot {
    pub fn get(&self, level: DashaLevel) -> Option<&DashaPeriod> {
        match level {
            DashaLevel::Maha => self.maha.as_ref(),
            DashaLevel::Yearly => self.yearly.as_ref(),
            DashaLevel::Monthly => self.monthly.as_ref(),
            DashaLevel::Daily => self.daily.as_ref(),
        }
    }

    /// Present periods, outermost first.
    pub fn periods(&self) -> Vec<DashaPeriod> {
        ALL_DASHA_LEVELS
            .iter()
            .filter_map(|l| self.get(*l).copied())
            .collect()
    }
}
