//! Maha and Yearly timelines built together for one birth date.

use ank_time::{BirthDate, parse_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::maha::maha_timeline;
use super::query::dasha_snapshot;
use super::types::{DashaPeriod, DashaSnapshot, TilerConfig};
use super::yearly::yearly_timeline_default;

/// The long-horizon timelines. Monthly and Daily are built per dasha year
/// on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashaTimelines {
    pub maha: Vec<DashaPeriod>,
    pub yearly: Vec<DashaPeriod>,
}

impl DashaTimelines {
    pub fn build(dob: &BirthDate, config: &TilerConfig) -> Self {
        Self {
            maha: maha_timeline(dob, config),
            yearly: yearly_timeline_default(dob, config),
        }
    }

    /// Empty timelines when `dob` does not parse.
    pub fn for_dob(dob: &str, config: &TilerConfig) -> Self {
        parse_date(dob)
            .map(|d| Self::build(&d, config))
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.maha.is_empty() && self.yearly.is_empty()
    }

    pub fn snapshot(&self, dob: &BirthDate, date: NaiveDate) -> DashaSnapshot {
        dasha_snapshot(dob, &self.maha, &self.yearly, date)
    }
}
