//! Numeric dasha timelines.
//!
//! Four levels tile time without gaps or overlaps:
//! - Maha: multi-year spans from birth, lengths equal to their numbers
//! - Yearly: birthday-to-birthday dasha years
//! - Monthly: a dasha year split by fixed day counts per number
//! - Daily: one span per day
//!
//! Maha and Yearly are built once over the horizon; Monthly and Daily are
//! built for one dasha year at a time.

pub mod daily;
pub mod maha;
pub mod monthly;
pub mod query;
pub mod timelines;
pub mod types;
pub mod yearly;

pub use daily::{daily_from_monthly, daily_timeline, daily_timeline_for_dob};
pub use maha::{maha_timeline, maha_timeline_for_dob};
pub use monthly::{monthly_timeline, monthly_timeline_for_dob};
pub use query::{
    active_period, dasha_snapshot, find_active_period, selected_year, snapshot_from_timelines,
    yearly_for_year,
};
pub use timelines::DashaTimelines;
pub use types::{
    ALL_DASHA_LEVELS, DEFAULT_HORIZON_YEARS, DashaLevel, DashaPeriod, DashaSnapshot, DashaView,
    MAX_PERIODS_PER_LEVEL, MONTHLY_DURATIONS, TilerConfig, WEEKDAY_DIGITS, monthly_duration,
    weekday_digit, weekday_name,
};
pub use yearly::{
    dasha_year_span, yearly_number, yearly_period, yearly_timeline, yearly_timeline_default,
    yearly_timeline_for_dob,
};
