//! Numerology calculations built on a parsed birth date.
//!
//! This crate provides:
//! - Digit reduction and the Basic/Destiny core numbers
//! - The kundli digit grid with Lo Shu plane analysis
//! - Yoga and recurring-digit evaluation against normalized rule catalogs
//! - Maha/Yearly/Monthly/Daily dasha timelines with date lookup
//! - Overlay of active dasha numbers on the foundational grid
//! - Personal year/month/day cycles
//! - Destiny remedies with cycle-dependent rules
//! - Two-person compatibility keyed by the unordered Destiny pair
//!
//! Once a `BirthDate` exists every computation here is total and pure.

pub mod catalog;
pub mod compatibility;
pub mod core_numbers;
pub mod cycles;
pub mod dasha;
pub mod error;
pub mod grid;
pub mod histogram;
pub mod overlay;
pub mod recurrence;
pub mod reduce;
pub mod remedies;
pub mod text;
pub mod yoga;

pub use catalog::{
    Catalog, CompatibilityEntry, CompatibilityTable, CoreGate, CountSelector, EssenceTable,
    PairKey, RecurrenceEntry, RecurrenceRule, RecurrenceTable, RemedyEntry, RemedyTable,
    YogaCatalog, YogaEntry, YogaRule,
};
pub use compatibility::{Compatibility, compatibility, compatibility_for_numbers};
pub use core_numbers::{CoreNumbers, basic_number, destiny_number};
pub use cycles::{PersonalCycles, personal_day, personal_month, personal_year};
pub use dasha::{
    DashaLevel, DashaPeriod, DashaSnapshot, DashaTimelines, DashaView, TilerConfig,
    find_active_period,
};
pub use error::NumerologyError;
pub use grid::{
    ALL_PLANES, KundliGrid, LO_SHU_LAYOUT, Plane, PlaneReport, PlaneStatus, build_grid,
    plane_status, planes,
};
pub use histogram::DigitHistogram;
pub use overlay::{
    ActiveLayers, FormedYoga, changed_recurrences, compose, compose_without, dynamic_yogas,
};
pub use recurrence::{
    RecurrenceInfluence, RecurrenceOptions, analyze_recurrences, analyze_with_fallback,
};
pub use reduce::{
    asset_vibration, next_number, reduce_digit_string, reduce_to_digit, reduce_with_masters,
};
pub use remedies::{Remedy, saturn_alignment, special_remedies};
pub use text::{Language, LocalizedText};
pub use yoga::{YogaMatch, evaluate_yogas};
