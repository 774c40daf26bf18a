//! Report orchestration: bridges validated user input, the configured rule
//! catalogs and the pure numerology engine in ank_base.
//!
//! Provides three top-level entry points:
//! - `build_report`: validates name and birth date, then builds the
//!   foundational report with today's personal cycles and remedies
//! - `DashaCalendar::snapshot`: active periods on a date, with Monthly and
//!   Daily years built on demand and cached
//! - `DynamicAnalysis::compute`: the report's grid overlaid with a date's
//!   active dasha numbers
//!
//! `narrative` turns reports into prompts for an external text generator,
//! with deterministic fallbacks.

pub mod calendar;
pub mod dynamic;
pub mod error;
pub mod input;
pub mod narrative;
pub mod report;

pub use calendar::{DashaCalendar, YearPeriods};
pub use dynamic::DynamicAnalysis;
pub use error::{GenerationError, ReportError};
pub use input::{NAME_MAX_CHARS, NAME_MIN_CHARS, ReportInput, ValidatedInput, validate_name};
pub use narrative::{
    Narrative, NarrativeSource, PromptSlot, TextGenerator, Ticket, dynamic_summary,
    format_date, foundational_prompt, join_list, narrate, story_prompt,
};
pub use report::{NumerologyReport, build_report, grid_summary, report_for, report_on};
