//! Kundli (Lo Shu style) digit grid and plane analysis.
//!
//! The grid counts the non-zero digits of the zero-padded birth date
//! (`DD` + `MM` + full year), then injects the Destiny number and, for
//! two-digit days not ending in zero, the Basic number.

use ank_time::BirthDate;
use serde::{Deserialize, Serialize};

use crate::core_numbers::CoreNumbers;
use crate::histogram::DigitHistogram;

/// Lo Shu square positions, row-major.
pub const LO_SHU_LAYOUT: [[u8; 3]; 3] = [[3, 1, 9], [6, 7, 5], [2, 8, 4]];

/// Foundational grid for one birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KundliGrid {
    /// Date digits only, before injections.
    pub base: DigitHistogram,
    /// Date digits plus the Destiny and (conditionally) Basic injections.
    pub histogram: DigitHistogram,
    pub core: CoreNumbers,
}

impl KundliGrid {
    /// Counts arranged in [`LO_SHU_LAYOUT`].
    pub fn matrix(&self) -> [[u32; 3]; 3] {
        LO_SHU_LAYOUT.map(|row| row.map(|d| self.histogram.get(d)))
    }
}

/// Padded `DDMMYYYY` digit string the base histogram is counted from.
pub fn date_digit_string(dob: &BirthDate) -> String {
    format!("{:02}{:02}{}", dob.day, dob.month, dob.year)
}

/// Whether the Basic number is injected for this day of birth.
///
/// Days 1-9 already contribute their digit; days 10, 20 and 30 are excluded
/// as well.
pub const fn injects_basic(day: u32) -> bool {
    day > 9 && day % 10 != 0
}

pub fn build_grid(dob: &BirthDate, preserve_masters: bool) -> KundliGrid {
    let core = CoreNumbers::with_masters(dob, preserve_masters);
    let base = DigitHistogram::from_digits(&date_digit_string(dob));

    // with_added ignores master numbers, so only 1-9 land.
    let mut histogram = base.with_added(core.destiny);
    if injects_basic(dob.day) {
        histogram = histogram.with_added(core.basic);
    }

    log::debug!("grid for {dob}: base={:?} final={:?}", base.counts(), histogram.counts());
    KundliGrid {
        base,
        histogram,
        core,
    }
}

/// The three Lo Shu planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plane {
    Physical,
    Mental,
    Emotional,
}

pub const ALL_PLANES: [Plane; 3] = [Plane::Physical, Plane::Mental, Plane::Emotional];

impl Plane {
    pub const fn digits(self) -> [u8; 3] {
        match self {
            Self::Physical => [1, 4, 7],
            Self::Mental => [3, 6, 9],
            Self::Emotional => [2, 5, 8],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Mental => "Mental",
            Self::Emotional => "Emotional",
        }
    }
}

/// Strength of a plane by how many of its three digits are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlaneStatus {
    Missing,
    Weak,
    Balanced,
    Strong,
}

impl PlaneStatus {
    pub const fn from_present(count: usize) -> Self {
        match count {
            0 => Self::Missing,
            1 => Self::Weak,
            2 => Self::Balanced,
            _ => Self::Strong,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Weak => "weak",
            Self::Balanced => "balanced",
            Self::Strong => "strong",
        }
    }
}

/// Present-digit tally for one plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaneReport {
    pub plane: Plane,
    pub present: u8,
    pub status: PlaneStatus,
}

pub fn plane_status(hist: &DigitHistogram, plane: Plane) -> PlaneStatus {
    PlaneStatus::from_present(present_in(hist, plane))
}

fn present_in(hist: &DigitHistogram, plane: Plane) -> usize {
    plane.digits().iter().filter(|d| hist.contains(**d)).count()
}

/// All three planes in Physical, Mental, Emotional order.
pub fn planes(hist: &DigitHistogram) -> [PlaneReport; 3] {
    ALL_PLANES.map(|plane| {
        let present = present_in(hist, plane);
        PlaneReport {
            plane,
            present: present as u8,
            status: PlaneStatus::from_present(present),
        }
    })
}
