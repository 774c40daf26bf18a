//! Remedies for a chart: the Destiny number's catalog list plus rules that
//! depend on digit counts and the current personal cycle.

use serde::{Deserialize, Serialize};

use crate::catalog::RemedyTable;
use crate::core_numbers::CoreNumbers;
use crate::cycles::PersonalCycles;
use crate::histogram::DigitHistogram;
use crate::text::Language;

pub const DEFAULT_REMEDY_TITLE: &str = "Remedy";

/// Repeated 8s in a personal year 8.
pub const SATURN_MIN_EIGHTS: u32 = 2;
pub const SATURN_PERSONAL_YEAR: u8 = 8;
pub const SATURN_TITLE: &str = "Saturn Alignment";
pub const SATURN_TEXT: &str = "Avoid over-commitment; ground your routines and practice patience. \
                               Donate food or help elders on Saturdays.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remedy {
    pub title: String,
    pub text: String,
}

/// True when the chart carries at least two 8s and the personal year is 8.
pub fn saturn_alignment(hist: &DigitHistogram, cycles: &PersonalCycles) -> bool {
    hist.get(8) >= SATURN_MIN_EIGHTS && cycles.year == SATURN_PERSONAL_YEAR
}

/// Catalog remedies for the Destiny number in catalog order, then any rule
/// remedies. `hist` is the date-digit histogram before injections.
pub fn special_remedies(
    table: &RemedyTable,
    hist: &DigitHistogram,
    core: &CoreNumbers,
    cycles: &PersonalCycles,
    lang: Language,
) -> Vec<Remedy> {
    let mut out: Vec<Remedy> = table
        .get(core.destiny)
        .iter()
        .filter_map(|entry| {
            let title = entry.title.as_ref().map(|t| t.resolve(lang)).unwrap_or_default();
            let text = entry.text.as_ref().map(|t| t.resolve(lang)).unwrap_or_default();
            if title.is_empty() && text.is_empty() {
                return None;
            }
            Some(Remedy {
                title: if title.is_empty() { DEFAULT_REMEDY_TITLE.to_string() } else { title },
                text,
            })
        })
        .collect();
    if saturn_alignment(hist, cycles) {
        log::debug!("saturn alignment applies in personal year {}", cycles.year);
        out.push(Remedy {
            title: SATURN_TITLE.to_string(),
            text: SATURN_TEXT.to_string(),
        });
    }
    out
}
