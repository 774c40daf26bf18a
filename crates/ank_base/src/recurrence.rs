//! Recurring-digit analysis: which repeated digits carry an influence text.

use serde::{Deserialize, Serialize};

use crate::catalog::{EssenceTable, RecurrenceEntry, RecurrenceTable};
use crate::core_numbers::CoreNumbers;
use crate::histogram::DigitHistogram;
use crate::text::Language;

/// Minimum occurrences for a digit to count as recurring.
pub const DEFAULT_MIN_REPEAT: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceOptions {
    pub min_repeat: u32,
    /// Emit a single Destiny-number entry when nothing recurs.
    pub destiny_fallback: bool,
    pub language: Language,
}

impl Default for RecurrenceOptions {
    fn default() -> Self {
        Self {
            min_repeat: DEFAULT_MIN_REPEAT,
            destiny_fallback: true,
            language: Language::English,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceInfluence {
    pub digit: u8,
    pub occurrences: u32,
    pub influence: String,
}

pub fn generated_influence(digit: u8, occurrences: u32) -> String {
    format!("When {digit} repeats {occurrences} times, its influence intensifies.")
}

pub fn destiny_tone(destiny: u8) -> String {
    format!("Destiny number {destiny} sets the overall tone for this chart.")
}

/// Influence entries for every recurring digit, most frequent first
/// (ties by ascending digit).
pub fn analyze_recurrences(
    table: &RecurrenceTable,
    hist: &DigitHistogram,
    core: &CoreNumbers,
    opts: &RecurrenceOptions,
) -> Vec<RecurrenceInfluence> {
    let mut out: Vec<RecurrenceInfluence> = hist
        .iter()
        .filter(|(_, occ)| *occ >= opts.min_repeat)
        .filter_map(|(digit, occ)| {
            let Some(entry) = table.bucket(digit).and_then(|b| b.select(occ)) else {
                log::trace!("no recurrence entry for {digit} x{occ}");
                return None;
            };
            let influence = match entry {
                RecurrenceEntry::Text(text) => text.resolve(opts.language),
                RecurrenceEntry::Rule(rule) => {
                    if !rule.passes(hist, core) {
                        log::trace!("recurrence rule for {digit} x{occ} did not pass");
                        return None;
                    }
                    rule.text
                        .as_ref()
                        .map(|t| t.resolve(opts.language))
                        .filter(|t| !t.is_empty())
                        .unwrap_or_else(|| generated_influence(digit, occ))
                }
            };
            (!influence.is_empty()).then_some(RecurrenceInfluence {
                digit,
                occurrences: occ,
                influence,
            })
        })
        .collect();

    out.sort_by(|a, b| b.occurrences.cmp(&a.occurrences).then(a.digit.cmp(&b.digit)));
    out
}

/// [`analyze_recurrences`], plus the Destiny fallback entry when the
/// analysis is empty and the option is on.
pub fn analyze_with_fallback(
    table: &RecurrenceTable,
    essences: &EssenceTable,
    hist: &DigitHistogram,
    core: &CoreNumbers,
    opts: &RecurrenceOptions,
) -> Vec<RecurrenceInfluence> {
    let out = analyze_recurrences(table, hist, core, opts);
    if !out.is_empty() || !opts.destiny_fallback || !(1..=9).contains(&core.destiny) {
        return out;
    }
    let influence = essences
        .get(core.destiny)
        .map(|t| t.resolve(opts.language))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| destiny_tone(core.destiny));
    vec![RecurrenceInfluence {
        digit: core.destiny,
        occurrences: 1,
        influence,
    }]
}
