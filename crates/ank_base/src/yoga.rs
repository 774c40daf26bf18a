//! Yoga evaluation against a digit histogram.

use serde::{Deserialize, Serialize};

use crate::catalog::{YogaCatalog, YogaEntry};
use crate::core_numbers::CoreNumbers;
use crate::histogram::DigitHistogram;
use crate::text::Language;

/// A yoga that holds for a histogram, with text resolved for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YogaMatch {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub traits: Vec<String>,
}

impl YogaMatch {
    pub fn from_entry(entry: &YogaEntry, lang: Language) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.resolve(lang),
            description: entry.description.resolve(lang),
            traits: entry
                .traits
                .iter()
                .map(|t| t.resolve(lang))
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

/// Rule check only; the Basic/Destiny gate is not consulted.
pub fn entry_matches(entry: &YogaEntry, hist: &DigitHistogram) -> bool {
    entry.rule.as_ref().is_some_and(|rule| rule.matches(hist))
}

/// Gate check only. Entries without a gate accept every chart.
pub fn gate_allows(entry: &YogaEntry, core: &CoreNumbers) -> bool {
    entry
        .gate
        .as_ref()
        .is_none_or(|gate| gate.allows(core.basic, core.destiny))
}

/// Rule and gate together.
pub fn yoga_holds(entry: &YogaEntry, hist: &DigitHistogram, core: &CoreNumbers) -> bool {
    entry_matches(entry, hist) && gate_allows(entry, core)
}

/// Every catalog entry whose rule and gate both hold, in catalog order.
pub fn evaluate_yogas(
    catalog: &YogaCatalog,
    hist: &DigitHistogram,
    core: &CoreNumbers,
    lang: Language,
) -> Vec<YogaMatch> {
    catalog
        .entries
        .iter()
        .filter(|e| yoga_holds(e, hist, core))
        .map(|e| YogaMatch::from_entry(e, lang))
        .collect()
}
