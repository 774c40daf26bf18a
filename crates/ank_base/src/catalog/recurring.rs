//! Recurring-digit influence table: digit -> count selector -> text or rule.

use serde::Serialize;
use serde_json::Value;

use super::decode::{count_map, number_list, optional_number_list};
use super::yogas::gate_side;
use crate::core_numbers::CoreNumbers;
use crate::error::NumerologyError;
use crate::histogram::DigitHistogram;
use crate::text::LocalizedText;

/// Which occurrence counts an entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CountSelector {
    /// `"3"`
    Exact(u32),
    /// `"2-3"`, inclusive.
    Range(u32, u32),
    /// `"3+"`
    AtLeast(u32),
    /// `"default"`
    Default,
}

impl CountSelector {
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        if key == "default" {
            return Some(Self::Default);
        }
        if let Some(n) = key.strip_suffix('+') {
            return n.parse().ok().map(Self::AtLeast);
        }
        if let Some((a, b)) = key.split_once('-') {
            return Some(Self::Range(a.parse().ok()?, b.parse().ok()?));
        }
        key.parse().ok().map(Self::Exact)
    }
}

/// Structured recurrence entry; every condition must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecurrenceRule {
    pub require: Vec<u8>,
    pub avoid: Vec<u8>,
    pub min_counts: Vec<(u8, u32)>,
    pub max_counts: Vec<(u8, u32)>,
    pub basic: Option<Vec<u8>>,
    pub destiny: Option<Vec<u8>>,
    pub text: Option<LocalizedText>,
}

impl RecurrenceRule {
    pub fn passes(&self, hist: &DigitHistogram, core: &CoreNumbers) -> bool {
        self.require.iter().all(|d| hist.contains(*d))
            && self.avoid.iter().all(|d| !hist.contains(*d))
            && self.min_counts.iter().all(|(d, n)| hist.get(*d) >= *n)
            && self.max_counts.iter().all(|(d, n)| hist.get(*d) <= *n)
            && gate_side(self.basic.as_deref(), core.basic)
            && gate_side(self.destiny.as_deref(), core.destiny)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RecurrenceEntry {
    Text(LocalizedText),
    Rule(RecurrenceRule),
}

/// Selectors for one digit, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecurrenceBucket {
    pub entries: Vec<(CountSelector, RecurrenceEntry)>,
}

impl RecurrenceBucket {
    /// Pick the entry for `occurrences`: exact match, then the first range
    /// containing it, then the highest satisfied threshold, then `default`.
    pub fn select(&self, occurrences: u32) -> Option<&RecurrenceEntry> {
        let exact = self
            .entries
            .iter()
            .find(|(s, _)| *s == CountSelector::Exact(occurrences));
        let range = || {
            self.entries.iter().find(
                |(s, _)| matches!(s, CountSelector::Range(a, b) if (*a..=*b).contains(&occurrences)),
            )
        };
        let threshold = || {
            self.entries
                .iter()
                .filter_map(|e| match e.0 {
                    CountSelector::AtLeast(n) if occurrences >= n => Some((n, e)),
                    _ => None,
                })
                .fold(None, |best: Option<(u32, _)>, (n, e)| match best {
                    Some((m, _)) if m >= n => best,
                    _ => Some((n, e)),
                })
                .map(|(_, e)| e)
        };
        let default = || {
            self.entries
                .iter()
                .find(|(s, _)| *s == CountSelector::Default)
        };
        exact
            .or_else(range)
            .or_else(threshold)
            .or_else(default)
            .map(|(_, entry)| entry)
    }
}

/// Recurrence table keyed by digit 1..=9.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecurrenceTable {
    buckets: [RecurrenceBucket; 9],
}

impl RecurrenceTable {
    pub fn bucket(&self, digit: u8) -> Option<&RecurrenceBucket> {
        match digit {
            1..=9 => Some(&self.buckets[digit as usize - 1]),
            _ => None,
        }
    }

    pub fn insert(&mut self, digit: u8, selector: CountSelector, entry: RecurrenceEntry) {
        if (1..=9).contains(&digit) {
            self.buckets[digit as usize - 1].entries.push((selector, entry));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|b| b.entries.is_empty())
    }

    pub fn from_json_str(json: &str) -> Result<Self, NumerologyError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, NumerologyError> {
        let mut table = Self::default();
        let map = match value {
            Value::Null => return Ok(table),
            Value::Object(map) => map,
            _ => {
                return Err(NumerologyError::Catalog(
                    "recurrence table must be an object keyed by digit".into(),
                ));
            }
        };

        for (digit_key, bucket) in map {
            let Some(digit) = digit_key.trim().parse::<u8>().ok().filter(|d| (1..=9).contains(d))
            else {
                log::warn!("recurrence table: skipping non-digit key {digit_key:?}");
                continue;
            };
            let Value::Object(entries) = bucket else {
                log::warn!("recurrence table: digit {digit} is not an object");
                continue;
            };
            for (sel_key, raw) in entries {
                let Some(selector) = CountSelector::parse(sel_key) else {
                    log::warn!("recurrence table: digit {digit}: skipping selector {sel_key:?}");
                    continue;
                };
                let context = format!("recurrence {digit}/{sel_key}");
                if let Some(entry) = entry_from_value(raw, &context) {
                    table.insert(digit, selector, entry);
                }
            }
        }
        Ok(table)
    }
}

fn entry_from_value(raw: &Value, context: &str) -> Option<RecurrenceEntry> {
    match raw {
        Value::Object(obj) if obj.contains_key("text") => Some(RecurrenceEntry::Rule(RecurrenceRule {
            require: number_list(obj.get("require"), context),
            avoid: number_list(obj.get("avoid"), context),
            min_counts: count_map(obj.get("minCounts"), context),
            max_counts: count_map(obj.get("maxCounts"), context),
            basic: optional_number_list(obj.get("basic"), context),
            destiny: optional_number_list(obj.get("destiny"), context),
            text: obj.get("text").and_then(LocalizedText::from_value),
        })),
        other => LocalizedText::from_value(other).map(RecurrenceEntry::Text),
    }
}
