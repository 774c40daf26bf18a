//! Pair insights for two Destiny numbers, keyed order-insensitively.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::decode::first_present;
use crate::error::NumerologyError;
use crate::text::LocalizedText;

/// Unordered pair of numbers, stored low first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    low: u8,
    high: u8,
}

impl PairKey {
    pub fn new(a: u8, b: u8) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(self) -> u8 {
        self.low
    }

    pub fn high(self) -> u8 {
        self.high
    }

    /// `"a-b"` with either order. Whitespace around the parts is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let (a, b) = s.split_once('-')?;
        Some(Self::new(a.trim().parse().ok()?, b.trim().parse().ok()?))
    }
}

impl Display for PairKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl Serialize for PairKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompatibilityEntry {
    pub summary: Option<LocalizedText>,
    pub strengths: Vec<LocalizedText>,
    pub frictions: Vec<LocalizedText>,
    pub remedies: Vec<LocalizedText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompatibilityTable {
    entries: BTreeMap<PairKey, CompatibilityEntry>,
}

impl CompatibilityTable {
    pub fn get(&self, key: PairKey) -> Option<&CompatibilityEntry> {
        self.entries.get(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_json_str(json: &str) -> Result<Self, NumerologyError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Object keyed `"a-b"`. `"3-6"` and `"6-3"` name the same pair; the first
    /// one in file order wins.
    pub fn from_value(value: &Value) -> Result<Self, NumerologyError> {
        let mut table = Self::default();
        let map = match value {
            Value::Null => return Ok(table),
            Value::Object(map) => map,
            _ => {
                return Err(NumerologyError::Catalog(
                    "compatibility table must be an object".into(),
                ));
            }
        };
        for (raw_key, raw) in map {
            let Some(key) = PairKey::parse(raw_key) else {
                log::warn!("compatibility table: skipping malformed key {raw_key:?}");
                continue;
            };
            let Value::Object(obj) = raw else {
                log::warn!("compatibility table: {raw_key:?} is not an object");
                continue;
            };
            if table.entries.contains_key(&key) {
                log::warn!("compatibility table: duplicate pair {raw_key:?} ignored");
                continue;
            }
            let entry = CompatibilityEntry {
                summary: first_present(obj, &["summary"]).and_then(LocalizedText::from_value),
                strengths: text_list(obj.get("strengths")),
                frictions: text_list(obj.get("frictions")),
                remedies: text_list(obj.get("remedies")),
            };
            table.entries.insert(key, entry);
        }
        Ok(table)
    }
}

fn text_list(v: Option<&Value>) -> Vec<LocalizedText> {
    match v {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter_map(LocalizedText::from_value).collect(),
        Some(single) => LocalizedText::from_value(single).into_iter().collect(),
    }
}
