//! Destiny-keyed remedy lists.

use serde::Serialize;
use serde_json::Value;

use super::decode::first_present;
use crate::error::NumerologyError;
use crate::text::LocalizedText;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemedyEntry {
    pub title: Option<LocalizedText>,
    pub text: Option<LocalizedText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemedyTable {
    remedies: [Vec<RemedyEntry>; 9],
}

impl RemedyTable {
    /// Remedies listed for Destiny `digit`; empty for anything outside 1..=9.
    pub fn get(&self, digit: u8) -> &[RemedyEntry] {
        match digit {
            1..=9 => &self.remedies[digit as usize - 1],
            _ => &[],
        }
    }

    pub fn push(&mut self, digit: u8, entry: RemedyEntry) {
        if (1..=9).contains(&digit) {
            self.remedies[digit as usize - 1].push(entry);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.remedies.iter().all(Vec::is_empty)
    }

    pub fn from_json_str(json: &str) -> Result<Self, NumerologyError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Digit-keyed object. A value is a list of `{title, text}` objects, a
    /// single such object, or bare (possibly localized) text. Items with
    /// neither field are dropped.
    pub fn from_value(value: &Value) -> Result<Self, NumerologyError> {
        let mut table = Self::default();
        let map = match value {
            Value::Null => return Ok(table),
            Value::Object(map) => map,
            _ => return Err(NumerologyError::Catalog("remedy table must be an object".into())),
        };
        for (key, raw) in map {
            let Some(digit) = key.trim().parse::<u8>().ok().filter(|d| (1..=9).contains(d)) else {
                log::warn!("remedy table: skipping non-digit key {key:?}");
                continue;
            };
            let items: &[Value] = match raw {
                Value::Array(items) => items,
                single => std::slice::from_ref(single),
            };
            for item in items {
                match decode_entry(item) {
                    Some(entry) => table.push(digit, entry),
                    None => log::warn!("remedy table: skipping empty remedy under {key:?}"),
                }
            }
        }
        Ok(table)
    }
}

fn decode_entry(item: &Value) -> Option<RemedyEntry> {
    let entry = match item {
        Value::Object(obj) if obj.is_empty() => return None,
        Value::Object(obj) if obj.contains_key("title") || obj.contains_key("text") => RemedyEntry {
            title: first_present(obj, &["title"]).and_then(LocalizedText::from_value),
            text: first_present(obj, &["text", "remedy"]).and_then(LocalizedText::from_value),
        },
        other => RemedyEntry {
            title: None,
            text: LocalizedText::from_value(other),
        },
    };
    (entry.title.is_some() || entry.text.is_some()).then_some(entry)
}
