//! Per-digit essence text, used for the Destiny fallback recurrence and for
//! describing dominant numbers.

use serde::Serialize;
use serde_json::Value;

use super::decode::first_present;
use crate::error::NumerologyError;
use crate::text::LocalizedText;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EssenceTable {
    essences: [Option<LocalizedText>; 9],
}

impl EssenceTable {
    pub fn get(&self, digit: u8) -> Option<&LocalizedText> {
        match digit {
            1..=9 => self.essences[digit as usize - 1].as_ref(),
            _ => None,
        }
    }

    pub fn set(&mut self, digit: u8, text: LocalizedText) {
        if (1..=9).contains(&digit) {
            self.essences[digit as usize - 1] = Some(text);
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, NumerologyError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Digit-keyed object. Each value is text, a language map, or a detail
    /// object whose `essence` (else `summary`) field holds the text.
    pub fn from_value(value: &Value) -> Result<Self, NumerologyError> {
        let mut table = Self::default();
        let map = match value {
            Value::Null => return Ok(table),
            Value::Object(map) => map,
            _ => return Err(NumerologyError::Catalog("essence table must be an object".into())),
        };
        for (key, raw) in map {
            let Some(digit) = key.trim().parse::<u8>().ok().filter(|d| (1..=9).contains(d)) else {
                log::warn!("essence table: skipping non-digit key {key:?}");
                continue;
            };
            let text = match raw {
                Value::Object(obj) if obj.contains_key("essence") || obj.contains_key("summary") => {
                    first_present(obj, &["essence", "summary"]).and_then(LocalizedText::from_value)
                }
                other => LocalizedText::from_value(other),
            };
            if let Some(text) = text {
                table.set(digit, text);
            }
        }
        Ok(table)
    }
}
