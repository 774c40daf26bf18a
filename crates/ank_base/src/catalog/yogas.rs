//! Yoga catalog: named digit combinations with optional Basic/Destiny gates.

use serde::Serialize;
use serde_json::{Map, Value};

use super::decode::{count_map, first_present, number_list, optional_number_list};
use crate::error::NumerologyError;
use crate::histogram::DigitHistogram;
use crate::text::LocalizedText;

/// Presence/absence/count conditions on a histogram, after normalizing the
/// legacy (`allOf`...), strict (`requires_*`) and older (`numbers`/`empty`)
/// catalog shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct YogaRule {
    /// Every digit must be present (count > 0).
    pub all_of: Vec<u8>,
    /// At least one digit must be present; ignored when empty.
    pub any_of: Vec<u8>,
    /// Every digit must be absent.
    pub none_of: Vec<u8>,
    /// Per-digit minimum counts.
    pub min_count: Vec<(u8, u32)>,
}

impl YogaRule {
    pub fn matches(&self, hist: &DigitHistogram) -> bool {
        self.all_of.iter().all(|d| hist.contains(*d))
            && (self.any_of.is_empty() || self.any_of.iter().any(|d| hist.contains(*d)))
            && self.none_of.iter().all(|d| !hist.contains(*d))
            && self.min_count.iter().all(|(d, n)| hist.get(*d) >= *n)
    }
}

/// Basic/Destiny gate. An absent side accepts anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoreGate {
    pub basic: Option<Vec<u8>>,
    pub destiny: Option<Vec<u8>>,
}

impl CoreGate {
    pub fn allows(&self, basic: u8, destiny: u8) -> bool {
        gate_side(self.basic.as_deref(), basic) && gate_side(self.destiny.as_deref(), destiny)
    }
}

pub(crate) fn gate_side(allowed: Option<&[u8]>, actual: u8) -> bool {
    allowed.is_none_or(|set| set.contains(&actual))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YogaEntry {
    pub id: Option<String>,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub traits: Vec<LocalizedText>,
    /// `None` for entries without any rule shape; those never match.
    pub rule: Option<YogaRule>,
    pub gate: Option<CoreGate>,
}

/// Ordered yoga catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct YogaCatalog {
    pub entries: Vec<YogaEntry>,
}

impl YogaCatalog {
    pub fn new(entries: Vec<YogaEntry>) -> Self {
        Self { entries }
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

    /// Accepts either a list of entries or a map of id to entry. Map keys
    /// become the entry ids; catalog order is preserved either way.
    pub fn from_value(value: &Value) -> Result<Self, NumerologyError> {
        let entries: Vec<YogaEntry> = match value {
            Value::Null => Vec::new(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| entry_from_value(None, item, &format!("yoga[{i}]")))
                .collect::<Result<_, _>>()?,
            Value::Object(map) => map
                .iter()
                .map(|(id, item)| entry_from_value(Some(id.clone()), item, &format!("yoga {id:?}")))
                .collect::<Result<_, _>>()?,
            _ => {
                return Err(NumerologyError::Catalog(
                    "yoga catalog must be a list or an object".into(),
                ));
            }
        };
        log::debug!("decoded yoga catalog with {} entries", entries.len());
        Ok(Self { entries })
    }
}

fn entry_from_value(
    id: Option<String>,
    value: &Value,
    context: &str,
) -> Result<YogaEntry, NumerologyError> {
    let Value::Object(obj) = value else {
        return Err(NumerologyError::Catalog(format!("{context}: entry must be an object")));
    };
    let id = id.or_else(|| match obj.get("id") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    });

    let traits = match obj.get("traits") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(LocalizedText::from_value)
            .collect(),
        _ => Vec::new(),
    };

    Ok(YogaEntry {
        id,
        name: obj
            .get("name")
            .and_then(LocalizedText::from_value)
            .unwrap_or_else(|| LocalizedText::plain("Yoga")),
        description: obj
            .get("description")
            .and_then(LocalizedText::from_value)
            .unwrap_or_default(),
        traits,
        rule: rule_from_object(obj, context),
        gate: first_present(obj, &["comboBD", "combo", "basicDestiny"])
            .and_then(Value::as_object)
            .map(|g| CoreGate {
                basic: optional_number_list(g.get("basic"), context),
                destiny: optional_number_list(g.get("destiny"), context),
            }),
    })
}

fn rule_from_object(obj: &Map<String, Value>, context: &str) -> Option<YogaRule> {
    if let Some(rules) = obj.get("activation_rules").filter(|v| !v.is_null()) {
        let empty = Map::new();
        let r = rules.as_object().unwrap_or(&empty);
        // Legacy names win over strict ones when both are given.
        return Some(YogaRule {
            all_of: number_list(first_present(r, &["allOf", "requires_presence"]), context),
            any_of: number_list(r.get("anyOf"), context),
            none_of: number_list(first_present(r, &["noneOf", "requires_absence"]), context),
            min_count: count_map(first_present(r, &["minCount", "requires_counts"]), context),
        });
    }

    let numbers = number_list(obj.get("numbers"), context);
    if numbers.is_empty() {
        log::trace!("{context}: no rule shape, entry will never match");
        return None;
    }
    Some(YogaRule {
        all_of: numbers,
        none_of: number_list(obj.get("empty"), context),
        ..YogaRule::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn map_form_keeps_order_and_ids() {
        let cat = YogaCatalog::from_value(&json!({
            "zeta": {"numbers": [1]},
            "alpha": {"numbers": [2]}
        }))
        .unwrap();
        let ids: Vec<_> = cat.entries.iter().map(|e| e.id.clone().unwrap()).collect();
        assert_eq!(ids, ["zeta", "alpha"]);
    }

    #[test]
    fn strict_shape_normalizes() {
        let cat = YogaCatalog::from_value(&json!([{
            "name": "Strict",
            "activation_rules": {
                "requires_presence": [6],
                "requires_absence": [3],
                "requires_counts": {"2": 2}
            }
        }]))
        .unwrap();
        let rule = cat.entries[0].rule.clone().unwrap();
        assert_eq!(rule.all_of, vec![6]);
        assert_eq!(rule.none_of, vec![3]);
        assert_eq!(rule.min_count, vec![(2, 2)]);
    }

    #[test]
    fn legacy_names_take_precedence() {
        let cat = YogaCatalog::from_value(&json!([{
            "activation_rules": {"allOf": [1], "requires_presence": [9]}
        }]))
        .unwrap();
        assert_eq!(cat.entries[0].rule.as_ref().unwrap().all_of, vec![1]);
    }

    #[test]
    fn no_rule_shape_means_none() {
        let cat = YogaCatalog::from_value(&json!([{"name": "Orphan"}, {"numbers": []}])).unwrap();
        assert!(cat.entries.iter().all(|e| e.rule.is_none()));
    }

    #[test]
    fn gate_synonyms_first_wins() {
        let cat = YogaCatalog::from_value(&json!([{
            "numbers": [1],
            "combo": {"basic": 2},
            "comboBD": {"basic": [4, 5]}
        }]))
        .unwrap();
        let gate = cat.entries[0].gate.clone().unwrap();
        assert_eq!(gate.basic, Some(vec![4, 5]));
        assert_eq!(gate.destiny, None);
        assert!(gate.allows(5, 9));
        assert!(!gate.allows(2, 9));
    }

    #[test]
    fn rejects_scalar_catalog() {
        assert!(matches!(
            YogaCatalog::from_value(&json!(42)),
            Err(NumerologyError::Catalog(_))
        ));
    }

    #[test]
    fn empty_activation_rules_match_everything() {
        let rule = YogaRule::default();
        assert!(rule.matches(&DigitHistogram::empty()));
    }
}
