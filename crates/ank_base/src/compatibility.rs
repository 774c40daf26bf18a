//! Two-person compatibility from the pair of Destiny numbers.
//!
//! The pair is unordered: swapping the two birth dates yields the same key,
//! the same catalog entry and the same text.

use ank_time::BirthDate;
use serde::Serialize;

use crate::catalog::{CompatibilityTable, PairKey};
use crate::core_numbers::destiny_number;
use crate::text::{Language, LocalizedText};

pub const AUSPICIOUS_DAYS: [&str; 2] = ["Sunday", "Wednesday"];
pub const FAVORABLE_COLORS: [&str; 3] = ["Gold", "Orange", "Blue"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Compatibility {
    pub key: PairKey,
    /// Whether the catalog has an entry for the pair.
    pub matched: bool,
    pub summary: String,
    pub strengths: Vec<String>,
    pub frictions: Vec<String>,
    pub remedies: Vec<String>,
    pub auspicious_days: Vec<String>,
    pub favorable_colors: Vec<String>,
}

/// Summary used when the catalog is silent on a pair.
pub fn fallback_summary(key: PairKey, lang: Language) -> String {
    let (a, b) = (key.low(), key.high());
    match lang {
        Language::Hindi => {
            format!("संख्या {a} और {b} का मेल एक संतुलित संबंध बनाने के लिए जागरूकता माँगता है।")
        }
        Language::Hinglish => {
            format!("Numbers {a} aur {b} ka combo balanced relationship ke liye awareness maangta hai.")
        }
        Language::English => {
            format!("Numbers {a} and {b} require awareness to create a balanced relationship.")
        }
    }
}

fn resolve_all(items: &[LocalizedText], lang: Language) -> Vec<String> {
    items
        .iter()
        .map(|t| t.resolve(lang))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Compatibility for two Destiny numbers.
pub fn compatibility_for_numbers(
    a: u8,
    b: u8,
    table: &CompatibilityTable,
    lang: Language,
) -> Compatibility {
    let key = PairKey::new(a, b);
    let entry = table.get(key);
    let summary = entry
        .and_then(|e| e.summary.as_ref())
        .map(|s| s.resolve(lang))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback_summary(key, lang));
    let (strengths, frictions, remedies) = match entry {
        Some(e) => (
            resolve_all(&e.strengths, lang),
            resolve_all(&e.frictions, lang),
            resolve_all(&e.remedies, lang),
        ),
        None => Default::default(),
    };
    Compatibility {
        key,
        matched: entry.is_some(),
        summary,
        strengths,
        frictions,
        remedies,
        auspicious_days: AUSPICIOUS_DAYS.iter().map(|s| s.to_string()).collect(),
        favorable_colors: FAVORABLE_COLORS.iter().map(|s| s.to_string()).collect(),
    }
}

/// Compatibility for two birth dates, keyed by their Destiny numbers.
pub fn compatibility(
    a: &BirthDate,
    b: &BirthDate,
    table: &CompatibilityTable,
    lang: Language,
) -> Compatibility {
    let (da, db) = (destiny_number(a), destiny_number(b));
    log::debug!("compatibility for destiny pair {da}/{db}");
    compatibility_for_numbers(da, db, table, lang)
}
