//! Lenient field decoding shared by the catalog readers.
//!
//! Catalog JSON is hand-edited, so numbers may arrive as strings and single
//! values where lists are expected. Unusable items are skipped with a
//! warning instead of failing the whole catalog.

use serde_json::Value;

/// A number or a numeric string.
pub(crate) fn as_u64(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn as_digit(v: &Value) -> Option<u8> {
    as_u64(v).and_then(|n| u8::try_from(n).ok())
}

/// A single number or a list of numbers. Absent or `null` is an empty list.
pub(crate) fn number_list(v: Option<&Value>, context: &str) -> Vec<u8> {
    match v {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| {
                let d = as_digit(item);
                if d.is_none() {
                    log::warn!("{context}: skipping non-numeric entry {item}");
                }
                d
            })
            .collect(),
        Some(other) => match as_digit(other) {
            Some(d) => vec![d],
            None => {
                log::warn!("{context}: expected number or list, got {other}");
                Vec::new()
            }
        },
    }
}

/// Like [`number_list`] but keeps the absent/present distinction used by gates.
pub(crate) fn optional_number_list(v: Option<&Value>, context: &str) -> Option<Vec<u8>> {
    match v {
        None | Some(Value::Null) => None,
        some => Some(number_list(some, context)),
    }
}

/// `{ "digit": count }` map in catalog order. Non-numeric keys are skipped.
pub(crate) fn count_map(v: Option<&Value>, context: &str) -> Vec<(u8, u32)> {
    let Some(Value::Object(map)) = v else {
        return Vec::new();
    };
    map.iter()
        .filter_map(|(k, val)| {
            let Ok(digit) = k.trim().parse::<u8>() else {
                log::warn!("{context}: skipping non-numeric key {k:?}");
                return None;
            };
            let Some(count) = as_u64(val).and_then(|n| u32::try_from(n).ok()) else {
                log::warn!("{context}: skipping non-numeric count for {k:?}");
                return None;
            };
            Some((digit, count))
        })
        .collect()
}

/// First present, non-null field among `keys`.
pub(crate) fn first_present<'a>(
    obj: &'a serde_json::Map<String, Value>,
    keys: &[&str],
) -> Option<&'a Value> {
    keys.iter().find_map(|k| obj.get(*k).filter(|v| !v.is_null()))
}
