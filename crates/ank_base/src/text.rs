//! Language selection and multilingual catalog text.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Output language for catalog text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    /// Hinglish: Hindi in Latin script.
    #[serde(rename = "en-hi")]
    Hinglish,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Hinglish => "en-hi",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::English),
            "hi" => Ok(Self::Hindi),
            "en-hi" | "hinglish" => Ok(Self::Hinglish),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// Text that is either a single string or a per-language map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Localized(BTreeMap<String, String>),
}

impl Default for LocalizedText {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

impl LocalizedText {
    pub fn plain(s: impl Into<String>) -> Self {
        Self::Plain(s.into())
    }

    /// Resolve for `lang`, falling back to `en`, then `en-hi`, then `hi`.
    /// An empty string when no variant exists.
    pub fn resolve(&self, lang: Language) -> String {
        match self {
            Self::Plain(s) => s.clone(),
            Self::Localized(map) => [lang.code(), "en", "en-hi", "hi"]
                .iter()
                .find_map(|k| map.get(*k))
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Lenient decoding from catalog JSON.
    ///
    /// Strings and numbers become plain text, arrays are resolved item by
    /// item and joined with ", ", objects become a language map (non-string
    /// values are stringified). `null` yields `None`.
    pub fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::Null => None,
            Value::String(s) => Some(Self::Plain(s.clone())),
            Value::Number(n) => Some(Self::Plain(n.to_string())),
            Value::Bool(b) => Some(Self::Plain(b.to_string())),
            Value::Array(items) => {
                let joined: Vec<String> = items
                    .iter()
                    .filter_map(Self::from_value)
                    .map(|t| t.resolve(Language::English))
                    .filter(|s| !s.is_empty())
                    .collect();
                Some(Self::Plain(joined.join(", ")))
            }
            Value::Object(map) => Some(Self::Localized(
                map.iter()
                    .filter_map(|(k, v)| match v {
                        Value::String(s) => Some((k.clone(), s.clone())),
                        Value::Number(n) => Some((k.clone(), n.to_string())),
                        _ => None,
                    })
                    .collect(),
            )),
        }
    }
}

impl From<&str> for LocalizedText {
    fn from(s: &str) -> Self {
        Self::Plain(s.to_string())
    }
}
