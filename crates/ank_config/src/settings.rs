//! `NumerologyConfig`: engine settings read from TOML.
//!
//! Sources, lowest to highest precedence: built-in defaults, then a TOML file
//! named by `--config` or the `ANK_CONFIG` environment variable. Missing keys
//! keep their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use ank_base::dasha::DEFAULT_HORIZON_YEARS;
use ank_base::recurrence::DEFAULT_MIN_REPEAT;
use ank_base::{Language, RecurrenceOptions, TilerConfig};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "ANK_CONFIG";

/// Oldest birth year accepted by input validation.
pub const DEFAULT_MIN_BIRTH_YEAR: i32 = 1900;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumerologyConfig {
    /// Years covered by Maha and Yearly timelines.
    pub horizon_years: u32,
    /// Keep 11/22/33 unreduced in core numbers.
    pub preserve_master_numbers: bool,
    /// Minimum occurrences for a digit to count as recurring.
    pub min_repeat: u32,
    /// Emit the Destiny fallback entry when no digit recurs.
    pub destiny_fallback: bool,
    pub language: Language,
    pub min_birth_year: i32,
    pub catalogs: CatalogPaths,
}

/// Optional catalog file overrides. Unset entries use the built-in catalogs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogPaths {
    pub yogas: Option<PathBuf>,
    pub recurring: Option<PathBuf>,
    pub essences: Option<PathBuf>,
    pub remedies: Option<PathBuf>,
    pub compatibility: Option<PathBuf>,
}

impl Default for NumerologyConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            preserve_master_numbers: false,
            min_repeat: DEFAULT_MIN_REPEAT,
            destiny_fallback: true,
            language: Language::English,
            min_birth_year: DEFAULT_MIN_BIRTH_YEAR,
            catalogs: CatalogPaths::default(),
        }
    }
}

impl NumerologyConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read a TOML file. Relative catalog paths are resolved against the
    /// file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let mut config = Self::from_toml_str(&content)?;
        if let Some(dir) = path.parent() {
            config.catalogs.resolve_relative_to(dir);
        }
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Explicit path if given, else `ANK_CONFIG`, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::from_file(PathBuf::from(path)),
            _ => Ok(Self::default()),
        }
    }

    pub fn tiler_config(&self) -> TilerConfig {
        TilerConfig {
            horizon_years: self.horizon_years,
        }
    }

    pub fn recurrence_options(&self) -> RecurrenceOptions {
        RecurrenceOptions {
            min_repeat: self.min_repeat,
            destiny_fallback: self.destiny_fallback,
            language: self.language,
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

impl CatalogPaths {
    fn resolve_relative_to(&mut self, dir: &Path) {
        for p in [
            &mut self.yogas,
            &mut self.recurring,
            &mut self.essences,
            &mut self.remedies,
            &mut self.compatibility,
        ]
        .into_iter()
        .flatten()
        {
            if p.is_relative() {
                *p = dir.join(&*p);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = NumerologyConfig::default();
        assert_eq!(c.horizon_years, 120);
        assert!(!c.preserve_master_numbers);
        assert_eq!(c.min_repeat, 2);
        assert!(c.destiny_fallback);
        assert_eq!(c.language, Language::English);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = NumerologyConfig::from_toml_str("horizon_years = 90\nlanguage = \"hi\"\n").unwrap();
        assert_eq!(c.horizon_years, 90);
        assert_eq!(c.language, Language::Hindi);
        assert_eq!(c.min_repeat, 2);
    }

    #[test]
    fn catalog_table() {
        let c = NumerologyConfig::from_toml_str("[catalogs]\nyogas = \"/etc/ank/yogas.json\"\n").unwrap();
        assert_eq!(c.catalogs.yogas, Some(PathBuf::from("/etc/ank/yogas.json")));
        assert_eq!(c.catalogs.recurring, None);
    }

    #[test]
    fn bad_toml_is_parse_error() {
        assert!(matches!(
            NumerologyConfig::from_toml_str("horizon_years = \"long\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn relative_paths_resolve_against_config_dir() {
        let mut paths = CatalogPaths {
            yogas: Some(PathBuf::from("yogas.json")),
            recurring: Some(PathBuf::from("/abs/recurring.json")),
            essences: None,
            remedies: None,
            compatibility: Some(PathBuf::from("pairs/compat.json")),
        };
        paths.resolve_relative_to(Path::new("/srv/ank"));
        assert_eq!(paths.yogas, Some(PathBuf::from("/srv/ank/yogas.json")));
        assert_eq!(paths.compatibility, Some(PathBuf::from("/srv/ank/pairs/compat.json")));
        assert_eq!(paths.recurring, Some(PathBuf::from("/abs/recurring.json")));
    }

    #[test]
    fn toml_round_trip() {
        let c = NumerologyConfig {
            min_repeat: 3,
            ..NumerologyConfig::default()
        };
        let s = c.to_toml_string().unwrap();
        assert_eq!(NumerologyConfig::from_toml_str(&s).unwrap(), c);
    }
}
