//! Rule catalogs from files or the built-in JSON embedded at compile time.

use std::fs;
use std::path::Path;

use ank_base::{
    Catalog, CompatibilityTable, EssenceTable, NumerologyError, RecurrenceTable, RemedyTable,
    YogaCatalog,
};

use crate::error::ConfigError;
use crate::settings::NumerologyConfig;

pub const BUILTIN_YOGAS: &str = include_str!("../data/yogas.json");
pub const BUILTIN_RECURRING: &str = include_str!("../data/recurring.json");
pub const BUILTIN_ESSENCES: &str = include_str!("../data/essences.json");
pub const BUILTIN_REMEDIES: &str = include_str!("../data/remedies.json");
pub const BUILTIN_COMPATIBILITY: &str = include_str!("../data/compatibility.json");

/// The catalogs shipped with the crate.
pub fn builtin_catalog() -> Result<Catalog, ConfigError> {
    Ok(Catalog::new(
        YogaCatalog::from_json_str(BUILTIN_YOGAS)?,
        RecurrenceTable::from_json_str(BUILTIN_RECURRING)?,
        EssenceTable::from_json_str(BUILTIN_ESSENCES)?,
    )
    .with_remedies(RemedyTable::from_json_str(BUILTIN_REMEDIES)?)
    .with_compatibility(CompatibilityTable::from_json_str(BUILTIN_COMPATIBILITY)?))
}

/// Catalogs named in `config`, falling back to the built-ins per table.
pub fn load_catalog(config: &NumerologyConfig) -> Result<Catalog, ConfigError> {
    let paths = &config.catalogs;
    Ok(Catalog::new(
        read_or_builtin(paths.yogas.as_deref(), BUILTIN_YOGAS, YogaCatalog::from_json_str)?,
        read_or_builtin(
            paths.recurring.as_deref(),
            BUILTIN_RECURRING,
            RecurrenceTable::from_json_str,
        )?,
        read_or_builtin(
            paths.essences.as_deref(),
            BUILTIN_ESSENCES,
            EssenceTable::from_json_str,
        )?,
    )
    .with_remedies(read_or_builtin(
        paths.remedies.as_deref(),
        BUILTIN_REMEDIES,
        RemedyTable::from_json_str,
    )?)
    .with_compatibility(read_or_builtin(
        paths.compatibility.as_deref(),
        BUILTIN_COMPATIBILITY,
        CompatibilityTable::from_json_str,
    )?))
}

fn read_or_builtin<T>(
    path: Option<&Path>,
    builtin: &str,
    decode: fn(&str) -> Result<T, NumerologyError>,
) -> Result<T, ConfigError> {
    let Some(path) = path else {
        return Ok(decode(builtin)?);
    };
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
    log::debug!("reading catalog {}", path.display());
    decode(&content).map_err(|e| ConfigError::Catalog(format!("{}: {e}", path.display())))
}
