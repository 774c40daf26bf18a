//! Settings and rule catalogs for the ank numerology engine.
//!
//! - `NumerologyConfig`: TOML settings with defaults, `--config`/`ANK_CONFIG`
//! - Catalog loading from JSON files, falling back to built-in catalogs

pub mod catalogs;
pub mod error;
pub mod settings;

pub use catalogs::{builtin_catalog, load_catalog};
pub use error::ConfigError;
pub use settings::{CONFIG_ENV_VAR, CatalogPaths, NumerologyConfig};
