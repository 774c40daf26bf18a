//! Rule catalogs: yogas, recurring-digit influences, digit essences,
//! Destiny remedies and pair compatibility text.
//!
//! Catalogs are read from JSON with lenient decoding and normalized once into
//! typed tables; evaluation never touches JSON.

pub mod compatibility;
mod decode;
pub mod essences;
pub mod recurring;
pub mod remedies;
pub mod yogas;

use serde::Serialize;

pub use compatibility::{CompatibilityEntry, CompatibilityTable, PairKey};
pub use essences::EssenceTable;
pub use recurring::{
    CountSelector, RecurrenceBucket, RecurrenceEntry, RecurrenceRule, RecurrenceTable,
};
pub use remedies::{RemedyEntry, RemedyTable};
pub use yogas::{CoreGate, YogaCatalog, YogaEntry, YogaRule};

/// All catalogs an analysis needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub yogas: YogaCatalog,
    pub recurrences: RecurrenceTable,
    pub essences: EssenceTable,
    pub remedies: RemedyTable,
    pub compatibility: CompatibilityTable,
}

impl Catalog {
    pub fn new(yogas: YogaCatalog, recurrences: RecurrenceTable, essences: EssenceTable) -> Self {
        Self {
            yogas,
            recurrences,
            essences,
            ..Self::default()
        }
    }

    pub fn with_remedies(mut self, remedies: RemedyTable) -> Self {
        self.remedies = remedies;
        self
    }

    pub fn with_compatibility(mut self, compatibility: CompatibilityTable) -> Self {
        self.compatibility = compatibility;
        self
    }
}
