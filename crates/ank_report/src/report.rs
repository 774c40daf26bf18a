//! The foundational numerology report for one person.

use ank_base::{
    Catalog, CoreNumbers, DigitHistogram, KundliGrid, Language, PersonalCycles, PlaneReport,
    RecurrenceInfluence, Remedy, YogaMatch, analyze_with_fallback, build_grid, evaluate_yogas,
    planes, special_remedies,
};
use ank_config::NumerologyConfig;
use ank_time::BirthDate;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::input::{ReportInput, ValidatedInput};

/// Everything derived from a name and birth date. Only `cycles` and the
/// cycle-dependent `remedies` depend on the day the report was made for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyReport {
    pub name: String,
    pub dob: BirthDate,
    pub language: Language,
    pub core: CoreNumbers,
    pub grid: KundliGrid,
    /// Counts laid out on the Lo Shu square.
    pub matrix: [[u32; 3]; 3],
    pub planes: [PlaneReport; 3],
    pub dominant_digits: Vec<u8>,
    pub missing_digits: Vec<u8>,
    pub grid_summary: String,
    pub recurrences: Vec<RecurrenceInfluence>,
    pub yogas: Vec<YogaMatch>,
    pub cycles: PersonalCycles,
    pub remedies: Vec<Remedy>,
}

impl NumerologyReport {
    /// Final grid counts (after Basic/Destiny injection).
    pub fn histogram(&self) -> &DigitHistogram {
        &self.grid.histogram
    }
}

/// Validate `input` and build its report.
pub fn build_report(
    input: &ReportInput,
    catalog: &Catalog,
    config: &NumerologyConfig,
) -> Result<NumerologyReport, ReportError> {
    let validated = input.validate(config.min_birth_year)?;
    Ok(report_for(&validated, catalog, config))
}

/// Report for input that has already been validated, as of today. Infallible.
pub fn report_for(
    input: &ValidatedInput,
    catalog: &Catalog,
    config: &NumerologyConfig,
) -> NumerologyReport {
    report_on(input, catalog, config, Local::now().date_naive())
}

/// Report with personal cycles and remedies evaluated on `on`.
pub fn report_on(
    input: &ValidatedInput,
    catalog: &Catalog,
    config: &NumerologyConfig,
    on: NaiveDate,
) -> NumerologyReport {
    let grid = build_grid(&input.dob, config.preserve_master_numbers);
    let hist = grid.histogram;
    let lang = config.language;
    let opts = config.recurrence_options();
    let dominant_digits = hist.dominant_digits();
    let cycles = PersonalCycles::on(&input.dob, on);
    log::debug!(
        "report for {}: basic {} destiny {}",
        input.dob,
        grid.core.basic,
        grid.core.destiny
    );

    NumerologyReport {
        name: input.name.clone(),
        dob: input.dob,
        language: lang,
        core: grid.core,
        grid,
        matrix: grid.matrix(),
        planes: planes(&hist),
        missing_digits: hist.missing_digits(),
        grid_summary: grid_summary(&dominant_digits, lang),
        dominant_digits,
        recurrences: analyze_with_fallback(
            &catalog.recurrences,
            &catalog.essences,
            &hist,
            &grid.core,
            &opts,
        ),
        yogas: evaluate_yogas(&catalog.yogas, &hist, &grid.core, lang),
        // Remedy rules count the date digits alone.
        remedies: special_remedies(&catalog.remedies, &grid.base, &grid.core, &cycles, lang),
        cycles,
    }
}

/// One- or two-sentence description of the grid in `lang`.
pub fn grid_summary(dominant: &[u8], lang: Language) -> String {
    let mut summary = match lang {
        Language::Hindi => "आपका वैदिक कुंडली ग्रिड आपके जन्मतिथि की ऊर्जा को दर्शाता है।".to_string(),
        Language::Hinglish => "Aapka Vedic Kundli grid aapke DOB ki energy ko reflect karta hai.".to_string(),
        Language::English => {
            "Your Vedic Kundli grid reflects the cosmic energies present in your birth date.".to_string()
        }
    };
    if !dominant.is_empty() {
        let list = dominant
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        summary.push_str(&match lang {
            Language::Hindi => format!(" संख्या {list} में प्रबल ऊर्जा दिखती है।"),
            Language::Hinglish => format!(" Numbers {list} mein strong energy dikhti hai."),
            Language::English => format!(" Strong presence of numbers {list} indicates focused energy."),
        });
    }
    summary
}
