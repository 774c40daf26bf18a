//! Date-sensitive analysis: the foundational grid overlaid with the dasha
//! numbers active on a chosen date.

use ank_base::{
    ActiveLayers, Catalog, DashaLevel, DashaSnapshot, DashaView, DigitHistogram, FormedYoga,
    RecurrenceInfluence, RecurrenceOptions, changed_recurrences, compose, dynamic_yogas,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::DashaCalendar;
use crate::report::NumerologyReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicAnalysis {
    pub date: NaiveDate,
    pub view: DashaView,
    pub snapshot: DashaSnapshot,
    /// Every layer active on `date`, regardless of view.
    pub active: ActiveLayers,
    /// Layers feeding the dynamic grid: the view's level and those above.
    pub layers: ActiveLayers,
    pub histogram: DigitHistogram,
    pub yogas: Vec<FormedYoga>,
    pub recurrences: Vec<RecurrenceInfluence>,
    /// Most frequent active layer number, ties to the smaller.
    pub dominant_number: Option<u8>,
}

impl DynamicAnalysis {
    pub fn compute(
        report: &NumerologyReport,
        calendar: &DashaCalendar,
        catalog: &Catalog,
        date: NaiveDate,
        view: DashaView,
        opts: &RecurrenceOptions,
    ) -> Self {
        let snapshot = calendar.snapshot(date);
        let active = ActiveLayers::for_view(&snapshot, DashaLevel::Daily);
        let layers = ActiveLayers::for_view(&snapshot, view);
        let foundational = report.histogram();
        log::debug!("dynamic analysis for {date} at {} view", view.name());

        Self {
            date,
            view,
            snapshot,
            active,
            layers,
            histogram: compose(foundational, &layers),
            yogas: dynamic_yogas(&catalog.yogas, foundational, &layers, &report.core, opts.language),
            recurrences: changed_recurrences(
                &catalog.recurrences,
                foundational,
                &layers,
                &report.core,
                opts,
            ),
            dominant_number: active.dominant_number(),
        }
    }
}
