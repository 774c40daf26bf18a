//! Overlaying active dasha numbers on the foundational grid.
//!
//! Each active layer adds one occurrence of its number. Yogas that hold on
//! the overlaid grid but not on the foundational one are "formed" by the
//! current periods.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{RecurrenceTable, YogaCatalog};
use crate::core_numbers::CoreNumbers;
use crate::dasha::{ALL_DASHA_LEVELS, DashaLevel, DashaSnapshot, DashaView};
use crate::histogram::DigitHistogram;
use crate::recurrence::{RecurrenceInfluence, RecurrenceOptions, analyze_recurrences};
use crate::text::Language;
use crate::yoga::{YogaMatch, entry_matches, gate_allows};

/// Numbers of the layers taking part in an overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveLayers {
    pub maha: Option<u8>,
    pub yearly: Option<u8>,
    pub monthly: Option<u8>,
    pub daily: Option<u8>,
}

impl ActiveLayers {
    /// Layers visible from `view`: the view's own level and all above it.
    pub fn for_view(snapshot: &DashaSnapshot, view: DashaView) -> Self {
        let pick = |level: DashaLevel| {
            if level <= view {
                snapshot.get(level).map(|p| p.number)
            } else {
                None
            }
        };
        Self {
            maha: pick(DashaLevel::Maha),
            yearly: pick(DashaLevel::Yearly),
            monthly: pick(DashaLevel::Monthly),
            daily: pick(DashaLevel::Daily),
        }
    }

    pub fn get(&self, level: DashaLevel) -> Option<u8> {
        match level {
            DashaLevel::Maha => self.maha,
            DashaLevel::Yearly => self.yearly,
            DashaLevel::Monthly => self.monthly,
            DashaLevel::Daily => self.daily,
        }
    }

    /// `(level, number)` for present layers, outermost first.
    pub fn iter(&self) -> impl Iterator<Item = (DashaLevel, u8)> + '_ {
        ALL_DASHA_LEVELS
            .iter()
            .filter_map(|l| self.get(*l).map(|n| (*l, n)))
    }

    pub fn without(&self, level: DashaLevel) -> Self {
        let mut next = *self;
        match level {
            DashaLevel::Maha => next.maha = None,
            DashaLevel::Yearly => next.yearly = None,
            DashaLevel::Monthly => next.monthly = None,
            DashaLevel::Daily => next.daily = None,
        }
        next
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Most frequent layer number; ties go to the smaller number.
    pub fn dominant_number(&self) -> Option<u8> {
        let mut freq: BTreeMap<u8, u32> = BTreeMap::new();
        for (_, n) in self.iter() {
            *freq.entry(n).or_default() += 1;
        }
        freq.into_iter()
            .fold(None, |best: Option<(u8, u32)>, (n, c)| match best {
                Some((_, bc)) if bc >= c => best,
                _ => Some((n, c)),
            })
            .map(|(n, _)| n)
    }
}

/// Foundational grid plus one occurrence per active layer.
pub fn compose(foundational: &DigitHistogram, layers: &ActiveLayers) -> DigitHistogram {
    layers
        .iter()
        .fold(*foundational, |hist, (_, n)| hist.with_added(n))
}

/// [`compose`] with one layer left out.
pub fn compose_without(
    foundational: &DigitHistogram,
    layers: &ActiveLayers,
    level: DashaLevel,
) -> DigitHistogram {
    compose(foundational, &layers.without(level))
}

/// A yoga formed by the overlay, with the layers it depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormedYoga {
    pub yoga: YogaMatch,
    /// Layers whose removal alone breaks the match.
    pub formed_by: Vec<DashaLevel>,
}

/// Yogas holding on the overlaid grid but not on the foundational one.
/// The Basic/Destiny gate applies here as it does to foundational yogas.
pub fn dynamic_yogas(
    catalog: &YogaCatalog,
    foundational: &DigitHistogram,
    layers: &ActiveLayers,
    core: &CoreNumbers,
    lang: Language,
) -> Vec<FormedYoga> {
    let dynamic = compose(foundational, layers);
    catalog
        .entries
        .iter()
        .filter(|e| gate_allows(e, core))
        .filter(|e| entry_matches(e, &dynamic) && !entry_matches(e, foundational))
        .map(|e| FormedYoga {
            yoga: YogaMatch::from_entry(e, lang),
            formed_by: layers
                .iter()
                .filter(|(level, _)| !entry_matches(e, &compose_without(foundational, layers, *level)))
                .map(|(level, _)| level)
                .collect(),
        })
        .collect()
}

/// Recurrence entries on the overlaid grid that are new, more frequent, or
/// carry a different influence than on the foundational grid. Sorted by digit.
pub fn changed_recurrences(
    table: &RecurrenceTable,
    foundational: &DigitHistogram,
    layers: &ActiveLayers,
    core: &CoreNumbers,
    opts: &RecurrenceOptions,
) -> Vec<RecurrenceInfluence> {
    let base: BTreeMap<u8, RecurrenceInfluence> = analyze_recurrences(table, foundational, core, opts)
        .into_iter()
        .map(|r| (r.digit, r))
        .collect();
    let mut changed: Vec<RecurrenceInfluence> =
        analyze_recurrences(table, &compose(foundational, layers), core, opts)
            .into_iter()
            .filter(|r| {
                base.get(&r.digit).is_none_or(|b| {
                    r.occurrences > b.occurrences || r.influence != b.influence
                })
            })
            .collect();
    changed.sort_by_key(|r| r.digit);
    changed
}
