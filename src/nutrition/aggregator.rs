//! Nutrient aggregation
//!
//! Scaling a single item keeps unknown fields unknown. Totals always report calories and
//! the three macros, with unknown contributions counted as zero.

use serde::Serialize;

use crate::measurement::{ratio, Measurement};
use crate::models::{Macros, Micros, NutrientProfile, PortionedItem};

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn scale_field(value: Option<f64>, ratio: f64, round: bool) -> Option<f64> {
    value
        .map(|v| v * ratio)
        .filter(|v| v.is_finite())
        .map(|v| if round { round2(v) } else { v })
}

fn scale_with(nutrients: &NutrientProfile, ratio: f64, round: bool) -> NutrientProfile {
    let macros = nutrients
        .macros
        .as_ref()
        .map(|m| Macros {
            protein: scale_field(m.protein, ratio, round),
            carbs: scale_field(m.carbs, ratio, round),
            fat: scale_field(m.fat, ratio, round),
        })
        .filter(|m| !m.is_empty());

    let micros = nutrients
        .micros
        .as_ref()
        .map(|m| Micros {
            fiber: scale_field(m.fiber, ratio, round),
            sugar: scale_field(m.sugar, ratio, round),
            sodium: scale_field(m.sodium, ratio, round),
            saturated_fat: scale_field(m.saturated_fat, ratio, round),
            cholesterol: scale_field(m.cholesterol, ratio, round),
        })
        .filter(|m| !m.is_empty());

    NutrientProfile {
        calories: scale_field(nutrients.calories, ratio, round),
        macros,
        micros,
    }
}

/// Multiply every present field by `ratio`, rounded to 2 decimals
pub fn scale(nutrients: &NutrientProfile, ratio: f64) -> NutrientProfile {
    scale_with(nutrients, ratio, true)
}

fn accumulate(total: &mut Option<f64>, value: Option<f64>) {
    if let Some(v) = value {
        *total = Some(total.unwrap_or(0.0) + v);
    }
}

#[derive(Default)]
struct Totals {
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    micros: Micros,
}

impl Totals {
    fn add(&mut self, item: &NutrientProfile) {
        self.calories += item.calories.unwrap_or(0.0);
        self.protein += item.protein().unwrap_or(0.0);
        self.carbs += item.carbs().unwrap_or(0.0);
        self.fat += item.fat().unwrap_or(0.0);

        if let Some(m) = &item.micros {
            accumulate(&mut self.micros.fiber, m.fiber);
            accumulate(&mut self.micros.sugar, m.sugar);
            accumulate(&mut self.micros.sodium, m.sodium);
            accumulate(&mut self.micros.saturated_fat, m.saturated_fat);
            accumulate(&mut self.micros.cholesterol, m.cholesterol);
        }
    }

    fn finish(self) -> NutrientProfile {
        let round = |v: Option<f64>| v.map(round2);
        let micros = Micros {
            fiber: round(self.micros.fiber),
            sugar: round(self.micros.sugar),
            sodium: round(self.micros.sodium),
            saturated_fat: round(self.micros.saturated_fat),
            cholesterol: round(self.micros.cholesterol),
        };

        NutrientProfile {
            calories: Some(round2(self.calories)),
            macros: Some(Macros {
                protein: Some(round2(self.protein)),
                carbs: Some(round2(self.carbs)),
                fat: Some(round2(self.fat)),
            }),
            micros: (!micros.is_empty()).then_some(micros),
        }
    }
}

/// Sum nutrient profiles into a total
pub fn aggregate<'a, I>(items: I) -> NutrientProfile
where
    I: IntoIterator<Item = &'a NutrientProfile>,
{
    let mut totals = Totals::default();
    for item in items {
        totals.add(item);
    }
    totals.finish()
}

/// Portion ratio usable for scaling: same family and non-negative
fn portion_ratio(portion: &Measurement, serving: &Measurement) -> Option<f64> {
    ratio(portion, serving).filter(|r| r.is_finite() && *r >= 0.0)
}

impl PortionedItem {
    /// Nutrients for `portion`, or `None` if the portion can't be related to the serving
    /// or is negative
    pub fn nutrients_for(&self, portion: &Measurement) -> Option<NutrientProfile> {
        portion_ratio(portion, &self.serving).map(|r| scale(&self.nutrients, r))
    }
}

/// Totals for a batch of logged portions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortionTotals {
    pub totals: NutrientProfile,
    /// Indices of entries whose portion was negative or whose unit didn't match the serving
    pub skipped: Vec<usize>,
}

/// Scale each item to its logged portion and sum the results
///
/// Entries with incompatible units or negative portions are skipped rather than failing
/// the batch.
pub fn aggregate_portions(entries: &[(PortionedItem, Measurement)]) -> PortionTotals {
    let mut totals = Totals::default();
    let mut skipped = Vec::new();

    for (index, (item, portion)) in entries.iter().enumerate() {
        match portion_ratio(portion, &item.serving) {
            Some(r) => totals.add(&scale_with(&item.nutrients, r, false)),
            None => {
                tracing::warn!(
                    "Skipping portion {}: {} is not a usable portion of serving {}",
                    index,
                    portion,
                    item.serving
                );
                skipped.push(index);
            }
        }
    }

    PortionTotals {
        totals: totals.finish(),
        skipped,
    }
}
