//! Shared nutrition data structures
//!
//! Every field is optional: an absent value means "unknown", which is different from zero.

use serde::{Deserialize, Serialize};

use crate::measurement::Measurement;

/// Macronutrients, in grams
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
}

impl Macros {
    pub fn is_empty(&self) -> bool {
        self.protein.is_none() && self.carbs.is_none() && self.fat.is_none()
    }
}

/// Micronutrients and other label values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Micros {
    /// grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    /// grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    /// milligrams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    /// grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturated_fat: Option<f64>,
    /// milligrams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cholesterol: Option<f64>,
}

impl Micros {
    pub fn is_empty(&self) -> bool {
        self.fiber.is_none()
            && self.sugar.is_none()
            && self.sodium.is_none()
            && self.saturated_fat.is_none()
            && self.cholesterol.is_none()
    }
}

/// Nutritional information for a food, meal, or total
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macros: Option<Macros>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub micros: Option<Micros>,
}

impl NutrientProfile {
    /// Profile with calories and the three macros set
    pub fn basic(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories: Some(calories),
            macros: Some(Macros {
                protein: Some(protein),
                carbs: Some(carbs),
                fat: Some(fat),
            }),
            micros: None,
        }
    }

    pub fn protein(&self) -> Option<f64> {
        self.macros.as_ref().and_then(|m| m.protein)
    }

    pub fn carbs(&self) -> Option<f64> {
        self.macros.as_ref().and_then(|m| m.carbs)
    }

    pub fn fat(&self) -> Option<f64> {
        self.macros.as_ref().and_then(|m| m.fat)
    }

    /// First negative field, if any, as (name, value)
    pub fn first_negative(&self) -> Option<(&'static str, f64)> {
        let macros = self.macros.clone().unwrap_or_default();
        let micros = self.micros.clone().unwrap_or_default();
        [
            ("calories", self.calories),
            ("protein", macros.protein),
            ("carbs", macros.carbs),
            ("fat", macros.fat),
            ("fiber", micros.fiber),
            ("sugar", micros.sugar),
            ("sodium", micros.sodium),
            ("saturated_fat", micros.saturated_fat),
            ("cholesterol", micros.cholesterol),
        ]
        .into_iter()
        .find_map(|(name, value)| value.filter(|v| *v < 0.0).map(|v| (name, v)))
    }
}

/// Nutrients anchored to a reference serving (e.g. "per 100 g" or "per 1 cup")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortionedItem {
    pub nutrients: NutrientProfile,
    pub serving: Measurement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let profile = NutrientProfile {
            calories: Some(120.0),
            macros: Some(Macros {
                protein: Some(3.0),
                ..Default::default()
            }),
            micros: None,
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json, serde_json::json!({"calories": 120.0, "macros": {"protein": 3.0}}));
    }

    #[test]
    fn test_first_negative() {
        let mut profile = NutrientProfile::basic(100.0, 1.0, 2.0, 3.0);
        assert_eq!(profile.first_negative(), None);

        profile.micros = Some(Micros {
            sodium: Some(-5.0),
            ..Default::default()
        });
        assert_eq!(profile.first_negative(), Some(("sodium", -5.0)));
    }
}
