//! Nutrition target calculator
//!
//! BMR -> TDEE -> goal-adjusted calorie target -> macro split.
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::measurement::{Measurement, Unit};
use crate::models::{AnthropometricProfile, Sex};

/// Energy stored in one kilogram of body mass (kcal)
pub const KCAL_PER_KG: f64 = 7700.0;
/// Moderate rate of weight change (kg/week)
pub const WEEKLY_RATE_KG: f64 = 0.34;
/// Below this distance from the target weight, recommend maintenance
pub const MAINTENANCE_TOLERANCE_KG: f64 = 0.5;
/// Weight-loss targets never drop below BMR times this factor
pub const LOSS_FLOOR_BMR_FACTOR: f64 = 1.1;

pub const PROTEIN_G_PER_KG: f64 = 1.6;
pub const PROTEIN_G_PER_KG_COMPOSITION: f64 = 2.0;
pub const FAT_G_PER_KG: f64 = 0.8;
pub const PROTEIN_CALORIE_SHARE: f64 = 0.25;
pub const FAT_CALORIE_SHARE: f64 = 0.25;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// 1-3 days/week
    LightlyActive,
    /// 3-5 days/week
    ModeratelyActive,
    /// 6-7 days/week
    VeryActive,
    /// Hard training twice a day
    ExtraActive,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "lightly_active" | "light" => Some(ActivityLevel::LightlyActive),
            "moderately_active" | "moderate" => Some(ActivityLevel::ModeratelyActive),
            "very_active" => Some(ActivityLevel::VeryActive),
            "extra_active" | "extremely_active" => Some(ActivityLevel::ExtraActive),
            _ => None,
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(s: String) -> Self {
        ActivityLevel::parse(&s).unwrap_or_else(|| {
            tracing::warn!("Unknown activity level '{}', using sedentary", s);
            ActivityLevel::Sedentary
        })
    }
}

/// Basal Metabolic Rate (kcal/day), Mifflin-St Jeor
///
/// `10 x weight + 6.25 x height - 5 x age + (5 male | -161 female)`
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    let sex_constant = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years) + sex_constant
}

/// Total Daily Energy Expenditure (kcal/day); a missing level counts as sedentary
pub fn tdee(bmr: f64, activity_level: Option<ActivityLevel>) -> f64 {
    bmr * activity_level.unwrap_or_default().multiplier()
}

/// Daily calorie target for a weight goal
///
/// With no target weight, or within [`MAINTENANCE_TOLERANCE_KG`] of it, this is maintenance.
/// Otherwise TDEE moves by a fixed 0.34 kg/week worth of energy. `is_loss` defaults to
/// whether the target is below the current weight.
pub fn calorie_target(
    tdee: f64,
    bmr: f64,
    current_weight_kg: f64,
    target_weight_kg: Option<f64>,
    is_loss: Option<bool>,
) -> f64 {
    let target = match target_weight_kg {
        Some(t) => t,
        None => return tdee,
    };

    if (current_weight_kg - target).abs() < MAINTENANCE_TOLERANCE_KG {
        return tdee;
    }

    let daily_delta = WEEKLY_RATE_KG * KCAL_PER_KG / 7.0;
    let is_loss = is_loss.unwrap_or(target < current_weight_kg);

    if is_loss {
        (tdee - daily_delta).max(bmr * LOSS_FLOOR_BMR_FACTOR)
    } else {
        tdee + daily_delta
    }
}

/// Daily macro targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Share of calories from each macro
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroPercentages {
    pub protein_percent: f64,
    pub carbs_percent: f64,
    pub fat_percent: f64,
}

/// Split a calorie target into macros
///
/// Protein and fat each take the higher of a body-weight floor and a 25% calorie share;
/// carbs fill what remains and are never negative.
pub fn macros(weight_kg: f64, calorie_target: f64, has_composition_goal: bool) -> MacroTargets {
    let protein_per_kg = if has_composition_goal {
        PROTEIN_G_PER_KG_COMPOSITION
    } else {
        PROTEIN_G_PER_KG
    };

    let protein_g = (weight_kg * protein_per_kg)
        .max(PROTEIN_CALORIE_SHARE * calorie_target / KCAL_PER_G_PROTEIN);
    let fat_g = (weight_kg * FAT_G_PER_KG).max(FAT_CALORIE_SHARE * calorie_target / KCAL_PER_G_FAT);
    let carbs_g = ((calorie_target - protein_g * KCAL_PER_G_PROTEIN - fat_g * KCAL_PER_G_FAT)
        / KCAL_PER_G_CARBS)
        .max(0.0);

    MacroTargets {
        protein_g,
        carbs_g,
        fat_g,
    }
}

impl MacroTargets {
    pub fn percentages(&self) -> MacroPercentages {
        let protein_kcal = self.protein_g * KCAL_PER_G_PROTEIN;
        let carbs_kcal = self.carbs_g * KCAL_PER_G_CARBS;
        let fat_kcal = self.fat_g * KCAL_PER_G_FAT;
        let total = protein_kcal + carbs_kcal + fat_kcal;

        if total <= 0.0 {
            return MacroPercentages {
                protein_percent: 0.0,
                carbs_percent: 0.0,
                fat_percent: 0.0,
            };
        }

        MacroPercentages {
            protein_percent: protein_kcal / total * 100.0,
            carbs_percent: carbs_kcal / total * 100.0,
            fat_percent: fat_kcal / total * 100.0,
        }
    }
}

/// The user's nutrition-related goal settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub target_weight: Option<Measurement>,
    #[serde(default)]
    pub is_loss: Option<bool>,
    /// A body-composition (recomposition, muscle) goal is active
    #[serde(default)]
    pub has_composition_goal: bool,
}

/// Full recommendation; every field is absent when the profile is incomplete
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NutritionRecommendation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tdee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calorie_target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<MacroTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macro_percentages: Option<MacroPercentages>,
}

impl NutritionRecommendation {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.bmr.is_none()
    }
}

/// Run the whole pipeline for a profile
///
/// Returns an empty recommendation when weight, height, sex or age is unknown.
pub fn recommend(
    profile: &AnthropometricProfile,
    goals: &NutritionGoals,
    as_of: NaiveDate,
) -> NutritionRecommendation {
    let (weight_kg, height_cm, age, sex) = match (
        profile.weight_kg(),
        profile.height_cm(),
        profile.age_on(as_of),
        profile.sex,
    ) {
        (Some(w), Some(h), Some(a), Some(s)) => (w, h, a, s),
        _ => {
            tracing::debug!("Profile incomplete, returning empty nutrition recommendation");
            return NutritionRecommendation::empty();
        }
    };

    let target_weight_kg = goals.target_weight.and_then(|m| match m.value_in(Unit::KG) {
        Ok(kg) => Some(kg),
        Err(e) => {
            tracing::warn!("Ignoring target weight: {}", e);
            None
        }
    });

    let bmr = bmr(weight_kg, height_cm, age, sex);
    let tdee = tdee(bmr, goals.activity_level);
    let target = calorie_target(tdee, bmr, weight_kg, target_weight_kg, goals.is_loss);
    let macros = macros(weight_kg, target, goals.has_composition_goal);

    tracing::debug!(bmr, tdee, target, "Computed nutrition targets");

    NutritionRecommendation {
        bmr: Some(bmr),
        tdee: Some(tdee),
        calorie_target: Some(target),
        macros: Some(macros),
        macro_percentages: Some(macros.percentages()),
    }
}
