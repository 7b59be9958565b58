//! Nutrition Tools
//!
//! Portion scaling, nutrient totals and daily targets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::measurement::Measurement;
use crate::models::{AnthropometricProfile, NutrientProfile, PortionedItem};
use crate::nutrition::{
    aggregate, aggregate_portions, recommend, NutritionGoals, NutritionRecommendation,
    PortionTotals,
};

/// Parameters for scale_portion
#[derive(Debug, Deserialize)]
pub struct ScalePortionParams {
    pub item: PortionedItem,
    pub portion: Measurement,
}

/// Response for scale_portion
#[derive(Debug, Serialize)]
pub struct ScalePortionResponse {
    pub ratio: f64,
    pub nutrients: NutrientProfile,
}

/// Parameters for aggregate_nutrients
#[derive(Debug, Deserialize)]
pub struct AggregateNutrientsParams {
    pub items: Vec<NutrientProfile>,
}

/// One logged portion of an item
#[derive(Debug, Deserialize)]
pub struct PortionEntry {
    pub item: PortionedItem,
    pub portion: Measurement,
}

/// Parameters for aggregate_portions
#[derive(Debug, Deserialize)]
pub struct AggregatePortionsParams {
    pub entries: Vec<PortionEntry>,
}

/// Parameters for nutrition_targets
#[derive(Debug, Deserialize)]
pub struct NutritionTargetsParams {
    #[serde(default)]
    pub profile: AnthropometricProfile,
    #[serde(default)]
    pub goals: NutritionGoals,
    /// Date ages are computed on; defaults to today (UTC)
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Response for nutrition_targets
#[derive(Debug, Serialize)]
pub struct NutritionTargetsResponse {
    /// False when the profile is missing weight, height, sex or age
    pub profile_complete: bool,
    pub recommendation: NutritionRecommendation,
}

fn validate_nutrients(nutrients: &NutrientProfile) -> Result<(), String> {
    match nutrients.first_negative() {
        Some((field, _)) => Err(format!("{} cannot be negative", field)),
        None => Ok(()),
    }
}

fn validate_portion(portion: &Measurement) -> Result<(), String> {
    if portion.value < 0.0 {
        return Err("portion cannot be negative".to_string());
    }
    Ok(())
}

fn validate_item(item: &PortionedItem) -> Result<(), String> {
    validate_nutrients(&item.nutrients)?;
    if item.serving.value <= 0.0 {
        return Err("serving size must be greater than 0".to_string());
    }
    Ok(())
}

/// Scale an item's nutrients to a logged portion
pub fn scale_portion(params: ScalePortionParams) -> Result<ScalePortionResponse, String> {
    validate_item(&params.item)?;
    validate_portion(&params.portion)?;

    let ratio = crate::measurement::ratio(&params.portion, &params.item.serving).ok_or_else(|| {
        format!(
            "Portion unit '{}' is incompatible with serving unit '{}'",
            params.portion.unit, params.item.serving.unit
        )
    })?;

    Ok(ScalePortionResponse {
        ratio,
        nutrients: crate::nutrition::scale(&params.item.nutrients, ratio),
    })
}

/// Sum nutrient profiles
pub fn aggregate_nutrients(params: AggregateNutrientsParams) -> Result<NutrientProfile, String> {
    for item in &params.items {
        validate_nutrients(item)?;
    }
    Ok(aggregate(&params.items))
}

/// Scale and sum logged portions, skipping entries with incompatible units
///
/// A negative portion rejects the whole request, as in `scale_portion`.
pub fn aggregate_portions_tool(params: AggregatePortionsParams) -> Result<PortionTotals, String> {
    let mut entries = Vec::with_capacity(params.entries.len());
    for entry in params.entries {
        validate_item(&entry.item)?;
        validate_portion(&entry.portion)?;
        entries.push((entry.item, entry.portion));
    }
    Ok(aggregate_portions(&entries))
}

/// Daily calorie and macro targets for a profile
pub fn nutrition_targets(
    params: NutritionTargetsParams,
) -> Result<NutritionTargetsResponse, String> {
    let as_of = params
        .as_of
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    let recommendation = recommend(&params.profile, &params.goals, as_of);

    Ok(NutritionTargetsResponse {
        profile_complete: !recommendation.is_empty(),
        recommendation,
    })
}
