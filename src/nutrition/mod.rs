//! Nutrition calculation module
//!
//! Nutrient scaling and totals, plus daily calorie and macro targets.

pub mod aggregator;
pub mod targets;

pub use aggregator::{aggregate, aggregate_portions, round2, scale, PortionTotals};
pub use targets::{
    bmr, calorie_target, macros, recommend, tdee, ActivityLevel, MacroPercentages, MacroTargets,
    NutritionGoals, NutritionRecommendation,
};
