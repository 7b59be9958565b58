//! Data models
//!
//! Plain input values handed to the engine by the surrounding application.

mod catalog;
mod exercise;
mod goal;
mod nutrition;
mod profile;

pub use catalog::{CatalogEntity, EntityKind};
pub use exercise::{SetMeasures, WorkPowerConstants, DEFAULT_DISTANCE_M};
pub use goal::{
    BodyStatField, Criterion, CriterionError, ExerciseMeasure, Goal, GoalComponent,
    MeasurementSnapshot, Operator, Reading, TrackedQuantity, Value,
};
pub use nutrition::{Macros, Micros, NutrientProfile, PortionedItem};
pub use profile::{age_between, AnthropometricProfile, Sex};
