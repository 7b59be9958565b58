//! Exercise energy calculator
//!
//! Estimates mechanical work and power for a logged exercise from body measurements and
//! per-exercise constants.
//!
//! Per set:
//! - calorie-accounting exercises (cardio machines) take logged kcal x 4184 J
//! - everything else: `force x distance x reps`, where force comes from the moved mass
//!   (body weight share plus external load) and distance is the recorded distance, else the
//!   limb-derived distance, else the configured default distance

use serde::Serialize;
use thiserror::Error;

use crate::measurement::{Unit, UnitError};
use crate::models::{AnthropometricProfile, SetMeasures, WorkPowerConstants};

/// Standard gravity (m/s^2)
pub const STANDARD_GRAVITY: f64 = 9.81;
/// Joules per kilocalorie
pub const JOULES_PER_KCAL: f64 = 4184.0;

/// Profile fields the calculator cannot work without
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnthropometricField {
    Weight,
    ArmLength,
    LegLength,
}

impl std::fmt::Display for AnthropometricField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AnthropometricField::Weight => "weight",
            AnthropometricField::ArmLength => "arm length",
            AnthropometricField::LegLength => "leg length",
        })
    }
}

/// Exercise energy error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnergyError {
    #[error("Missing anthropometric data: {0}")]
    MissingAnthropometry(AnthropometricField),

    #[error("Expected 1 or {sets} sets of constants, got {constants}")]
    ConstantsMismatch { sets: usize, constants: usize },

    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// Result type for energy calculations
pub type EnergyResult<T> = Result<T, EnergyError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkMethod {
    CalorieAccounting,
    ForceModel,
}

/// Work done in one set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetWork {
    pub method: WorkMethod,
    pub work_joules: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkOutput {
    pub work_joules: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_watts: Option<f64>,
    pub kilocalories: f64,
    pub sets: Vec<SetWork>,
}

/// Body measurements resolved to kilograms and meters
struct Body {
    weight_kg: f64,
    arm_m: f64,
    leg_m: f64,
}

impl Body {
    fn from_profile(profile: &AnthropometricProfile) -> EnergyResult<Self> {
        let weight = profile
            .weight
            .ok_or(EnergyError::MissingAnthropometry(AnthropometricField::Weight))?;
        let arm = profile
            .arm_length
            .ok_or(EnergyError::MissingAnthropometry(AnthropometricField::ArmLength))?;
        let leg = profile
            .leg_length
            .ok_or(EnergyError::MissingAnthropometry(AnthropometricField::LegLength))?;

        Ok(Self {
            weight_kg: weight.value_in(Unit::KG)?,
            arm_m: arm.value_in(Unit::M)?,
            leg_m: leg.value_in(Unit::M)?,
        })
    }
}

fn set_work(
    body: &Body,
    measures: &SetMeasures,
    constants: &WorkPowerConstants,
    gravity: f64,
) -> EnergyResult<SetWork> {
    if constants.uses_calorie_accounting {
        return Ok(SetWork {
            method: WorkMethod::CalorieAccounting,
            work_joules: measures.calories.unwrap_or(0.0) * JOULES_PER_KCAL,
            force: None,
            distance_m: None,
        });
    }

    let load_kg = match measures.weight {
        Some(load) => load.value_in(Unit::KG)?,
        None => 0.0,
    };
    let mass = body.weight_kg * constants.bodyweight_factor + load_kg;
    let force = mass * (gravity / STANDARD_GRAVITY);

    let mut distance_m = constants.default_distance.value_in(Unit::M)?;
    if constants.uses_limb_distance() {
        distance_m =
            body.arm_m * constants.arm_length_factor + body.leg_m * constants.leg_length_factor;
    }
    if let Some(recorded) = measures.distance {
        distance_m = recorded.value_in(Unit::M)?;
    }

    let reps = f64::from(measures.reps.unwrap_or(1));

    Ok(SetWork {
        method: WorkMethod::ForceModel,
        work_joules: force * distance_m * reps,
        force: Some(force),
        distance_m: Some(distance_m),
    })
}

/// Total work (and power, if `elapsed_seconds` is known) for a logged exercise
///
/// `constants` holds either one entry applied to every set or one entry per set.
/// Weight, arm length and leg length must all be present in `profile`.
pub fn compute_output(
    profile: &AnthropometricProfile,
    sets: &[SetMeasures],
    constants: &[WorkPowerConstants],
    elapsed_seconds: Option<f64>,
    gravity: f64,
) -> EnergyResult<WorkOutput> {
    let body = Body::from_profile(profile)?;

    if constants.len() != 1 && constants.len() != sets.len() {
        return Err(EnergyError::ConstantsMismatch {
            sets: sets.len(),
            constants: constants.len(),
        });
    }

    let per_set = sets
        .iter()
        .enumerate()
        .map(|(i, measures)| {
            let c = if constants.len() == 1 {
                &constants[0]
            } else {
                &constants[i]
            };
            set_work(&body, measures, c, gravity)
        })
        .collect::<EnergyResult<Vec<_>>>()?;

    let work_joules: f64 = per_set.iter().map(|s| s.work_joules).sum();

    let power_watts = match elapsed_seconds {
        Some(t) if t > 0.0 => Some(work_joules / t),
        Some(t) => {
            tracing::warn!("Ignoring non-positive elapsed time {}s; power omitted", t);
            None
        }
        None => None,
    };

    tracing::debug!(work_joules, sets = per_set.len(), "Computed exercise output");

    Ok(WorkOutput {
        work_joules,
        power_watts,
        kilocalories: work_joules / JOULES_PER_KCAL,
        sets: per_set,
    })
}
