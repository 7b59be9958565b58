//! Exercise Tools
//!
//! Work and power estimates for a logged exercise.

use serde::Deserialize;

use crate::config::EngineConfig;
use crate::exercise::{compute_output, WorkOutput};
use crate::models::{AnthropometricProfile, SetMeasures, WorkPowerConstants};

/// Parameters for exercise_output
#[derive(Debug, Deserialize)]
pub struct ExerciseOutputParams {
    #[serde(default)]
    pub profile: AnthropometricProfile,
    #[serde(default)]
    pub sets: Vec<SetMeasures>,
    /// One entry for every set, or a single entry shared by all sets
    #[serde(default = "default_constants")]
    pub constants: Vec<WorkPowerConstants>,
    #[serde(default)]
    pub elapsed_seconds: Option<f64>,
    /// Overrides the configured gravity
    #[serde(default)]
    pub gravity: Option<f64>,
}

fn default_constants() -> Vec<WorkPowerConstants> {
    vec![WorkPowerConstants::default()]
}

/// Compute work (and power) for the logged sets
pub fn exercise_output(
    params: ExerciseOutputParams,
    config: &EngineConfig,
) -> Result<WorkOutput, String> {
    let gravity = params.gravity.unwrap_or(config.gravity);
    if !(gravity.is_finite() && gravity > 0.0) {
        return Err("gravity must be a positive number".to_string());
    }

    compute_output(
        &params.profile,
        &params.sets,
        &params.constants,
        params.elapsed_seconds,
        gravity,
    )
    .map_err(|e| format!("Failed to compute exercise output: {}", e))
}
