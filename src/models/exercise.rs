//! Exercise set model
//!
//! Measures logged for one set and the per-exercise constants used to turn them into
//! mechanical work.

use serde::{Deserialize, Serialize};

use crate::measurement::{Measurement, Unit};

/// Distance assumed for an exercise with no configured distance and no limb factors
pub const DEFAULT_DISTANCE_M: f64 = 0.0;

/// What was logged for a single set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetMeasures {
    /// Discrete repetitions; continuous movements leave this unset
    #[serde(default)]
    pub reps: Option<u32>,
    /// External load (barbell, dumbbell, carried weight)
    #[serde(default)]
    pub weight: Option<Measurement>,
    /// Recorded distance (carries, sprints)
    #[serde(default)]
    pub distance: Option<Measurement>,
    #[serde(default)]
    pub duration: Option<Measurement>,
    /// Machine-reported energy, kcal
    #[serde(default)]
    pub calories: Option<f64>,
}

/// Per-exercise factors for the work model
///
/// Unset factors are zero. `default_distance` must be a length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkPowerConstants {
    /// Share of body weight moved by the exercise (1.0 for a pull-up, ~0.65 for a push-up)
    pub bodyweight_factor: f64,
    pub arm_length_factor: f64,
    pub leg_length_factor: f64,
    pub default_distance: Measurement,
    /// Cardio machines: take logged calories instead of the force model
    pub uses_calorie_accounting: bool,
}

impl Default for WorkPowerConstants {
    fn default() -> Self {
        Self {
            bodyweight_factor: 0.0,
            arm_length_factor: 0.0,
            leg_length_factor: 0.0,
            default_distance: Measurement::new(DEFAULT_DISTANCE_M, Unit::M),
            uses_calorie_accounting: false,
        }
    }
}

impl WorkPowerConstants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constants for a cardio machine that reports its own calories
    pub fn calorie_accounting() -> Self {
        Self {
            uses_calorie_accounting: true,
            ..Self::default()
        }
    }

    pub fn with_bodyweight_factor(mut self, factor: f64) -> Self {
        self.bodyweight_factor = factor;
        self
    }

    pub fn with_arm_length_factor(mut self, factor: f64) -> Self {
        self.arm_length_factor = factor;
        self
    }

    pub fn with_leg_length_factor(mut self, factor: f64) -> Self {
        self.leg_length_factor = factor;
        self
    }

    pub fn with_default_distance(mut self, distance: Measurement) -> Self {
        self.default_distance = distance;
        self
    }

    pub fn uses_limb_distance(&self) -> bool {
        self.arm_length_factor != 0.0 || self.leg_length_factor != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = WorkPowerConstants::new();
        assert_eq!(c.bodyweight_factor, 0.0);
        assert_eq!(c.default_distance, Measurement::new(0.0, Unit::M));
        assert!(!c.uses_limb_distance());
        assert!(!c.uses_calorie_accounting);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{"bodyweight_factor": 1.0, "arm_length_factor": 0.5}"#;
        let c: WorkPowerConstants = serde_json::from_str(json).unwrap();
        assert_eq!(c.bodyweight_factor, 1.0);
        assert!(c.uses_limb_distance());
        assert_eq!(c.leg_length_factor, 0.0);
        assert_eq!(c.default_distance.unit, Unit::M);
    }
}
