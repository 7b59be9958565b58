//! Exercise calculation module

pub mod energy;

pub use energy::{
    compute_output, AnthropometricField, EnergyError, EnergyResult, SetWork, WorkMethod,
    WorkOutput, JOULES_PER_KCAL, STANDARD_GRAVITY,
};
