//! Measurement model
//!
//! Unit-tagged values and conversions between units of the same family.

pub mod converter;
pub mod units;

pub use converter::{convert, ratio};
pub use units::{
    CountUnit, LengthUnit, Measurement, TimeUnit, Unit, UnitError, UnitFamily, UnitResult,
    VolumeUnit, WeightUnit,
};
