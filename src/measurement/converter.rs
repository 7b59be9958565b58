//! Unit conversion functions
//!
//! Conversions route through the family's canonical unit. Identical units short-circuit
//! so a no-op conversion returns the input value untouched.

use super::units::{Measurement, Unit, UnitError, UnitResult};

/// Convert a value from one unit to another of the same family
pub fn convert(value: f64, from: Unit, to: Unit) -> UnitResult<f64> {
    if from == to {
        return Ok(value);
    }
    if !from.is_compatible_with(&to) {
        return Err(UnitError::IncompatibleUnits { from, to });
    }
    Ok(value * from.canonical_factor() / to.canonical_factor())
}

/// Scale factor between a portion and a base serving
///
/// Returns `None` when the units belong to different families or the base is zero.
pub fn ratio(portion: &Measurement, base: &Measurement) -> Option<f64> {
    if base.value == 0.0 {
        return None;
    }
    if portion.unit == base.unit {
        return Some(portion.value / base.value);
    }
    if !portion.unit.is_compatible_with(&base.unit) {
        return None;
    }
    Some(portion.to_canonical() / base.to_canonical())
}

impl Measurement {
    /// Value expressed in the family's canonical unit
    pub fn to_canonical(&self) -> f64 {
        self.value * self.unit.canonical_factor()
    }

    pub fn convert_to(&self, unit: Unit) -> UnitResult<Measurement> {
        Ok(Measurement::new(convert(self.value, self.unit, unit)?, unit))
    }

    /// Value in `unit`, for callers that only need the number
    pub fn value_in(&self, unit: Unit) -> UnitResult<f64> {
        convert(self.value, self.unit, unit)
    }
}
