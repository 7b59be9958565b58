//! Measurement Tools
//!
//! Unit conversion exposed as a tool.

use serde::{Deserialize, Serialize};

use crate::measurement::{convert, Unit, UnitError};

/// Parameters for convert_units
#[derive(Debug, Deserialize)]
pub struct ConvertUnitsParams {
    pub value: f64,
    pub from: String,
    pub to: String,
}

/// Response for convert_units
#[derive(Debug, Serialize)]
pub struct ConvertUnitsResponse {
    pub value: f64,
    pub unit: Unit,
}

pub(crate) fn parse_unit(unit: &str) -> Result<Unit, String> {
    Unit::parse(unit).ok_or_else(|| UnitError::UnknownUnit(unit.to_string()).to_string())
}

/// Convert a value between two units of the same family
pub fn convert_units(params: ConvertUnitsParams) -> Result<ConvertUnitsResponse, String> {
    if !params.value.is_finite() {
        return Err("value must be a finite number".to_string());
    }
    let from = parse_unit(&params.from)?;
    let to = parse_unit(&params.to)?;

    let value = convert(params.value, from, to).map_err(|e| e.to_string())?;

    Ok(ConvertUnitsResponse { value, unit: to })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(value: f64, from: &str, to: &str) -> ConvertUnitsParams {
        ConvertUnitsParams {
            value,
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn test_convert_units() {
        let res = convert_units(params(2.0, "cups", "ml")).unwrap();
        assert!((res.value - 473.176).abs() < 1e-9);
        assert_eq!(res.unit, Unit::ML);
    }

    #[test]
    fn test_convert_units_errors() {
        assert_eq!(
            convert_units(params(1.0, "kg", "ml")).unwrap_err(),
            "Incompatible units: cannot convert kg to ml"
        );
        assert_eq!(
            convert_units(params(1.0, "stone", "kg")).unwrap_err(),
            "Unknown unit: 'stone'"
        );
    }
}
