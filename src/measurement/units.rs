//! Unit types and conversion constants
//!
//! Every unit belongs to exactly one family. Conversion factors map a unit to its
//! family's canonical unit (grams, centimeters, milliliters, seconds).

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Measurement error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("Incompatible units: cannot convert {from} to {to}")]
    IncompatibleUnits { from: Unit, to: Unit },

    #[error("Unknown unit: '{0}'")]
    UnknownUnit(String),
}

/// Result type for measurement operations
pub type UnitResult<T> = Result<T, UnitError>;

/// Family a unit belongs to; only units of the same family combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitFamily {
    Weight,
    Length,
    Volume,
    Time,
    Percentage,
    /// Discrete units (each, serving); each is compatible only with itself
    Count,
}

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

// ============================================================================
// Length Conversion Constants (to centimeters)
// ============================================================================

/// Centimeters per millimeter
pub const CM_PER_MM: f64 = 0.1;
/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;
/// Centimeters per kilometer
pub const CM_PER_KM: f64 = 100_000.0;
/// Centimeters per inch
pub const CM_PER_IN: f64 = 2.54;
/// Centimeters per foot
pub const CM_PER_FT: f64 = 30.48;
/// Centimeters per yard
pub const CM_PER_YD: f64 = 91.44;
/// Centimeters per mile
pub const CM_PER_MI: f64 = 160_934.4;

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per teaspoon
pub const ML_PER_TSP: f64 = 4.92892;
/// Milliliters per tablespoon
pub const ML_PER_TBSP: f64 = 14.7868;
/// Milliliters per fluid ounce
pub const ML_PER_FL_OZ: f64 = 29.5735;
/// Milliliters per cup (US)
pub const ML_PER_CUP: f64 = 236.588;
/// Milliliters per pint (US)
pub const ML_PER_PINT: f64 = 473.176;
/// Milliliters per quart (US)
pub const ML_PER_QUART: f64 = 946.353;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Milliliters per gallon (US)
pub const ML_PER_GALLON: f64 = 3785.41;

// ============================================================================
// Time Conversion Constants (to seconds)
// ============================================================================

pub const S_PER_MIN: f64 = 60.0;
pub const S_PER_HR: f64 = 3600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightUnit {
    Mg,
    G,
    Kg,
    Oz,
    Lb,
}

impl WeightUnit {
    pub fn grams_per_unit(&self) -> f64 {
        match self {
            WeightUnit::Mg => G_PER_MG,
            WeightUnit::G => 1.0,
            WeightUnit::Kg => G_PER_KG,
            WeightUnit::Oz => G_PER_OZ,
            WeightUnit::Lb => G_PER_LB,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Mm,
    Cm,
    M,
    Km,
    In,
    Ft,
    Yd,
    Mi,
}

impl LengthUnit {
    pub fn cm_per_unit(&self) -> f64 {
        match self {
            LengthUnit::Mm => CM_PER_MM,
            LengthUnit::Cm => 1.0,
            LengthUnit::M => CM_PER_M,
            LengthUnit::Km => CM_PER_KM,
            LengthUnit::In => CM_PER_IN,
            LengthUnit::Ft => CM_PER_FT,
            LengthUnit::Yd => CM_PER_YD,
            LengthUnit::Mi => CM_PER_MI,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeUnit {
    Ml,
    L,
    Tsp,
    Tbsp,
    FlOz,
    Cup,
    Pint,
    Quart,
    Gallon,
}

impl VolumeUnit {
    pub fn ml_per_unit(&self) -> f64 {
        match self {
            VolumeUnit::Ml => 1.0,
            VolumeUnit::L => ML_PER_LITER,
            VolumeUnit::Tsp => ML_PER_TSP,
            VolumeUnit::Tbsp => ML_PER_TBSP,
            VolumeUnit::FlOz => ML_PER_FL_OZ,
            VolumeUnit::Cup => ML_PER_CUP,
            VolumeUnit::Pint => ML_PER_PINT,
            VolumeUnit::Quart => ML_PER_QUART,
            VolumeUnit::Gallon => ML_PER_GALLON,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    S,
    Min,
    Hr,
}

impl TimeUnit {
    pub fn seconds_per_unit(&self) -> f64 {
        match self {
            TimeUnit::S => 1.0,
            TimeUnit::Min => S_PER_MIN,
            TimeUnit::Hr => S_PER_HR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountUnit {
    Each,
    Serving,
}

/// A measurement unit, tagged by family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    Weight(WeightUnit),
    Length(LengthUnit),
    Volume(VolumeUnit),
    Time(TimeUnit),
    Percent,
    Count(CountUnit),
}

impl Unit {
    pub const G: Unit = Unit::Weight(WeightUnit::G);
    pub const KG: Unit = Unit::Weight(WeightUnit::Kg);
    pub const LB: Unit = Unit::Weight(WeightUnit::Lb);
    pub const CM: Unit = Unit::Length(LengthUnit::Cm);
    pub const M: Unit = Unit::Length(LengthUnit::M);
    pub const IN: Unit = Unit::Length(LengthUnit::In);
    pub const ML: Unit = Unit::Volume(VolumeUnit::Ml);
    pub const CUP: Unit = Unit::Volume(VolumeUnit::Cup);
    pub const SECONDS: Unit = Unit::Time(TimeUnit::S);
    pub const MINUTES: Unit = Unit::Time(TimeUnit::Min);
    pub const EACH: Unit = Unit::Count(CountUnit::Each);
    pub const SERVING: Unit = Unit::Count(CountUnit::Serving);

    pub fn family(&self) -> UnitFamily {
        match self {
            Unit::Weight(_) => UnitFamily::Weight,
            Unit::Length(_) => UnitFamily::Length,
            Unit::Volume(_) => UnitFamily::Volume,
            Unit::Time(_) => UnitFamily::Time,
            Unit::Percent => UnitFamily::Percentage,
            Unit::Count(_) => UnitFamily::Count,
        }
    }

    /// Multiplicative factor from this unit to its family's canonical unit
    pub fn canonical_factor(&self) -> f64 {
        match self {
            Unit::Weight(u) => u.grams_per_unit(),
            Unit::Length(u) => u.cm_per_unit(),
            Unit::Volume(u) => u.ml_per_unit(),
            Unit::Time(u) => u.seconds_per_unit(),
            Unit::Percent | Unit::Count(_) => 1.0,
        }
    }

    /// Whether a value in this unit can be converted into `other`
    pub fn is_compatible_with(&self, other: &Unit) -> bool {
        match (self, other) {
            (Unit::Count(a), Unit::Count(b)) => a == b,
            _ => self.family() == other.family(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Weight(WeightUnit::Mg) => "mg",
            Unit::Weight(WeightUnit::G) => "g",
            Unit::Weight(WeightUnit::Kg) => "kg",
            Unit::Weight(WeightUnit::Oz) => "oz",
            Unit::Weight(WeightUnit::Lb) => "lb",
            Unit::Length(LengthUnit::Mm) => "mm",
            Unit::Length(LengthUnit::Cm) => "cm",
            Unit::Length(LengthUnit::M) => "m",
            Unit::Length(LengthUnit::Km) => "km",
            Unit::Length(LengthUnit::In) => "in",
            Unit::Length(LengthUnit::Ft) => "ft",
            Unit::Length(LengthUnit::Yd) => "yd",
            Unit::Length(LengthUnit::Mi) => "mi",
            Unit::Volume(VolumeUnit::Ml) => "ml",
            Unit::Volume(VolumeUnit::L) => "l",
            Unit::Volume(VolumeUnit::Tsp) => "tsp",
            Unit::Volume(VolumeUnit::Tbsp) => "tbsp",
            Unit::Volume(VolumeUnit::FlOz) => "fl oz",
            Unit::Volume(VolumeUnit::Cup) => "cup",
            Unit::Volume(VolumeUnit::Pint) => "pint",
            Unit::Volume(VolumeUnit::Quart) => "quart",
            Unit::Volume(VolumeUnit::Gallon) => "gallon",
            Unit::Time(TimeUnit::S) => "s",
            Unit::Time(TimeUnit::Min) => "min",
            Unit::Time(TimeUnit::Hr) => "hr",
            Unit::Percent => "%",
            Unit::Count(CountUnit::Each) => "each",
            Unit::Count(CountUnit::Serving) => "serving",
        }
    }

    /// Parse a unit string, accepting common spellings and plurals
    pub fn parse(unit: &str) -> Option<Self> {
        let lower = unit.to_lowercase();
        let trimmed = lower.trim();

        let parsed = match trimmed {
            "mg" | "milligram" | "milligrams" => Unit::Weight(WeightUnit::Mg),
            "g" | "gram" | "grams" => Unit::Weight(WeightUnit::G),
            "kg" | "kilogram" | "kilograms" | "kgs" => Unit::Weight(WeightUnit::Kg),
            "oz" | "ounce" | "ounces" => Unit::Weight(WeightUnit::Oz),
            "lb" | "lbs" | "pound" | "pounds" => Unit::Weight(WeightUnit::Lb),

            "mm" | "millimeter" | "millimeters" => Unit::Length(LengthUnit::Mm),
            "cm" | "centimeter" | "centimeters" => Unit::Length(LengthUnit::Cm),
            "m" | "meter" | "meters" | "metre" | "metres" => Unit::Length(LengthUnit::M),
            "km" | "kilometer" | "kilometers" => Unit::Length(LengthUnit::Km),
            "in" | "inch" | "inches" => Unit::Length(LengthUnit::In),
            "ft" | "foot" | "feet" => Unit::Length(LengthUnit::Ft),
            "yd" | "yard" | "yards" => Unit::Length(LengthUnit::Yd),
            "mi" | "mile" | "miles" => Unit::Length(LengthUnit::Mi),

            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Unit::Volume(VolumeUnit::Ml)
            }
            "l" | "liter" | "liters" | "litre" | "litres" => Unit::Volume(VolumeUnit::L),
            "tsp" | "teaspoon" | "teaspoons" => Unit::Volume(VolumeUnit::Tsp),
            "tbsp" | "tablespoon" | "tablespoons" => Unit::Volume(VolumeUnit::Tbsp),
            "fl oz" | "fl-oz" | "floz" | "fl. oz" | "fluid ounce" | "fluid ounces" => {
                Unit::Volume(VolumeUnit::FlOz)
            }
            "cup" | "cups" => Unit::Volume(VolumeUnit::Cup),
            "pint" | "pints" => Unit::Volume(VolumeUnit::Pint),
            "quart" | "quarts" => Unit::Volume(VolumeUnit::Quart),
            "gallon" | "gallons" => Unit::Volume(VolumeUnit::Gallon),

            "s" | "sec" | "secs" | "second" | "seconds" => Unit::Time(TimeUnit::S),
            "min" | "mins" | "minute" | "minutes" => Unit::Time(TimeUnit::Min),
            "h" | "hr" | "hrs" | "hour" | "hours" => Unit::Time(TimeUnit::Hr),

            "%" | "percent" | "pct" => Unit::Percent,

            "each" | "count" | "piece" | "pieces" | "item" | "items" => {
                Unit::Count(CountUnit::Each)
            }
            "serving" | "servings" => Unit::Count(CountUnit::Serving),

            _ => return None,
        };

        Some(parsed)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl TryFrom<String> for Unit {
    type Error = UnitError;

    fn try_from(value: String) -> UnitResult<Self> {
        Unit::parse(&value).ok_or(UnitError::UnknownUnit(value))
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> String {
        unit.symbol().to_string()
    }
}

/// A value tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: Unit,
}

impl Measurement {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn family(&self) -> UnitFamily {
        self.unit.family()
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
