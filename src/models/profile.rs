//! Anthropometric profile
//!
//! Body measurements a user has recorded so far. Every field is optional because profiles
//! are filled in progressively.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::measurement::{Measurement, Unit};

/// Biological sex, used by the BMR equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = String;

    fn try_from(value: String) -> Result<Self, String> {
        Sex::parse(&value).ok_or_else(|| format!("Unknown sex: '{}'", value))
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> String {
        sex.as_str().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnthropometricProfile {
    #[serde(default)]
    pub weight: Option<Measurement>,
    #[serde(default)]
    pub height: Option<Measurement>,
    #[serde(default)]
    pub arm_length: Option<Measurement>,
    #[serde(default)]
    pub leg_length: Option<Measurement>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Explicit age; takes precedence over `birth_date`
    #[serde(default)]
    pub age_years: Option<u32>,
    #[serde(default)]
    pub sex: Option<Sex>,
}

impl AnthropometricProfile {
    /// Age in whole years on `as_of`
    pub fn age_on(&self, as_of: NaiveDate) -> Option<u32> {
        if let Some(age) = self.age_years {
            return Some(age);
        }
        self.birth_date.and_then(|dob| age_between(dob, as_of))
    }

    /// Body weight in kilograms, if recorded in a weight unit
    pub fn weight_kg(&self) -> Option<f64> {
        self.weight.and_then(|m| m.value_in(Unit::KG).ok())
    }

    /// Height in centimeters, if recorded in a length unit
    pub fn height_cm(&self) -> Option<f64> {
        self.height.and_then(|m| m.value_in(Unit::CM).ok())
    }
}

/// Completed years between two dates; `None` if `as_of` precedes `birth`
pub fn age_between(birth: NaiveDate, as_of: NaiveDate) -> Option<u32> {
    let mut years = as_of.year() - birth.year();
    if (as_of.month(), as_of.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}
