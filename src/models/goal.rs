//! Goal model
//!
//! A goal is made of components; each component is made of criteria that compare a tracked
//! quantity against a target value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::measurement::{Measurement, Unit};

/// Reasons a criterion cannot be evaluated to true or false
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum CriterionError {
    #[error("Operator '{operator}' is not defined for literal values")]
    UnsupportedComparison { operator: Operator },

    #[error("Cannot compare a {observed} reading with a {target} target")]
    TypeMismatch {
        observed: &'static str,
        target: &'static str,
    },

    #[error("Incompatible units: {observed} vs {target}")]
    IncompatibleUnits { observed: Unit, target: Unit },

    #[error("Criterion does not reference a tracked quantity")]
    NoReference,

    #[error("No measurement recorded for the referenced quantity")]
    NoMeasurement,

    #[error("Unknown operator: '{operator}'")]
    UnknownOperator { operator: String },
}

/// Conditional operator of a criterion
///
/// Deserializes from any spelling `parse` accepts ("greater than", "greater-or-equal", ">=").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operator {
    Equals,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
    NotEqual,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::GreaterThan => "greater_than",
            Operator::LessThan => "less_than",
            Operator::GreaterOrEqual => "greater_or_equal",
            Operator::LessOrEqual => "less_or_equal",
            Operator::NotEqual => "not_equal",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "equals" | "equal" | "=" | "==" => Some(Operator::Equals),
            "greater than" | ">" => Some(Operator::GreaterThan),
            "less than" | "<" => Some(Operator::LessThan),
            "greater or equal" | "greater than or equal" | ">=" => Some(Operator::GreaterOrEqual),
            "less or equal" | "less than or equal" | "<=" => Some(Operator::LessOrEqual),
            "not equal" | "not equals" | "!=" | "<>" => Some(Operator::NotEqual),
            _ => None,
        }
    }

    /// Operators that need an ordering, not just equality
    pub fn is_ordering(&self) -> bool {
        !matches!(self, Operator::Equals | Operator::NotEqual)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Operator {
    type Error = CriterionError;

    fn try_from(value: String) -> Result<Self, CriterionError> {
        Operator::parse(&value).ok_or(CriterionError::UnknownOperator { operator: value })
    }
}

impl From<Operator> for String {
    fn from(operator: Operator) -> String {
        operator.as_str().to_string()
    }
}

/// A criterion target or an observed reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Numeric(Measurement),
    Literal(String),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Numeric(_) => "numeric",
            Value::Literal(_) => "literal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyStatField {
    Weight,
    Height,
    BodyFat,
    Waist,
    ArmLength,
    LegLength,
}

/// Which value of an exercise's logged sets a criterion looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseMeasure {
    Weight,
    Reps,
    Distance,
    Duration,
}

/// Quantity a criterion is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrackedQuantity {
    BodyStat { field: BodyStatField },
    Exercise { exercise_id: i64, measure: ExerciseMeasure },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    #[serde(default)]
    pub id: Option<i64>,
    pub operator: Operator,
    pub target: Value,
    #[serde(default)]
    pub quantity: Option<TrackedQuantity>,
}

impl Criterion {
    /// Build a criterion, rejecting ordering operators on literal targets
    pub fn new(
        operator: Operator,
        target: Value,
        quantity: Option<TrackedQuantity>,
    ) -> Result<Self, CriterionError> {
        if matches!(target, Value::Literal(_)) && operator.is_ordering() {
            return Err(CriterionError::UnsupportedComparison { operator });
        }
        Ok(Self {
            id: None,
            operator,
            target,
            quantity,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalComponent {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub criteria: Vec<Criterion>,
    /// Manual completion state; only consulted when there are no criteria
    #[serde(default)]
    pub manually_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub components: Vec<GoalComponent>,
}

/// One recorded value of a tracked quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub quantity: TrackedQuantity,
    pub value: Value,
    pub recorded_at: DateTime<Utc>,
}

/// Readings handed to a single evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSnapshot {
    #[serde(default)]
    pub readings: Vec<Reading>,
}

impl MeasurementSnapshot {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    /// Most recent reading of `quantity`
    pub fn latest(&self, quantity: &TrackedQuantity) -> Option<&Reading> {
        self.readings
            .iter()
            .filter(|r| &r.quantity == quantity)
            .max_by_key(|r| r.recorded_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const WEIGHT: TrackedQuantity = TrackedQuantity::BodyStat {
        field: BodyStatField::Weight,
    };

    #[test]
    fn test_operator_parse() {
        assert_eq!(Operator::parse("greater than"), Some(Operator::GreaterThan));
        assert_eq!(Operator::parse("greater-or-equal"), Some(Operator::GreaterOrEqual));
        assert_eq!(Operator::parse("<="), Some(Operator::LessOrEqual));
        assert_eq!(Operator::parse("not_equal"), Some(Operator::NotEqual));
        assert_eq!(Operator::parse("about"), None);
    }

    #[test]
    fn test_operator_json_accepts_written_spellings() {
        let cases = [
            ("greater than", Operator::GreaterThan),
            ("greater-or-equal", Operator::GreaterOrEqual),
            ("not equal", Operator::NotEqual),
            ("less_or_equal", Operator::LessOrEqual),
            ("equals", Operator::Equals),
        ];
        for (text, expected) in cases {
            let op: Operator = serde_json::from_value(serde_json::json!(text)).unwrap();
            assert_eq!(op, expected, "{}", text);
        }

        assert!(serde_json::from_value::<Operator>(serde_json::json!("roughly")).is_err());
        assert_eq!(
            serde_json::to_value(Operator::GreaterOrEqual).unwrap(),
            serde_json::json!("greater_or_equal")
        );
    }

    #[test]
    fn test_criterion_json_with_spaced_operator() {
        let criterion: Criterion = serde_json::from_value(serde_json::json!({
            "operator": "greater than",
            "target": {"value": 100, "unit": "kg"}
        }))
        .unwrap();
        assert_eq!(criterion.operator, Operator::GreaterThan);
    }

    #[test]
    fn test_literal_ordering_rejected_at_construction() {
        let err = Criterion::new(Operator::LessThan, Value::Literal("b".into()), None).unwrap_err();
        assert_eq!(
            err,
            CriterionError::UnsupportedComparison {
                operator: Operator::LessThan
            }
        );
        assert!(Criterion::new(Operator::Equals, Value::Literal("b".into()), None).is_ok());
    }

    #[test]
    fn test_value_untagged_json() {
        let numeric: Value = serde_json::from_str(r#"{"value": 80, "unit": "kg"}"#).unwrap();
        assert_eq!(numeric, Value::Numeric(Measurement::new(80.0, Unit::KG)));

        let literal: Value = serde_json::from_str(r#""advanced""#).unwrap();
        assert_eq!(literal, Value::Literal("advanced".into()));
    }

    #[test]
    fn test_snapshot_latest_by_timestamp() {
        let at = |d| Utc.with_ymd_and_hms(2024, 1, d, 8, 0, 0).unwrap();
        let snapshot = MeasurementSnapshot::new(vec![
            Reading {
                quantity: WEIGHT,
                value: Value::Numeric(Measurement::new(82.0, Unit::KG)),
                recorded_at: at(3),
            },
            Reading {
                quantity: WEIGHT,
                value: Value::Numeric(Measurement::new(80.0, Unit::KG)),
                recorded_at: at(9),
            },
            Reading {
                quantity: WEIGHT,
                value: Value::Numeric(Measurement::new(81.0, Unit::KG)),
                recorded_at: at(5),
            },
        ]);

        let latest = snapshot.latest(&WEIGHT).unwrap();
        assert_eq!(latest.value, Value::Numeric(Measurement::new(80.0, Unit::KG)));

        let waist = TrackedQuantity::BodyStat {
            field: BodyStatField::Waist,
        };
        assert!(snapshot.latest(&waist).is_none());
    }
}
