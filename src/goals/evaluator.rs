//! Goal criteria evaluator
//!
//! Completion is recomputed from the snapshot on every call. A component with criteria is
//! complete iff all of them are met; a component without criteria keeps its manual state.
//! A goal is complete iff it has at least one component and all components are complete.

use serde::Serialize;

use crate::models::{
    Criterion, CriterionError, Goal, GoalComponent, MeasurementSnapshot, Operator, Value,
};

/// Relative tolerance for numeric equality on canonical values
const EQUALITY_TOLERANCE: f64 = 1e-9;

fn nearly_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= EQUALITY_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Compare an observed value against a target
pub fn compare(
    observed: &Value,
    operator: Operator,
    target: &Value,
) -> Result<bool, CriterionError> {
    match (observed, target) {
        (_, Value::Literal(_)) if operator.is_ordering() => {
            Err(CriterionError::UnsupportedComparison { operator })
        }
        (Value::Numeric(o), Value::Numeric(t)) => {
            if !o.unit.is_compatible_with(&t.unit) {
                return Err(CriterionError::IncompatibleUnits {
                    observed: o.unit,
                    target: t.unit,
                });
            }
            let (a, b) = (o.to_canonical(), t.to_canonical());
            let eq = nearly_equal(a, b);
            Ok(match operator {
                Operator::Equals => eq,
                Operator::NotEqual => !eq,
                Operator::GreaterThan => a > b && !eq,
                Operator::LessThan => a < b && !eq,
                Operator::GreaterOrEqual => a > b || eq,
                Operator::LessOrEqual => a < b || eq,
            })
        }
        (Value::Literal(o), Value::Literal(t)) => match operator {
            Operator::Equals => Ok(o.trim() == t.trim()),
            Operator::NotEqual => Ok(o.trim() != t.trim()),
            _ => Err(CriterionError::UnsupportedComparison { operator }),
        },
        _ => Err(CriterionError::TypeMismatch {
            observed: observed.kind(),
            target: target.kind(),
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionStatus {
    Met,
    Unmet,
    /// Could not be evaluated; counts as not met
    Undetermined,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionEvaluation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criterion_id: Option<i64>,
    pub status: CriterionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CriterionError>,
}

impl CriterionEvaluation {
    pub fn is_met(&self) -> bool {
        self.status == CriterionStatus::Met
    }
}

/// Whether a component's state came from its criteria or from the user's toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionSource {
    Criteria,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentEvaluation {
    pub component_id: i64,
    pub complete: bool,
    pub source: CompletionSource,
    pub criteria: Vec<CriterionEvaluation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalEvaluation {
    pub goal_id: i64,
    pub complete: bool,
    pub completed_components: usize,
    pub total_components: usize,
    pub components: Vec<ComponentEvaluation>,
}

/// Evaluate one criterion against the latest reading of its quantity
pub fn evaluate_criterion(
    criterion: &Criterion,
    snapshot: &MeasurementSnapshot,
) -> CriterionEvaluation {
    let undetermined = |observed: Option<Value>, error: CriterionError| CriterionEvaluation {
        criterion_id: criterion.id,
        status: CriterionStatus::Undetermined,
        observed,
        error: Some(error),
    };

    let quantity = match &criterion.quantity {
        Some(q) => q,
        None => return undetermined(None, CriterionError::NoReference),
    };
    let reading = match snapshot.latest(quantity) {
        Some(r) => r,
        None => return undetermined(None, CriterionError::NoMeasurement),
    };

    match compare(&reading.value, criterion.operator, &criterion.target) {
        Ok(met) => CriterionEvaluation {
            criterion_id: criterion.id,
            status: if met {
                CriterionStatus::Met
            } else {
                CriterionStatus::Unmet
            },
            observed: Some(reading.value.clone()),
            error: None,
        },
        Err(e) => {
            tracing::warn!(
                criterion_id = ?criterion.id,
                "Criterion cannot be evaluated: {}",
                e
            );
            undetermined(Some(reading.value.clone()), e)
        }
    }
}

pub fn evaluate_component(
    component: &GoalComponent,
    snapshot: &MeasurementSnapshot,
) -> ComponentEvaluation {
    if component.criteria.is_empty() {
        return ComponentEvaluation {
            component_id: component.id,
            complete: component.manually_completed,
            source: CompletionSource::Manual,
            criteria: Vec::new(),
        };
    }

    let criteria: Vec<_> = component
        .criteria
        .iter()
        .map(|c| evaluate_criterion(c, snapshot))
        .collect();

    ComponentEvaluation {
        component_id: component.id,
        complete: criteria.iter().all(CriterionEvaluation::is_met),
        source: CompletionSource::Criteria,
        criteria,
    }
}

pub fn evaluate_goal(goal: &Goal, snapshot: &MeasurementSnapshot) -> GoalEvaluation {
    let components: Vec<_> = goal
        .components
        .iter()
        .map(|c| evaluate_component(c, snapshot))
        .collect();

    let completed_components = components.iter().filter(|c| c.complete).count();
    let total_components = components.len();

    GoalEvaluation {
        goal_id: goal.id,
        complete: total_components > 0 && completed_components == total_components,
        completed_components,
        total_components,
        components,
    }
}
