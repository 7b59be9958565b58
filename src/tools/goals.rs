//! Goal Tools
//!
//! Goal completion against a measurement snapshot.

use serde::Deserialize;

use crate::goals::{evaluate_goal, GoalEvaluation};
use crate::models::{Goal, MeasurementSnapshot};

/// Parameters for evaluate_goal
#[derive(Debug, Deserialize)]
pub struct EvaluateGoalParams {
    pub goal: Goal,
    #[serde(default)]
    pub snapshot: MeasurementSnapshot,
}

/// Evaluate every component of a goal
pub fn evaluate_goal_tool(params: EvaluateGoalParams) -> Result<GoalEvaluation, String> {
    Ok(evaluate_goal(&params.goal, &params.snapshot))
}
