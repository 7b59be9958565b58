//! Engine tools
//!
//! JSON request/response wrappers around the engine entry points. Each request names its
//! operation; the response is the serialized result.

pub mod catalog;
pub mod exercise;
pub mod goals;
pub mod measurements;
pub mod nutrition;

use serde::Deserialize;
use serde_json::Value;

use crate::config::EngineConfig;

/// A single engine request
#[derive(Debug, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Request {
    ConvertUnits(measurements::ConvertUnitsParams),
    ScalePortion(nutrition::ScalePortionParams),
    AggregateNutrients(nutrition::AggregateNutrientsParams),
    AggregatePortions(nutrition::AggregatePortionsParams),
    NutritionTargets(nutrition::NutritionTargetsParams),
    ExerciseOutput(exercise::ExerciseOutputParams),
    EvaluateGoal(goals::EvaluateGoalParams),
    MatchEntity(catalog::MatchEntityParams),
}

impl Request {
    pub fn operation(&self) -> &'static str {
        match self {
            Request::ConvertUnits(_) => "convert_units",
            Request::ScalePortion(_) => "scale_portion",
            Request::AggregateNutrients(_) => "aggregate_nutrients",
            Request::AggregatePortions(_) => "aggregate_portions",
            Request::NutritionTargets(_) => "nutrition_targets",
            Request::ExerciseOutput(_) => "exercise_output",
            Request::EvaluateGoal(_) => "evaluate_goal",
            Request::MatchEntity(_) => "match_entity",
        }
    }
}

fn to_json<T: serde::Serialize>(result: Result<T, String>) -> Result<Value, String> {
    result.and_then(|r| serde_json::to_value(r).map_err(|e| format!("Serialization error: {}", e)))
}

/// Run a request and serialize its response
pub fn dispatch(request: Request, config: &EngineConfig) -> Result<Value, String> {
    let operation = request.operation();
    tracing::debug!(operation, "Dispatching request");

    let result = match request {
        Request::ConvertUnits(p) => to_json(measurements::convert_units(p)),
        Request::ScalePortion(p) => to_json(nutrition::scale_portion(p)),
        Request::AggregateNutrients(p) => to_json(nutrition::aggregate_nutrients(p)),
        Request::AggregatePortions(p) => to_json(nutrition::aggregate_portions_tool(p)),
        Request::NutritionTargets(p) => to_json(nutrition::nutrition_targets(p)),
        Request::ExerciseOutput(p) => to_json(exercise::exercise_output(p, config)),
        Request::EvaluateGoal(p) => to_json(goals::evaluate_goal_tool(p)),
        Request::MatchEntity(p) => to_json(catalog::match_entity(p, config)),
    };

    if let Err(e) = &result {
        tracing::info!(operation, "Request failed: {}", e);
    }
    result
}
