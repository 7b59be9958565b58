//! Goal evaluation module

pub mod evaluator;

pub use evaluator::{
    compare, evaluate_component, evaluate_criterion, evaluate_goal, CompletionSource,
    ComponentEvaluation, CriterionEvaluation, CriterionStatus, GoalEvaluation,
};
