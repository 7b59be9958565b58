//! End-to-end checks of the JSON tool layer

use serde_json::json;

use healthmetrics::config::EngineConfig;
use healthmetrics::tools::{dispatch, Request};

fn run(request: serde_json::Value) -> Result<serde_json::Value, String> {
    let request: Request = serde_json::from_value(request).map_err(|e| e.to_string())?;
    dispatch(request, &EngineConfig::default())
}

#[test]
fn test_convert_units_request() {
    let res = run(json!({"operation": "convert_units", "value": 10, "from": "lb", "to": "kg"}))
        .unwrap();
    assert!((res["value"].as_f64().unwrap() - 4.53592).abs() < 1e-9);
    assert_eq!(res["unit"], "kg");
}

#[test]
fn test_unknown_operation_rejected() {
    assert!(run(json!({"operation": "delete_everything"})).is_err());
}

#[test]
fn test_aggregate_portions_request() {
    let res = run(json!({
        "operation": "aggregate_portions",
        "entries": [
            {
                "item": {"nutrients": {"calories": 52, "macros": {"carbs": 14}}, "serving": {"value": 100, "unit": "g"}},
                "portion": {"value": 1, "unit": "cup"}
            },
            {
                "item": {"nutrients": {"calories": 42, "macros": {"protein": 3.4, "carbs": 5, "fat": 1}}, "serving": {"value": 100, "unit": "ml"}},
                "portion": {"value": 1, "unit": "cup"}
            }
        ]
    }))
    .unwrap();

    assert_eq!(res["skipped"], json!([0]));
    assert_eq!(res["totals"]["calories"], json!(99.37));
    assert_eq!(res["totals"]["macros"]["fat"], json!(2.37));
}

#[test]
fn test_nutrition_targets_request() {
    let res = run(json!({
        "operation": "nutrition_targets",
        "profile": {
            "weight": {"value": 70, "unit": "kg"},
            "height": {"value": 175, "unit": "cm"},
            "birth_date": "1994-01-15",
            "sex": "male"
        },
        "goals": {"activity_level": "moderately_active", "target_weight": {"value": 65, "unit": "kg"}},
        "as_of": "2024-06-01"
    }))
    .unwrap();

    assert_eq!(res["profile_complete"], json!(true));
    assert_eq!(res["recommendation"]["bmr"], json!(1648.75));
    let tdee = 1648.75 * 1.55;
    let target = res["recommendation"]["calorie_target"].as_f64().unwrap();
    assert!((target - (tdee - 374.0)).abs() < 1e-9);
}

#[test]
fn test_nutrition_targets_incomplete_profile_is_empty() {
    let res = run(json!({
        "operation": "nutrition_targets",
        "profile": {"weight": {"value": 70, "unit": "kg"}}
    }))
    .unwrap();
    assert_eq!(res["profile_complete"], json!(false));
    assert_eq!(res["recommendation"], json!({}));
}

#[test]
fn test_exercise_output_request() {
    let res = run(json!({
        "operation": "exercise_output",
        "profile": {
            "weight": {"value": 80, "unit": "kg"},
            "arm_length": {"value": 60, "unit": "cm"},
            "leg_length": {"value": 90, "unit": "cm"}
        },
        "sets": [{"reps": 10}, {"reps": 8}],
        "constants": [{"bodyweight_factor": 1.0, "arm_length_factor": 1.0}],
        "elapsed_seconds": 120
    }))
    .unwrap();

    let work = res["work_joules"].as_f64().unwrap();
    assert!((work - 80.0 * 0.6 * 18.0).abs() < 1e-9);
    assert!((res["power_watts"].as_f64().unwrap() - work / 120.0).abs() < 1e-9);
    assert_eq!(res["sets"].as_array().unwrap().len(), 2);
}

#[test]
fn test_exercise_output_missing_leg_length() {
    let err = run(json!({
        "operation": "exercise_output",
        "profile": {
            "weight": {"value": 80, "unit": "kg"},
            "arm_length": {"value": 60, "unit": "cm"}
        },
        "sets": [{"reps": 10}]
    }))
    .unwrap_err();
    assert!(err.contains("leg length"));
}

#[test]
fn test_evaluate_goal_request() {
    let res = run(json!({
        "operation": "evaluate_goal",
        "goal": {
            "id": 1,
            "name": "Lean out",
            "components": [
                {
                    "id": 10,
                    "criteria": [{
                        "operator": "less_or_equal",
                        "target": {"value": 80, "unit": "kg"},
                        "quantity": {"kind": "body_stat", "field": "weight"}
                    }]
                },
                {"id": 11, "manually_completed": true}
            ]
        },
        "snapshot": {
            "readings": [
                {"quantity": {"kind": "body_stat", "field": "weight"}, "value": {"value": 176, "unit": "lb"}, "recorded_at": "2024-05-02T07:00:00Z"},
                {"quantity": {"kind": "body_stat", "field": "weight"}, "value": {"value": 85, "unit": "kg"}, "recorded_at": "2024-04-02T07:00:00Z"}
            ]
        }
    }))
    .unwrap();

    assert_eq!(res["complete"], json!(true));
    assert_eq!(res["completed_components"], json!(2));
    assert_eq!(res["components"][1]["source"], json!("manual"));
}

#[test]
fn test_evaluate_goal_literal_ordering_reports_reason() {
    let res = run(json!({
        "operation": "evaluate_goal",
        "goal": {
            "id": 1,
            "components": [{
                "id": 10,
                "criteria": [{
                    "operator": "greater_than",
                    "target": "intermediate",
                    "quantity": {"kind": "exercise", "exercise_id": 4, "measure": "reps"}
                }]
            }]
        },
        "snapshot": {
            "readings": [
                {"quantity": {"kind": "exercise", "exercise_id": 4, "measure": "reps"}, "value": "advanced", "recorded_at": "2024-05-02T07:00:00Z"}
            ]
        }
    }))
    .unwrap();

    assert_eq!(res["complete"], json!(false));
    let criterion = &res["components"][0]["criteria"][0];
    assert_eq!(criterion["status"], json!("undetermined"));
    assert_eq!(criterion["error"]["reason"], json!("unsupported_comparison"));
}

#[test]
fn test_match_entity_request() {
    let candidates = json!([
        {"id": 1, "name": "Chicken Breast"},
        {"id": 2, "name": "Beef", "kind": "food"},
        {"id": 3, "name": "Chicken Stir Fry", "kind": "meal"}
    ]);

    let res = run(json!({"operation": "match_entity", "query": "chicken breast", "candidates": candidates}))
        .unwrap();
    assert_eq!(res["found"], json!(true));
    assert_eq!(res["best"]["entity"]["id"], json!(1));
    assert_eq!(res["best"]["similarity"], json!(1.0));

    let res = run(json!({"operation": "match_entity", "query": "xyz123", "candidates": candidates, "alternatives": 2}))
        .unwrap();
    assert_eq!(res["found"], json!(false));
    assert!(res.get("best").is_none());
    assert_eq!(res["alternatives"].as_array().unwrap().len(), 2);
}

#[test]
fn test_aggregate_portions_negative_portion_rejected() {
    let err = run(json!({
        "operation": "aggregate_portions",
        "entries": [{
            "item": {"nutrients": {"calories": 100}, "serving": {"value": 100, "unit": "g"}},
            "portion": {"value": -200, "unit": "g"}
        }]
    }))
    .unwrap_err();
    assert_eq!(err, "portion cannot be negative");
}

#[test]
fn test_evaluate_goal_written_operator_spellings() {
    let res = run(json!({
        "operation": "evaluate_goal",
        "goal": {
            "id": 2,
            "components": [{
                "id": 20,
                "criteria": [
                    {
                        "operator": "greater than",
                        "target": {"value": 100, "unit": "kg"},
                        "quantity": {"kind": "exercise", "exercise_id": 7, "measure": "weight"}
                    },
                    {
                        "operator": "greater-or-equal",
                        "target": {"value": 5, "unit": "each"},
                        "quantity": {"kind": "exercise", "exercise_id": 7, "measure": "reps"}
                    },
                    {
                        "operator": "not equal",
                        "target": "beginner",
                        "quantity": {"kind": "body_stat", "field": "body_fat"}
                    }
                ]
            }]
        },
        "snapshot": {
            "readings": [
                {
                    "quantity": {"kind": "exercise", "exercise_id": 7, "measure": "weight"},
                    "value": {"value": 225, "unit": "lb"},
                    "recorded_at": "2024-05-02T07:00:00Z"
                },
                {
                    "quantity": {"kind": "exercise", "exercise_id": 7, "measure": "reps"},
                    "value": {"value": 5, "unit": "each"},
                    "recorded_at": "2024-05-02T07:00:00Z"
                },
                {
                    "quantity": {"kind": "body_stat", "field": "body_fat"},
                    "value": "advanced",
                    "recorded_at": "2024-05-02T07:00:00Z"
                }
            ]
        }
    }))
    .unwrap();

    assert_eq!(res["complete"], json!(true));
    let criteria = res["components"][0]["criteria"].as_array().unwrap();
    assert!(criteria.iter().all(|c| c["status"] == json!("met")));
}
