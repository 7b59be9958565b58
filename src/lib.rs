//! Health Metrics Engine Library
//!
//! Derived values for a personal health tracker: unit-aware measurements, nutrient totals,
//! nutrition targets, exercise energy, goal completion and fuzzy catalog matching.
//! Every calculation is a pure function of its inputs.

pub mod build_info;
pub mod config;
pub mod exercise;
pub mod goals;
pub mod matching;
pub mod measurement;
pub mod models;
pub mod nutrition;
pub mod tools;
