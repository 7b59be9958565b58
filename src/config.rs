//! Engine configuration
//!
//! Defaults can be overridden through environment variables.

use thiserror::Error;

use crate::exercise::STANDARD_GRAVITY;
use crate::matching::DEFAULT_THRESHOLD;

pub const ENV_MATCH_THRESHOLD: &str = "HM_MATCH_THRESHOLD";
pub const ENV_GRAVITY: &str = "HM_GRAVITY";

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    NotANumber { name: &'static str, value: String },

    #[error("{name} must be {expected}, got {value}")]
    OutOfRange {
        name: &'static str,
        expected: &'static str,
        value: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Minimum similarity for a fuzzy catalog match
    pub match_threshold: f64,
    /// Gravity (m/s^2) for the exercise energy calculator
    pub gravity: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_THRESHOLD,
            gravity: STANDARD_GRAVITY,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MATCH_THRESHOLD) {
            config.match_threshold = parse_number(ENV_MATCH_THRESHOLD, &raw)?;
        }
        if let Some(raw) = lookup(ENV_GRAVITY) {
            config.gravity = parse_number(ENV_GRAVITY, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(ConfigError::OutOfRange {
                name: ENV_MATCH_THRESHOLD,
                expected: "between 0 and 1",
                value: self.match_threshold,
            });
        }
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(ConfigError::OutOfRange {
                name: ENV_GRAVITY,
                expected: "positive",
                value: self.gravity,
            });
        }
        Ok(())
    }
}

fn parse_number(name: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim().parse::<f64>().map_err(|_| ConfigError::NotANumber {
        name,
        value: raw.to_string(),
    })
}
