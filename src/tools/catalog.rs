//! Catalog Tools
//!
//! Resolve free-text food or meal names to catalog entries.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::matching::{find_best_match, rank_candidates};
use crate::models::CatalogEntity;

/// Parameters for match_entity
#[derive(Debug, Deserialize)]
pub struct MatchEntityParams {
    pub query: String,
    #[serde(default)]
    pub candidates: Vec<CatalogEntity>,
    /// Overrides the configured match threshold
    #[serde(default)]
    pub threshold: Option<f64>,
    /// Number of ranked alternatives to include
    #[serde(default)]
    pub alternatives: usize,
}

/// Scored catalog entry
#[derive(Debug, Serialize)]
pub struct MatchSummary {
    pub entity: CatalogEntity,
    pub similarity: f64,
}

/// Response for match_entity
#[derive(Debug, Serialize)]
pub struct MatchEntityResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<MatchSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<MatchSummary>,
}

/// Find the catalog entity closest to a query
pub fn match_entity(
    params: MatchEntityParams,
    config: &EngineConfig,
) -> Result<MatchEntityResponse, String> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err("query cannot be empty".to_string());
    }

    let threshold = params.threshold.unwrap_or(config.match_threshold);
    if !(0.0..=1.0).contains(&threshold) {
        return Err("threshold must be between 0 and 1".to_string());
    }

    let best = find_best_match(query, &params.candidates, threshold).map(|m| MatchSummary {
        entity: m.entity.clone(),
        similarity: m.similarity,
    });

    let alternatives = rank_candidates(query, &params.candidates)
        .into_iter()
        .take(params.alternatives)
        .map(|m| MatchSummary {
            entity: m.entity.clone(),
            similarity: m.similarity,
        })
        .collect();

    Ok(MatchEntityResponse {
        found: best.is_some(),
        best,
        alternatives,
    })
}
