//! Catalog name matching

pub mod fuzzy;

pub use fuzzy::{
    find_best_match, levenshtein, rank_candidates, similarity, Match, DEFAULT_THRESHOLD,
};
