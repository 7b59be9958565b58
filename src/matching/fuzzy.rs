//! Fuzzy entity matcher
//!
//! Resolves free-text names to catalog entities by normalized Levenshtein similarity.
//! Names are compared case-folded and trimmed. Equal scores keep catalog order, so the
//! first-seen candidate wins a tie.

use serde::Serialize;

use crate::models::CatalogEntity;

/// Default minimum similarity for a match to be accepted
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Levenshtein edit distance over chars
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Similarity in [0, 1]: `1 - distance / max(len)`
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(&a, &b) as f64 / longest as f64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match<'a> {
    pub entity: &'a CatalogEntity,
    pub similarity: f64,
}

/// Score every candidate, best first
pub fn rank_candidates<'a>(query: &str, candidates: &'a [CatalogEntity]) -> Vec<Match<'a>> {
    let mut ranked: Vec<Match<'a>> = candidates
        .iter()
        .map(|entity| Match {
            entity,
            similarity: similarity(query, &entity.name),
        })
        .collect();
    // stable: ties keep catalog order
    ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    ranked
}

/// Best candidate scoring at least `threshold`, or `None`
pub fn find_best_match<'a>(
    query: &str,
    candidates: &'a [CatalogEntity],
    threshold: f64,
) -> Option<Match<'a>> {
    let best = rank_candidates(query, candidates).into_iter().next()?;
    if best.similarity >= threshold {
        Some(best)
    } else {
        tracing::debug!(
            query,
            closest = %best.entity.name,
            similarity = best.similarity,
            "No catalog match above threshold"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogEntity> {
        vec![
            CatalogEntity::food(1, "Chicken Breast"),
            CatalogEntity::food(2, "Beef"),
            CatalogEntity::meal(3, "Chicken Curry"),
        ]
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("same", "same"), 0);
    }

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(similarity("Oats", "  oats "), 1.0);
        assert_eq!(similarity("abcd", "wxyz"), 0.0);
        assert_eq!(similarity("", ""), 1.0);
        assert!((similarity("kitten", "sitting") - (1.0 - 3.0 / 7.0)).abs() < 1e-12);
    }

    #[test]
    fn test_exact_match_ignores_case_and_whitespace() {
        let items = catalog();
        let m = find_best_match("chicken breast", &items, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(m.entity.id, 1);
        assert_eq!(m.similarity, 1.0);

        let m = find_best_match("  CHICKEN BREAST ", &items, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(m.entity.id, 1);
    }

    #[test]
    fn test_typo_still_matches() {
        let items = catalog();
        let m = find_best_match("chiken brest", &items, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(m.entity.id, 1);
        assert!(m.similarity < 1.0);
    }

    #[test]
    fn test_weak_candidates_rejected() {
        let items = vec![CatalogEntity::food(1, "Chicken Breast")];
        assert!(find_best_match("xyz123", &items, DEFAULT_THRESHOLD).is_none());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(find_best_match("beef", &[], DEFAULT_THRESHOLD).is_none());
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let items = vec![
            CatalogEntity::food(10, "rice"),
            CatalogEntity::food(11, "Rice"),
        ];
        let m = find_best_match("rice", &items, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(m.entity.id, 10);
    }

    #[test]
    fn test_rank_orders_descending() {
        let items = catalog();
        let ranked = rank_candidates("chicken", &items);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.windows(2).all(|w| w[0].similarity >= w[1].similarity));
        assert_eq!(ranked[2].entity.id, 2);
    }
}
