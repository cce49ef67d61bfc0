// ABOUTME: Deterministic ranking of scored recipes with top-k truncation
// ABOUTME: Orders by descending score, ties broken by ascending recipe id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Ordering;

use recipe_core::models::RecipeId;
use serde::{Deserialize, Serialize};

/// Aggregate score of one recipe for one query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecipe {
    /// Recipe identifier
    pub id: RecipeId,
    /// Aggregate score in `[0, 1]`
    pub score: f64,
}

fn by_rank(a: &ScoredRecipe, b: &ScoredRecipe) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id))
}

/// Order by rank and keep at most `top_k` ids; never pads
#[must_use]
pub fn rank(mut scored: Vec<ScoredRecipe>, top_k: usize) -> Vec<RecipeId> {
    if top_k == 0 {
        return Vec::new();
    }
    if scored.len() > top_k {
        scored.select_nth_unstable_by(top_k, by_rank);
        scored.truncate(top_k);
    }
    scored.sort_unstable_by(by_rank);
    scored.into_iter().map(|s| s.id).collect()
}
