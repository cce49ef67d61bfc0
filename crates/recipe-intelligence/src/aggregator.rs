// ABOUTME: Weighted aggregation of per-group similarities and strict/relaxed candidate qualification
// ABOUTME: Normalizes by total weight; zero total weight scores every recipe at 0
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::models::{CriteriaGroup, CriteriaWeights};

use crate::features::GroupScores;

/// How a scored recipe qualifies against the active groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualification {
    /// Nonzero similarity on every active group
    Strict,
    /// Nonzero similarity on at least one active group, but not all
    Relaxed,
    /// Zero similarity on every active group
    Excluded,
}

/// Weighted mean of group similarities
///
/// `Σ w·s / Σ w`; only relative weight magnitudes matter. Returns 0 when the
/// total weight is zero.
#[must_use]
pub fn aggregate(scores: &GroupScores, weights: &CriteriaWeights) -> f64 {
    let total = weights.total();
    if total <= 0.0 || !total.is_finite() {
        return 0.0;
    }
    let weighted: f64 = scores
        .iter()
        .map(|(group, similarity)| weights.get(group) / total * similarity)
        .sum();
    if weighted.is_finite() {
        weighted.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Classify a recipe against the active groups
///
/// With no active groups every recipe qualifies strictly.
#[must_use]
pub fn qualify(scores: &GroupScores, active: &[CriteriaGroup]) -> Qualification {
    let matched = active.iter().filter(|&&g| scores.get(g) > 0.0).count();
    if matched == active.len() {
        Qualification::Strict
    } else if matched > 0 {
        Qualification::Relaxed
    } else {
        Qualification::Excluded
    }
}
