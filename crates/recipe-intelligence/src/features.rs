// ABOUTME: Per-group feature extractors mapping (query, recipe profile) to a similarity in [0, 1]
// ABOUTME: Categorical match, coverage, nutrition coverage, and embedding-backed ingredient similarity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Feature Extractors
//!
//! One extractor per [`CriteriaGroup`]. Every extractor returns 1.0 when the
//! query has no opinion on its group, so unspecified groups never penalize a
//! recipe. None of them can fail on well-formed input.

use std::collections::HashSet;

use recipe_core::models::{
    CriteriaGroup, HealthTarget, RecipeProfile, RecommendationQuery,
};

use crate::embedding::{cosine_similarity, EmbeddingTable};

/// Similarity per criteria group for one recipe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupScores([f64; CriteriaGroup::COUNT]);

impl GroupScores {
    /// Similarity for one group
    #[must_use]
    pub const fn get(&self, group: CriteriaGroup) -> f64 {
        self.0[group.index()]
    }

    /// Iterate `(group, similarity)` pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (CriteriaGroup, f64)> + '_ {
        CriteriaGroup::ALL.iter().map(|&g| (g, self.0[g.index()]))
    }
}

/// Exact categorical match; an absent query value is full credit
#[must_use]
pub fn categorical_match(query: Option<&str>, recipe: Option<&str>) -> f64 {
    match (query, recipe) {
        (None, _) => 1.0,
        (Some(wanted), Some(offered)) if wanted.eq_ignore_ascii_case(offered) => 1.0,
        _ => 0.0,
    }
}

/// Fraction of requested labels the recipe carries; an empty request is full credit
#[must_use]
pub fn coverage(query: &[String], recipe: &HashSet<String>) -> f64 {
    if query.is_empty() {
        return 1.0;
    }
    let matched = query.iter().filter(|label| recipe.contains(*label)).count();
    matched as f64 / query.len() as f64
}

/// Fraction of requested health targets the recipe satisfies
///
/// Full credit when no targets are requested or the nutrition group is
/// switched off with a zero weight.
#[must_use]
pub fn nutrition_coverage(targets: &[HealthTarget], weight: f64, profile: &RecipeProfile) -> f64 {
    if targets.is_empty() || weight <= 0.0 {
        return 1.0;
    }
    let matched = targets.iter().filter(|t| profile.satisfies(t)).count();
    matched as f64 / targets.len() as f64
}

/// Ingredient similarity precomputed against the corpus ingredient index
///
/// Row `q` holds the pairwise similarity of query ingredient `q` with every
/// unique corpus ingredient, so per-recipe scoring is a max over the
/// recipe's `ingredient_indices`.
#[derive(Debug, Clone, Default)]
pub struct IngredientMatcher {
    rows: Vec<Vec<f64>>,
}

impl IngredientMatcher {
    /// Build the similarity rows for a query
    ///
    /// `query` and `unique_ingredients` must already be normalized keys.
    #[must_use]
    pub fn new(query: &[String], unique_ingredients: &[String], embeddings: &EmbeddingTable) -> Self {
        let rows = query
            .iter()
            .map(|wanted| {
                let wanted_vector = embeddings.vector_for_key(wanted);
                unique_ingredients
                    .iter()
                    .map(|candidate| pairwise(wanted, wanted_vector, candidate, embeddings))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Mean over query ingredients of the best match among the recipe's ingredients
    #[must_use]
    pub fn similarity(&self, profile: &RecipeProfile) -> f64 {
        if self.rows.is_empty() {
            return 1.0;
        }
        let total: f64 = self
            .rows
            .iter()
            .map(|row| {
                profile
                    .ingredient_indices
                    .iter()
                    .filter_map(|&slot| row.get(slot as usize))
                    .copied()
                    .fold(0.0_f64, f64::max)
            })
            .sum();
        total / self.rows.len() as f64
    }
}

fn pairwise(
    wanted: &str,
    wanted_vector: Option<&[f32]>,
    candidate: &str,
    embeddings: &EmbeddingTable,
) -> f64 {
    if wanted == candidate {
        return 1.0;
    }
    match (wanted_vector, embeddings.vector_for_key(candidate)) {
        (Some(a), Some(b)) => cosine_similarity(a, b),
        _ => 0.0,
    }
}

/// All extractors bound to one query
#[derive(Debug)]
pub struct QueryFeatures<'q> {
    query: &'q RecommendationQuery,
    ingredients: IngredientMatcher,
}

impl<'q> QueryFeatures<'q> {
    /// Prepare extractors for a query against a corpus ingredient index
    #[must_use]
    pub fn new(
        query: &'q RecommendationQuery,
        unique_ingredients: &[String],
        embeddings: &EmbeddingTable,
    ) -> Self {
        Self {
            query,
            ingredients: IngredientMatcher::new(&query.ingredients, unique_ingredients, embeddings),
        }
    }

    /// Similarity of one recipe on one group
    #[must_use]
    pub fn similarity(&self, group: CriteriaGroup, profile: &RecipeProfile) -> f64 {
        let q = self.query;
        match group {
            CriteriaGroup::CookingMethod => categorical_match(
                q.cooking_method.as_deref(),
                profile.cooking_method.as_deref(),
            ),
            CriteriaGroup::CuisineRegion => categorical_match(
                q.cuisine_region.as_deref(),
                profile.cuisine_region.as_deref(),
            ),
            CriteriaGroup::ServingsBin => {
                categorical_match(q.servings_bin.as_deref(), profile.servings_bin.as_deref())
            }
            CriteriaGroup::CookTime => {
                categorical_match(q.cook_time.as_deref(), profile.cook_time.as_deref())
            }
            CriteriaGroup::DietTypes => coverage(&q.diet_types, &profile.diet_types),
            CriteriaGroup::MealType => coverage(&q.meal_type, &profile.meal_type),
            CriteriaGroup::Nutrition => nutrition_coverage(
                &q.health_types,
                q.weights.get(CriteriaGroup::Nutrition),
                profile,
            ),
            CriteriaGroup::Ingredients => self.ingredients.similarity(profile),
        }
    }

    /// Similarity of one recipe on every group
    #[must_use]
    pub fn score(&self, profile: &RecipeProfile) -> GroupScores {
        let mut scores = [0.0; CriteriaGroup::COUNT];
        for group in CriteriaGroup::ALL {
            scores[group.index()] = self.similarity(group, profile);
        }
        GroupScores(scores)
    }
}
