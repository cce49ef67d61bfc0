// ABOUTME: Recommendation engine orchestrating extractors, aggregator, and ranker over the corpus
// ABOUTME: Fans per-recipe scoring out across the rayon pool with a fold/reduce
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rayon::prelude::*;
use recipe_core::models::{Corpus, RecipeId, RecommendationQuery};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregator::{aggregate, qualify, Qualification};
use crate::embedding::EmbeddingTable;
use crate::features::QueryFeatures;
use crate::ranker::{rank, ScoredRecipe};

/// Outcome of one recommendation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Ranked recipe ids, at most `top_k`
    pub ids: Vec<RecipeId>,
    /// Recipes passing the strict pass
    pub strict_candidates: usize,
    /// Recipes matching at least one active group but not all
    pub partial_candidates: usize,
    /// True when results came from the relaxation pass
    pub relaxed: bool,
}

#[derive(Default)]
struct Candidates {
    strict: Vec<ScoredRecipe>,
    partial: Vec<ScoredRecipe>,
}

impl Candidates {
    fn merge(mut self, other: Self) -> Self {
        self.strict.extend(other.strict);
        self.partial.extend(other.partial);
        self
    }
}

/// Scores and ranks the whole corpus for a query
///
/// Owns the immutable corpus and embedding table; share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct RecommendationEngine {
    corpus: Corpus,
    embeddings: EmbeddingTable,
}

impl RecommendationEngine {
    /// Create an engine over a loaded corpus and embedding table
    #[must_use]
    pub fn new(corpus: Corpus, embeddings: EmbeddingTable) -> Self {
        Self { corpus, embeddings }
    }

    /// The corpus being ranked
    #[must_use]
    pub const fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The ingredient embedding table
    #[must_use]
    pub const fn embeddings(&self) -> &EmbeddingTable {
        &self.embeddings
    }

    /// Rank the corpus for a validated query
    ///
    /// Strict candidates are ranked when any exist. Otherwise, when the query
    /// is flexible, partial candidates are ranked instead; a non-flexible
    /// query yields an empty list.
    #[must_use]
    pub fn recommend(&self, query: &RecommendationQuery) -> Recommendation {
        let features = QueryFeatures::new(
            query,
            self.corpus.unique_ingredients(),
            &self.embeddings,
        );
        let active = query.active_groups();

        let candidates = self
            .corpus
            .profiles()
            .par_iter()
            .fold(Candidates::default, |mut acc, profile| {
                let scores = features.score(profile);
                let scored = ScoredRecipe {
                    id: profile.id,
                    score: aggregate(&scores, &query.weights),
                };
                match qualify(&scores, &active) {
                    Qualification::Strict => acc.strict.push(scored),
                    Qualification::Relaxed => acc.partial.push(scored),
                    Qualification::Excluded => {}
                }
                acc
            })
            .reduce(Candidates::default, Candidates::merge);

        let strict_candidates = candidates.strict.len();
        let partial_candidates = candidates.partial.len();
        let relaxed = strict_candidates == 0 && query.flexible && partial_candidates > 0;

        debug!(
            active_groups = active.len(),
            strict_candidates, partial_candidates, relaxed, "Scored recipe corpus"
        );

        let ids = if strict_candidates > 0 {
            rank(candidates.strict, query.top_k)
        } else if relaxed {
            rank(candidates.partial, query.top_k)
        } else {
            Vec::new()
        };

        Recommendation {
            ids,
            strict_candidates,
            partial_candidates,
            relaxed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_core::models::{CriteriaGroup, CriteriaWeights, Recipe};

    fn recipe(id: u64) -> Recipe {
        Recipe {
            id: RecipeId(id),
            name: format!("Recipe {id}"),
            ..Recipe::default()
        }
    }

    fn engine(recipes: Vec<Recipe>) -> RecommendationEngine {
        RecommendationEngine::new(
            Corpus::from_recipes(recipes).unwrap(),
            EmbeddingTable::empty(),
        )
    }

    fn only(group: CriteriaGroup) -> CriteriaWeights {
        CriteriaWeights::zero().with(group, 1.0)
    }

    #[test]
    fn test_exact_cooking_method_excludes_zero_scorers() {
        let engine = engine(vec![
            Recipe {
                cooking_method: Some("Bake".to_owned()),
                ..recipe(1)
            },
            Recipe {
                cooking_method: Some("grill".to_owned()),
                ..recipe(2)
            },
            recipe(3),
        ]);
        let query = RecommendationQuery {
            cooking_method: Some("bake".to_owned()),
            weights: only(CriteriaGroup::CookingMethod),
            top_k: 2,
            ..RecommendationQuery::default()
        };

        let result = engine.recommend(&query);
        assert_eq!(result.ids, vec![RecipeId(1)]);
        assert!(!result.relaxed);
    }

    #[test]
    fn test_partial_diet_coverage_still_qualifies() {
        let engine = engine(vec![Recipe {
            diet_types: vec!["Vegan".to_owned()],
            ..recipe(4)
        }]);
        let query = RecommendationQuery {
            diet_types: vec!["vegan".to_owned(), "gluten free".to_owned()],
            ..RecommendationQuery::default()
        };
        assert_eq!(engine.recommend(&query).ids, vec![RecipeId(4)]);
    }

    #[test]
    fn test_unmatched_ingredient_without_flexible_is_empty() {
        let engine = engine(vec![
            Recipe {
                ingredients: vec!["flour".to_owned()],
                ..recipe(1)
            },
            recipe(2),
        ]);
        let query = RecommendationQuery {
            ingredients: vec!["egg".to_owned()],
            weights: only(CriteriaGroup::Ingredients),
            flexible: false,
            ..RecommendationQuery::default()
        };
        let result = engine.recommend(&query);
        assert!(result.ids.is_empty());
        assert_eq!(result.strict_candidates, 0);
    }

    #[test]
    fn test_flexible_relaxes_when_strict_pass_is_empty() {
        let engine = engine(vec![
            Recipe {
                cooking_method: Some("bake".to_owned()),
                cuisine_region: Some("Asian".to_owned()),
                ..recipe(1)
            },
            Recipe {
                cooking_method: Some("grill".to_owned()),
                cuisine_region: Some("Italian".to_owned()),
                ..recipe(2)
            },
            Recipe {
                cooking_method: Some("fry".to_owned()),
                ..recipe(3)
            },
        ]);
        let query = RecommendationQuery {
            cooking_method: Some("bake".to_owned()),
            cuisine_region: Some("italian".to_owned()),
            weights: CriteriaWeights::zero()
                .with(CriteriaGroup::CookingMethod, 2.0)
                .with(CriteriaGroup::CuisineRegion, 1.0),
            top_k: 5,
            ..RecommendationQuery::default()
        };

        let strict = engine.recommend(&query);
        assert!(strict.ids.is_empty());

        let flexible = engine.recommend(&RecommendationQuery {
            flexible: true,
            ..query
        });
        assert!(flexible.relaxed);
        assert_eq!(flexible.ids, vec![RecipeId(1), RecipeId(2)]);
    }

    #[test]
    fn test_strict_results_win_over_relaxation() {
        let engine = engine(vec![
            Recipe {
                cooking_method: Some("bake".to_owned()),
                ..recipe(1)
            },
            recipe(2),
        ]);
        let query = RecommendationQuery {
            cooking_method: Some("bake".to_owned()),
            flexible: true,
            ..RecommendationQuery::default()
        };
        let result = engine.recommend(&query);
        assert!(!result.relaxed);
        assert_eq!(result.ids, vec![RecipeId(1)]);
    }

    #[test]
    fn test_zero_weight_group_does_not_filter_or_reorder() {
        let engine = engine(vec![
            Recipe {
                cooking_method: Some("bake".to_owned()),
                diet_types: vec!["vegan".to_owned()],
                ..recipe(2)
            },
            Recipe {
                cooking_method: Some("bake".to_owned()),
                ..recipe(1)
            },
        ]);
        let query = RecommendationQuery {
            cooking_method: Some("bake".to_owned()),
            diet_types: vec!["vegan".to_owned()],
            weights: only(CriteriaGroup::CookingMethod),
            ..RecommendationQuery::default()
        };
        assert_eq!(engine.recommend(&query).ids, vec![RecipeId(1), RecipeId(2)]);
    }

    #[test]
    fn test_recommend_is_idempotent_and_bounded() {
        let recipes: Vec<Recipe> = (1..=40)
            .map(|id| Recipe {
                cooking_method: Some(if id % 3 == 0 { "bake" } else { "boil" }.to_owned()),
                diet_types: if id % 2 == 0 {
                    vec!["vegan".to_owned()]
                } else {
                    Vec::new()
                },
                ..recipe(id)
            })
            .collect();
        let engine = engine(recipes);
        let query = RecommendationQuery {
            cooking_method: Some("bake".to_owned()),
            diet_types: vec!["vegan".to_owned()],
            top_k: 4,
            flexible: true,
            ..RecommendationQuery::default()
        };

        let first = engine.recommend(&query);
        let second = engine.recommend(&query);
        assert_eq!(first, second);
        assert_eq!(
            first.ids,
            vec![RecipeId(6), RecipeId(12), RecipeId(18), RecipeId(24)]
        );
    }
}
