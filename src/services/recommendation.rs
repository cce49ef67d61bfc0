// ABOUTME: Recommendation query service validating requests and orchestrating the scoring engine
// ABOUTME: Also serves the unique-ingredient listing and single-recipe lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use tokio::task;
use tracing::{debug, error};

use crate::errors::{AppError, AppResult};
use crate::intelligence::RecommendationEngine;
use crate::logging::AppLogger;
use crate::models::{QueryLimits, Recipe, RecipeId, RecommendationQuery, RecommendationRequest};

/// Protocol-agnostic entry point for recommendation and lookup operations
#[derive(Debug, Clone)]
pub struct RecommendationService {
    engine: Arc<RecommendationEngine>,
    limits: QueryLimits,
}

impl RecommendationService {
    /// Create a service over a loaded engine
    #[must_use]
    pub const fn new(engine: Arc<RecommendationEngine>, limits: QueryLimits) -> Self {
        Self { engine, limits }
    }

    /// The shared engine
    #[must_use]
    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    /// Validate a request and return ranked recipe ids
    ///
    /// Scoring runs on the blocking pool so the async runtime keeps serving
    /// while rayon fans out over the corpus.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a request with no criteria,
    /// `ValueOutOfRange` for a bad weight, and `InternalError` if the scoring
    /// task dies.
    pub async fn recommend(&self, request: &RecommendationRequest) -> AppResult<Vec<RecipeId>> {
        let query = RecommendationQuery::from_request(request, self.limits)?;
        debug!(
            cooking_method = ?query.cooking_method,
            cuisine_region = ?query.cuisine_region,
            diet_types = query.diet_types.len(),
            meal_types = query.meal_type.len(),
            health_types = query.health_types.len(),
            ingredients = query.ingredients.len(),
            top_k = query.top_k,
            flexible = query.flexible,
            "Recommendation query normalized"
        );

        let started = Instant::now();
        let engine = Arc::clone(&self.engine);
        let active_groups = query.active_groups().len();
        let outcome = task::spawn_blocking(move || engine.recommend(&query))
            .await
            .map_err(|e| {
                error!(error = %e, "Scoring task failed");
                AppError::internal("Recommendation scoring failed").with_source(e)
            })?;

        AppLogger::log_recommendation(
            active_groups,
            outcome.strict_candidates,
            outcome.partial_candidates,
            outcome.relaxed,
            outcome.ids.len(),
            started.elapsed(),
        );
        Ok(outcome.ids)
    }

    /// Sorted, de-duplicated ingredient names across the corpus
    #[must_use]
    pub fn unique_ingredients(&self) -> &[String] {
        self.engine.corpus().unique_ingredients()
    }

    /// Full display record for one recipe
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the id is unknown.
    pub fn recipe_info(&self, id: RecipeId) -> AppResult<&Recipe> {
        self.engine.corpus().get(id)
    }

    /// Look up a recipe by its path segment; non-numeric ids are not found
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for non-numeric or unknown ids.
    pub fn recipe_info_by_path(&self, raw_id: &str) -> AppResult<&Recipe> {
        let id = raw_id
            .trim()
            .parse::<u64>()
            .map_err(|_| AppError::not_found("Recipe"))?;
        self.recipe_info(RecipeId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::intelligence::EmbeddingTable;
    use crate::models::Corpus;

    fn service() -> RecommendationService {
        let corpus = Corpus::from_recipes(vec![
            Recipe {
                id: RecipeId(1),
                name: "Baked Oats".to_owned(),
                cooking_method: Some("bake".to_owned()),
                ingredients: vec!["oats".to_owned()],
                ..Recipe::default()
            },
            Recipe {
                id: RecipeId(2),
                name: "Grilled Tofu".to_owned(),
                cooking_method: Some("grill".to_owned()),
                ingredients: vec!["tofu".to_owned(), "Oats".to_owned()],
                ..Recipe::default()
            },
        ])
        .unwrap();
        RecommendationService::new(
            Arc::new(RecommendationEngine::new(corpus, EmbeddingTable::empty())),
            QueryLimits::default(),
        )
    }

    #[tokio::test]
    async fn test_recommend_rejects_empty_request() {
        let error = service()
            .recommend(&RecommendationRequest::default())
            .await
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    #[tokio::test]
    async fn test_recommend_returns_ranked_ids() {
        let request = RecommendationRequest {
            cooking_method: Some("Grill".to_owned()),
            ..RecommendationRequest::default()
        };
        let ids = service().recommend(&request).await.unwrap();
        assert_eq!(ids, vec![RecipeId(2)]);
    }

    #[test]
    fn test_recipe_lookup_by_path() {
        let service = service();
        assert_eq!(service.recipe_info_by_path("1").unwrap().name, "Baked Oats");
        assert_eq!(
            service.recipe_info_by_path("abc").unwrap_err().code,
            ErrorCode::ResourceNotFound
        );
        assert_eq!(
            service.recipe_info_by_path("77").unwrap_err().code,
            ErrorCode::ResourceNotFound
        );
    }

    #[test]
    fn test_unique_ingredients() {
        assert_eq!(service().unique_ingredients(), &["oats", "tofu"]);
    }
}
