// ABOUTME: Route handlers for recipe recommendations and the unique-ingredient listing
// ABOUTME: Thin handlers delegating to RecommendationService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

use crate::errors::{AppError, AppResult};
use crate::models::{RecipeId, RecommendationRequest};
use crate::resources::ServerResources;

/// Recommendation routes handler
pub struct RecommendRoutes;

impl RecommendRoutes {
    /// Create recommendation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/recommend", post(Self::handle_recommend))
            .route("/unique_ingredients", get(Self::handle_unique_ingredients))
            .with_state(resources)
    }

    /// `POST /recommend` - ranked recipe ids for a weighted query
    async fn handle_recommend(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<RecommendationRequest>, JsonRejection>,
    ) -> AppResult<Json<Vec<RecipeId>>> {
        let Json(request) =
            payload.map_err(|rejection| AppError::invalid_format(rejection.body_text()))?;
        let ids = resources.recommendations.recommend(&request).await?;
        Ok(Json(ids))
    }

    /// `GET /unique_ingredients` - sorted distinct ingredient names
    async fn handle_unique_ingredients(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<Vec<String>> {
        Json(resources.recommendations.unique_ingredients().to_vec())
    }
}
