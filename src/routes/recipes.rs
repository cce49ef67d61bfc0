// ABOUTME: Route handler for single-recipe detail lookups
// ABOUTME: Unknown and non-numeric ids both answer 404 with a detail message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::errors::AppResult;
use crate::models::Recipe;
use crate::resources::ServerResources;

/// Recipe detail routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create recipe detail routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/recipe/:id", get(Self::handle_get_recipe))
            .with_state(resources)
    }

    /// `GET /recipe/:id` - full display fields of one recipe
    async fn handle_get_recipe(
        State(resources): State<Arc<ServerResources>>,
        Path(recipe_id): Path<String>,
    ) -> AppResult<Json<Recipe>> {
        let recipe = resources.recommendations.recipe_info_by_path(&recipe_id)?;
        Ok(Json(recipe.clone()))
    }
}
