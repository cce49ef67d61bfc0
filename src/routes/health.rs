// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides the service banner, liveness, and readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! This module provides the root banner plus health and readiness endpoints
//! for monitoring and load balancer health checks.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use crate::constants::service_names;
use crate::resources::ServerResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_root))
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_root() -> Json<Value> {
        Json(json!({
            "message": "Recipe recommendation API is running",
            "service": service_names::RECIPE_RECOMMENDER,
            "version": env!("CARGO_PKG_VERSION"),
        }))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    /// Ready once a corpus is loaded; an empty corpus still serves but reports it
    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        let corpus = resources.recommendations.engine().corpus();
        let embeddings = resources.recommendations.engine().embeddings();
        Json(json!({
            "status": "ready",
            "recipes": corpus.len(),
            "unique_ingredients": corpus.unique_ingredients().len(),
            "embeddings": embeddings.len(),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
