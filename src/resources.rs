// ABOUTME: Centralized resource container shared by all HTTP route handlers
// ABOUTME: Holds the configuration and the recommendation service behind Arcs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources Module
//!
//! Built once at startup and handed to every router as axum state.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::intelligence::RecommendationEngine;
use crate::services::RecommendationService;

/// Centralized resource container for dependency injection
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Recommendation and lookup service
    pub recommendations: RecommendationService,
}

impl ServerResources {
    /// Create server resources around a loaded engine
    #[must_use]
    pub fn new(config: ServerConfig, engine: RecommendationEngine) -> Self {
        let recommendations =
            RecommendationService::new(Arc::new(engine), config.query_limits());
        Self {
            config: Arc::new(config),
            recommendations,
        }
    }
}
