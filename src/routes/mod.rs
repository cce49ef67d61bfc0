// ABOUTME: Route module organization for the recommendation HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the recipe recommender
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Service banner, health, and readiness routes
pub mod health;
/// Recipe detail routes
pub mod recipes;
/// Recommendation and ingredient listing routes
pub mod recommend;

/// Health route handlers
pub use health::HealthRoutes;
/// Recipe detail route handlers
pub use recipes::RecipeRoutes;
/// Recommendation route handlers
pub use recommend::RecommendRoutes;
