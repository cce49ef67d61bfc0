// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Provides protocol-agnostic services reused by the HTTP routes and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers stay thin and delegate here, so the same validation and
//! orchestration apply regardless of the entry point.

/// Recommendation queries, ingredient listing, and recipe lookups
pub mod recommendation;

pub use recommendation::RecommendationService;
