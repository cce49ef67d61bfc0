// ABOUTME: Core data models and types for the recipe recommendation service
// ABOUTME: Re-exports Recipe, Corpus, RecommendationQuery and other fundamental data structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Data structures shared by the scoring engine and the HTTP service.
//!
//! ## Design Principles
//!
//! - **Normalize once**: raw dataset shapes are resolved at ingestion and
//!   never leak past [`RecipeRecord`]
//! - **Immutable corpus**: the [`Corpus`] is built at startup and only read
//!   afterwards, so it can be shared across request handlers freely
//! - **Typed criteria**: each weighted criteria group is a [`CriteriaGroup`]
//!   variant, not a free-form string
//!
//! ## Core Models
//!
//! - `Recipe`: Display fields of a single recipe
//! - `RecipeProfile`: Normalized match keys used by scoring
//! - `Corpus`: Recipes, profiles, id index and unique-ingredient index
//! - `RecommendationQuery`: Validated query with weights and `top_k`

// Domain modules
mod corpus;
mod health;
mod query;
mod recipe;
mod record;

/// Text normalization shared with the embedding table
pub mod text;

// Recipe domain
pub use recipe::{Recipe, RecipeId, RecipeProfile};

// Ingestion
pub use record::{RawList, RawNumber, RawRecipeId, RawText, RecipeRecord};

// Health domain
pub use health::{normalize_level, HealthTarget, Nutrient};

// Query domain
pub use query::{
    CriteriaGroup, CriteriaWeights, QueryLimits, RecommendationQuery, RecommendationRequest,
};

// Corpus
pub use corpus::Corpus;
