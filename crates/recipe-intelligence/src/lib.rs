// ABOUTME: Recipe scoring engine: embeddings, feature extractors, aggregation, and ranking
// ABOUTME: Pure, synchronous, and safe to share across threads once built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Intelligence
//!
//! Scores every recipe in a [`recipe_core::models::Corpus`] against a
//! weighted [`recipe_core::models::RecommendationQuery`] and returns the
//! top-k recipe ids.
//!
//! Control flow for one query:
//!
//! 1. [`features::QueryFeatures`] computes one similarity per criteria group
//! 2. [`aggregator::aggregate`] folds them into a weighted mean
//! 3. [`aggregator::qualify`] sorts recipes into strict and partial candidates
//! 4. [`ranker::rank`] orders the winning set and truncates to `top_k`
//!
//! [`engine::RecommendationEngine`] runs steps 1-3 in parallel over the
//! corpus using rayon.

/// Weighted aggregation and candidate qualification
pub mod aggregator;

/// Ingredient embedding table and cosine similarity
pub mod embedding;

/// Corpus-wide recommendation pass
pub mod engine;

/// Per-group feature extractors
pub mod features;

/// Deterministic top-k ranking
pub mod ranker;

pub use embedding::EmbeddingTable;
pub use engine::{Recommendation, RecommendationEngine};
pub use features::{GroupScores, QueryFeatures};
pub use ranker::ScoredRecipe;
