// ABOUTME: Core data models re-exported from the recipe-core crate
// ABOUTME: Recipe, Corpus, RecommendationQuery and the criteria group types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Re-exports the canonical recipe model, ingestion records, and query types
//! from `recipe-core`.

pub use recipe_core::models::*;
