// ABOUTME: Intelligence module re-exports from recipe-intelligence crate
// ABOUTME: Scoring engine, feature extractors, embeddings, and ranking under one path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Recipe scoring and ranking. This module re-exports the
//! `recipe-intelligence` crate.

// Re-export all public items from recipe-intelligence
pub use recipe_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::ranker::rank)
pub use recipe_intelligence::{aggregator, embedding, engine, features, ranker};
