// ABOUTME: Core types and constants for the recipe recommendation service
// ABOUTME: Foundation crate with error handling, the recipe data model, and the corpus store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types for the recipe recommendation
//! service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `CorpusError`
//! - **constants**: Defaults and limits shared by the service and the engine
//! - **models**: Recipes, queries, criteria groups, and the immutable `Corpus`

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, Corpus, `RecommendationQuery`, ...)
pub mod models;
