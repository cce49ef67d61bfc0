// ABOUTME: Main library entry point for the recipe recommendation service
// ABOUTME: Wires configuration, corpus loading, the scoring engine, and the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Recommender
//!
//! Ranks recipes against a weighted, partially specified query combining
//! categorical matches, attribute coverage, nutrition levels, and
//! embedding-based ingredient similarity.
//!
//! ## Architecture
//!
//! - **recipe-core**: errors, the recipe data model, queries, and the corpus
//! - **recipe-intelligence**: feature extractors, aggregation, ranking
//! - **this crate**: configuration, logging, file loading, the query
//!   service, and the axum HTTP surface
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_recommender::config::ServerConfig;
//! use recipe_recommender::corpus;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let engine = corpus::load_engine(&config.corpus)?;
//!     println!("Loaded {} recipes", engine.corpus().len());
//!     Ok(())
//! }
//! ```

/// Configuration management from the environment
pub mod config;

/// Constants and defaults
pub mod constants;

/// Corpus and embedding file loading
pub mod corpus;

/// Unified error handling
pub mod errors;

/// Scoring engine re-exports
pub mod intelligence;

/// Logging configuration and structured log helpers
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Data model re-exports
pub mod models;

/// Shared state for route handlers
pub mod resources;

/// HTTP routes
pub mod routes;

/// Router assembly and the serve loop
pub mod server;

/// Domain services used by the routes
pub mod services;
