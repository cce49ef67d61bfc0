// ABOUTME: Unified error handling re-exported from the recipe-core crate
// ABOUTME: AppError, ErrorCode, CorpusError, and the HTTP error body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Error types live in `recipe-core` so the scoring engine and the HTTP
//! layer share one taxonomy. `AppError` implements axum's `IntoResponse`
//! (enabled through the `http-response` feature), rendering
//! `{"detail": ..., "code": ...}` with the status from `ErrorCode`.

pub use recipe_core::errors::*;
