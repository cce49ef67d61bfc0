// ABOUTME: HTTP middleware for the recommendation API
// ABOUTME: CORS configuration applied to every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer built from server configuration
pub mod cors;

pub use cors::setup_cors;
