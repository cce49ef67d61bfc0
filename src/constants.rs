// ABOUTME: System-wide constants and default values for the recommendation service
// ABOUTME: Re-exports recipe-core constants so existing import paths stay stable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Query limits, ingestion markers, service names, and server defaults.

pub use recipe_core::constants::*;
