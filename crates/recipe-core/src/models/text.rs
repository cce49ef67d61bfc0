// ABOUTME: Text normalization helpers shared by ingestion, queries, and embeddings
// ABOUTME: Case folding, whitespace collapsing, placeholder detection, delimiter splitting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::ingestion::PLACEHOLDER_VALUES;

/// Normalize a label or ingredient name into its comparison key
///
/// Trims, lowercases, and collapses internal runs of whitespace to a single
/// space, so `"  Brown   Sugar "` and `"brown sugar"` share a key.
#[must_use]
pub fn normalize_key(value: &str) -> String {
    value
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when a value is empty or one of the dataset's "no value" markers
#[must_use]
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || PLACEHOLDER_VALUES
            .iter()
            .any(|placeholder| trimmed.eq_ignore_ascii_case(placeholder))
}

/// Trim a single-valued label, mapping placeholders to `None`
#[must_use]
pub fn clean_label(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !is_placeholder(v))
        .map(|v| v.trim().to_owned())
}

/// Split a delimiter-joined string into trimmed, non-placeholder parts
#[must_use]
pub fn split_delimited(value: &str, delimiter: char) -> Vec<String> {
    value
        .split(delimiter)
        .filter(|part| !is_placeholder(part))
        .map(|part| part.trim().to_owned())
        .collect()
}
