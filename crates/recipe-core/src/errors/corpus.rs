// ABOUTME: Corpus and embedding loading error types
// ABOUTME: Structured startup failures that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Corpus Error Types
//!
//! Loading failures are fatal: the service must never serve traffic from a
//! partially loaded corpus, so every variant aborts startup.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Errors raised while building the corpus or the embedding table
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A record carries no identifier
    #[error("recipe record at position {index} has no id")]
    MissingId {
        /// Zero-based position of the record in the source
        index: usize,
    },

    /// A record identifier could not be parsed as an integer
    #[error("recipe record at position {index} has an invalid id '{value}'")]
    InvalidId {
        /// Zero-based position of the record in the source
        index: usize,
        /// Raw identifier text
        value: String,
    },

    /// Two records share an identifier
    #[error("duplicate recipe id {id}")]
    DuplicateId {
        /// The repeated identifier
        id: u64,
    },

    /// Source file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Source file is not valid JSON of the expected shape
    #[error("failed to parse {what}: {source}")]
    Parse {
        /// Which source failed ("recipe corpus", "embedding table")
        what: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Embedding vectors disagree on dimension
    #[error("embedding for '{ingredient}' has dimension {found}, expected {expected}")]
    EmbeddingDimension {
        /// Ingredient whose vector is inconsistent
        ingredient: String,
        /// Dimension established by the first vector
        expected: usize,
        /// Dimension of the offending vector
        found: usize,
    },

    /// Embedding vector contains NaN or infinity
    #[error("embedding for '{ingredient}' contains non-finite values")]
    NonFiniteEmbedding {
        /// Ingredient whose vector is invalid
        ingredient: String,
    },
}

impl CorpusError {
    /// Wrap an I/O failure with the path that caused it
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<CorpusError> for AppError {
    fn from(error: CorpusError) -> Self {
        let message = error.to_string();
        Self::new(ErrorCode::ConfigInvalid, message).with_source(error)
    }
}
