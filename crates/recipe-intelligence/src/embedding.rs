// ABOUTME: Read-only ingredient embedding table with normalized-name lookup
// ABOUTME: Vectors are L2-normalized at load so cosine similarity reduces to a dot product
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use recipe_core::errors::CorpusError;
use recipe_core::models::text::normalize_key;
use tracing::warn;

/// Mapping from normalized ingredient name to a unit-length vector
#[derive(Debug, Clone, Default)]
pub struct EmbeddingTable {
    dimension: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl EmbeddingTable {
    /// An empty table; ingredient similarity then falls back to name equality
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from raw `name -> vector` entries
    ///
    /// Entries are applied in iteration order, so a later duplicate key
    /// overwrites an earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::EmbeddingDimension`] when vectors disagree on
    /// length, and [`CorpusError::NonFiniteEmbedding`] for NaN or infinite
    /// components.
    pub fn from_entries<I>(entries: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = (String, Vec<f32>)>,
    {
        let mut table = Self::default();
        for (name, vector) in entries {
            let key = normalize_key(&name);
            if key.is_empty() {
                continue;
            }
            if vector.iter().any(|v| !v.is_finite()) {
                return Err(CorpusError::NonFiniteEmbedding { ingredient: name });
            }
            if table.vectors.is_empty() {
                table.dimension = vector.len();
            } else if vector.len() != table.dimension {
                return Err(CorpusError::EmbeddingDimension {
                    ingredient: name,
                    expected: table.dimension,
                    found: vector.len(),
                });
            }
            if table.vectors.insert(key, unit_vector(vector)).is_some() {
                warn!(ingredient = %name, "Duplicate embedding key, keeping the later vector");
            }
        }
        Ok(table)
    }

    /// Vector for an ingredient name; lookup is case and whitespace insensitive
    #[must_use]
    pub fn vector_for(&self, ingredient: &str) -> Option<&[f32]> {
        self.vectors
            .get(&normalize_key(ingredient))
            .map(Vec::as_slice)
    }

    /// Vector for an already-normalized key
    #[must_use]
    pub fn vector_for_key(&self, key: &str) -> Option<&[f32]> {
        self.vectors.get(key).map(Vec::as_slice)
    }

    /// Shared vector length, 0 when empty
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of embedded ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// True when no embeddings are loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

fn unit_vector(mut vector: Vec<f32>) -> Vec<f32> {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in &mut vector {
            *value /= norm;
        }
    }
    vector
}

/// Cosine similarity of two unit vectors, clamped to `[0, 1]`
///
/// Opposed directions carry no evidence of a match, so negatives clamp to 0.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    f64::from(dot).clamp(0.0, 1.0)
}
