// ABOUTME: Startup loading of the recipe corpus and ingredient embeddings from JSON files
// ABOUTME: Builds the immutable RecommendationEngine; any failure here is fatal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Corpus Loading
//!
//! The corpus source is a JSON array of recipe records; the embedding source
//! is a JSON object mapping ingredient name to a numeric array. Both are read
//! once at startup. A partially loaded corpus is never served.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::config::CorpusConfig;
use crate::errors::CorpusError;
use crate::intelligence::{EmbeddingTable, RecommendationEngine};
use crate::logging::AppLogger;
use crate::models::{Corpus, RecipeRecord};

/// Parse a corpus from JSON bytes
///
/// # Errors
///
/// Returns [`CorpusError::Parse`] for malformed JSON, or the first record or
/// duplicate-id error raised while building the corpus.
pub fn parse_corpus(bytes: &[u8]) -> Result<Corpus, CorpusError> {
    let records: Vec<RecipeRecord> =
        serde_json::from_slice(bytes).map_err(|source| CorpusError::Parse {
            what: "recipe corpus",
            source,
        })?;
    Corpus::from_records(records)
}

/// Read and parse the corpus file
///
/// # Errors
///
/// Returns [`CorpusError::Io`] when the file cannot be read, otherwise see
/// [`parse_corpus`].
pub fn load_corpus(path: &Path) -> Result<Corpus, CorpusError> {
    let bytes = fs::read(path).map_err(|e| CorpusError::io(path, e))?;
    parse_corpus(&bytes)
}

/// Embedding file entries in the order they appear in the source
struct EmbeddingEntries(Vec<(String, Vec<f32>)>);

impl<'de> Deserialize<'de> for EmbeddingEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = EmbeddingEntries;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of ingredient name to numeric vector")
            }

            fn visit_map<V>(self, mut map: V) -> Result<EmbeddingEntries, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Vec<f32>>()? {
                    entries.push(entry);
                }
                Ok(EmbeddingEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Parse an embedding table from JSON bytes
///
/// Entries are applied in file order, so when two keys normalize to the same
/// ingredient the one written later wins.
///
/// # Errors
///
/// Returns [`CorpusError::Parse`] for malformed JSON and the table's own
/// dimension and finiteness errors.
pub fn parse_embeddings(bytes: &[u8]) -> Result<EmbeddingTable, CorpusError> {
    let EmbeddingEntries(entries) =
        serde_json::from_slice(bytes).map_err(|source| CorpusError::Parse {
            what: "embedding table",
            source,
        })?;
    EmbeddingTable::from_entries(entries)
}

/// Read and parse the embedding file
///
/// # Errors
///
/// Returns [`CorpusError::Io`] when the file cannot be read, otherwise see
/// [`parse_embeddings`].
pub fn load_embeddings(path: &Path) -> Result<EmbeddingTable, CorpusError> {
    let bytes = fs::read(path).map_err(|e| CorpusError::io(path, e))?;
    parse_embeddings(&bytes)
}

/// Fraction of the corpus' unique ingredients that have an embedding
#[must_use]
pub fn embedding_coverage(corpus: &Corpus, embeddings: &EmbeddingTable) -> f64 {
    let unique = corpus.unique_ingredients();
    if unique.is_empty() {
        return 0.0;
    }
    let covered = unique
        .iter()
        .filter(|name| embeddings.vector_for_key(name).is_some())
        .count();
    covered as f64 / unique.len() as f64
}

/// Load both sources and build the engine
///
/// # Errors
///
/// Returns the first [`CorpusError`] from either source.
pub fn load_engine(config: &CorpusConfig) -> Result<RecommendationEngine, CorpusError> {
    let corpus = load_corpus(&config.recipes_path)?;
    AppLogger::log_corpus_loaded(
        &config.recipes_path.display().to_string(),
        corpus.len(),
        corpus.unique_ingredients().len(),
    );

    let embeddings = match &config.embeddings_path {
        Some(path) => {
            let table = load_embeddings(path)?;
            AppLogger::log_embeddings_loaded(
                &path.display().to_string(),
                table.len(),
                table.dimension(),
                embedding_coverage(&corpus, &table),
            );
            table
        }
        None => {
            warn!("No embedding table configured; ingredient matching uses exact names only");
            EmbeddingTable::empty()
        }
    };

    Ok(RecommendationEngine::new(corpus, embeddings))
}
