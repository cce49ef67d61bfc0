// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, query};
use crate::models::QueryLimits;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Corpus and embedding sources
    pub corpus: CorpusConfig,
    /// Query defaults and bounds
    pub query: QueryConfig,
    /// Scoring thread-pool size; `None` uses the rayon default
    pub worker_count: Option<usize>,
    /// Serving-layer request timeout
    pub request_timeout_secs: u64,
    /// CORS settings
    pub cors: CorsConfig,
}

/// Where the corpus and the embedding table are read from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Recipe corpus JSON file
    pub recipes_path: PathBuf,
    /// Optional ingredient embedding JSON file
    pub embeddings_path: Option<PathBuf>,
}

/// Query defaults and bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QueryConfig {
    /// `top_k` used when a request omits it
    pub default_top_k: usize,
    /// Upper clamp for `top_k`
    pub max_top_k: usize,
}

/// CORS settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*`
    pub allowed_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            environment: Environment::Development,
            corpus: CorpusConfig {
                recipes_path: PathBuf::from(defaults::RECIPES_PATH),
                embeddings_path: None,
            },
            query: QueryConfig {
                default_top_k: query::DEFAULT_TOP_K,
                max_top_k: query::MAX_TOP_K,
            },
            worker_count: None,
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            cors: CorsConfig {
                allowed_origins: "*".to_owned(),
            },
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but unparsable, or if the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let recipes_path = env::var("RECIPES_PATH")
            .or_else(|_| env::var("RECIPES_DF"))
            .unwrap_or_else(|_| defaults::RECIPES_PATH.to_owned());

        let config = Self {
            host: env_var_or("HOST", defaults::HOST),
            http_port: env_parse("HTTP_PORT", defaults::HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development")),
            corpus: CorpusConfig {
                recipes_path: PathBuf::from(recipes_path),
                embeddings_path: env_optional("EMBEDDINGS_PATH").map(PathBuf::from),
            },
            query: QueryConfig {
                default_top_k: env_parse("DEFAULT_TOP_K", query::DEFAULT_TOP_K)?,
                max_top_k: env_parse("MAX_TOP_K", query::MAX_TOP_K)?,
            },
            worker_count: env_optional("WORKER_COUNT")
                .map(|raw| raw.parse::<usize>())
                .transpose()
                .context("Invalid WORKER_COUNT value")?,
            request_timeout_secs: env_parse(
                "REQUEST_TIMEOUT_SECS",
                defaults::REQUEST_TIMEOUT_SECS,
            )?,
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<()> {
        if self.query.max_top_k == 0 {
            bail!("MAX_TOP_K must be at least 1");
        }
        if self.query.default_top_k == 0 || self.query.default_top_k > self.query.max_top_k {
            bail!(
                "DEFAULT_TOP_K must be between 1 and MAX_TOP_K ({})",
                self.query.max_top_k
            );
        }
        if self.worker_count == Some(0) {
            bail!("WORKER_COUNT must be at least 1 when set");
        }
        if self.request_timeout_secs == 0 {
            bail!("REQUEST_TIMEOUT_SECS must be at least 1");
        }
        Ok(())
    }

    /// Query bounds handed to request normalization
    #[must_use]
    pub const fn query_limits(&self) -> QueryLimits {
        QueryLimits {
            default_top_k: self.query.default_top_k,
            max_top_k: self.query.max_top_k,
        }
    }

    /// `host:port` to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Recommender Configuration: env={} bind={} recipes={} embeddings={} top_k={}/{} workers={} timeout={}s cors={}",
            self.environment,
            self.bind_address(),
            self.corpus.recipes_path.display(),
            self.corpus
                .embeddings_path
                .as_ref()
                .map_or_else(|| "none".to_owned(), |p| p.display().to_string()),
            self.query.default_top_k,
            self.query.max_top_k,
            self.worker_count
                .map_or_else(|| "auto".to_owned(), |n| n.to_string()),
            self.request_timeout_secs,
            self.cors.allowed_origins,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Non-empty environment variable, if set
fn env_optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Parse an environment variable, falling back to `default` when unset
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    env_optional(key).map_or(Ok(default), |raw| {
        raw.parse::<T>()
            .with_context(|| format!("Invalid {key} value: {raw}"))
    })
}
