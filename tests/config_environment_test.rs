// ABOUTME: Unit tests for environment-driven server configuration
// ABOUTME: Validates defaults, variable aliases, overrides, and rejection of bad values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use recipe_recommender::config::environment::{Environment, ServerConfig};
use serial_test::serial;

const CONFIG_VARS: [&str; 12] = [
    "HOST",
    "HTTP_PORT",
    "ENVIRONMENT",
    "RECIPES_PATH",
    "RECIPES_DF",
    "EMBEDDINGS_PATH",
    "DEFAULT_TOP_K",
    "MAX_TOP_K",
    "WORKER_COUNT",
    "REQUEST_TIMEOUT_SECS",
    "CORS_ALLOWED_ORIGINS",
    "LOG_LEVEL",
];

fn clear_config_env() {
    for key in CONFIG_VARS {
        env::remove_var(key);
    }
}

// ============================================================================
// Environment parsing
// ============================================================================

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("testing"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("dev"),
        Environment::Development
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    ); // Default fallback
    assert!(Environment::Production.is_production());
    assert!(!Environment::Testing.is_production());
}

// ============================================================================
// ServerConfig::from_env
// ============================================================================

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_config_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.http_port, 8000);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.corpus.recipes_path, PathBuf::from("./recipes.json"));
    assert!(config.corpus.embeddings_path.is_none());
    assert_eq!(config.query.default_top_k, 5);
    assert_eq!(config.query.max_top_k, 100);
    assert!(config.worker_count.is_none());
    assert_eq!(config.cors.allowed_origins, "*");
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_config_env();
    env::set_var("HOST", "127.0.0.1");
    env::set_var("HTTP_PORT", "9100");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("RECIPES_PATH", "/data/recipes.json");
    env::set_var("EMBEDDINGS_PATH", "/data/embeddings.json");
    env::set_var("DEFAULT_TOP_K", "10");
    env::set_var("MAX_TOP_K", "50");
    env::set_var("WORKER_COUNT", "4");

    let config = ServerConfig::from_env().unwrap();
    clear_config_env();

    assert_eq!(config.bind_address(), "127.0.0.1:9100");
    assert!(config.environment.is_production());
    assert_eq!(
        config.corpus.recipes_path,
        PathBuf::from("/data/recipes.json")
    );
    assert_eq!(
        config.corpus.embeddings_path,
        Some(PathBuf::from("/data/embeddings.json"))
    );
    let limits = config.query_limits();
    assert_eq!(limits.default_top_k, 10);
    assert_eq!(limits.max_top_k, 50);
    assert_eq!(config.worker_count, Some(4));
}

#[test]
#[serial]
fn test_recipes_df_alias() {
    clear_config_env();
    env::set_var("RECIPES_DF", "/legacy/recipes.json");

    let config = ServerConfig::from_env().unwrap();
    clear_config_env();

    assert_eq!(
        config.corpus.recipes_path,
        PathBuf::from("/legacy/recipes.json")
    );
}

#[test]
#[serial]
fn test_recipes_path_wins_over_alias() {
    clear_config_env();
    env::set_var("RECIPES_PATH", "/primary.json");
    env::set_var("RECIPES_DF", "/legacy.json");

    let config = ServerConfig::from_env().unwrap();
    clear_config_env();

    assert_eq!(config.corpus.recipes_path, PathBuf::from("/primary.json"));
}

#[test]
#[serial]
fn test_invalid_http_port_is_rejected() {
    clear_config_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let result = ServerConfig::from_env();
    clear_config_env();

    let message = result.unwrap_err().to_string();
    assert!(message.contains("HTTP_PORT"));
}

#[test]
#[serial]
fn test_zero_worker_count_is_rejected() {
    clear_config_env();
    env::set_var("WORKER_COUNT", "0");

    let result = ServerConfig::from_env();
    clear_config_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_default_top_k_above_max_is_rejected() {
    clear_config_env();
    env::set_var("DEFAULT_TOP_K", "20");
    env::set_var("MAX_TOP_K", "10");

    let result = ServerConfig::from_env();
    clear_config_env();

    assert!(result.is_err());
}

// ============================================================================
// Validation and summary
// ============================================================================

#[test]
fn test_validate_rejects_zero_timeout() {
    let config = ServerConfig {
        request_timeout_secs: 0,
        ..ServerConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_summary_mentions_sources() {
    let mut config = ServerConfig::default();
    config.corpus.embeddings_path = Some(PathBuf::from("vectors.json"));

    let summary = config.summary();

    assert!(summary.contains("recipes=./recipes.json"));
    assert!(summary.contains("embeddings=vectors.json"));
    assert!(summary.contains("workers=auto"));
}
