// ABOUTME: Server binary loading the recipe corpus and serving the recommendation API
// ABOUTME: Reads configuration from the environment with CLI overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Recommender Server Binary
//!
//! Loads the corpus and embedding table once, sizes the scoring thread pool,
//! and serves the HTTP API until interrupted.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use recipe_recommender::{
    config::ServerConfig, corpus, logging, resources::ServerResources, server,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipe-recommender-server")]
#[command(about = "Recipe recommendation API - weighted recipe scoring and ranking")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override the recipe corpus file
    #[arg(long)]
    recipes: Option<PathBuf>,

    /// Override the ingredient embedding file
    #[arg(long)]
    embeddings: Option<PathBuf>,

    /// Override the scoring thread-pool size
    #[arg(long)]
    workers: Option<usize>,
}

fn apply_overrides(config: &mut ServerConfig, args: Args) {
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(recipes) = args.recipes {
        config.corpus.recipes_path = recipes;
    }
    if let Some(embeddings) = args.embeddings {
        config.corpus.embeddings_path = Some(embeddings);
    }
    if let Some(workers) = args.workers {
        config.worker_count = Some(workers);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    apply_overrides(&mut config, args);
    config.validate()?;

    logging::init_from_env()?;
    info!("{}", config.summary());

    if let Some(workers) = config.worker_count {
        rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("recipe-scoring-{i}"))
            .build_global()
            .context("Failed to configure scoring thread pool")?;
        info!("Scoring thread pool sized to {workers} workers");
    }

    let engine = match corpus::load_engine(&config.corpus) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Failed to load recipe corpus: {e}");
            return Err(e).context("Corpus load failed; refusing to serve");
        }
    };

    let resources = Arc::new(ServerResources::new(config, engine));
    server::run(resources).await
}
