// ABOUTME: HTTP server assembly: router composition, middleware layers, and the serve loop
// ABOUTME: Serves until Ctrl+C, then drains in-flight requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, RecipeRoutes, RecommendRoutes};

/// Compose every route with tracing, timeout, and CORS layers
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    let timeout = Duration::from_secs(resources.config.request_timeout_secs);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(RecommendRoutes::routes(Arc::clone(resources)))
        .merge(RecipeRoutes::routes(Arc::clone(resources)))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(setup_cors(&resources.config))
}

/// Bind and serve until shutdown
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let address = resources.config.bind_address();
    let app = build_router(&resources);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("HTTP server listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {e}");
        // Without a signal handler, serve until the process is killed
        future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
