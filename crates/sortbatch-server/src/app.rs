//! Router construction and server entry point.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use sortbatch_core::observers::LoggingObserver;
use sortbatch_core::{ExecutionMode, Executor, ExecutorRegistry};

use crate::config::ServerConfig;
use crate::handlers::{process_concurrent, process_single};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<ExecutorRegistry>,
}

impl AppState {
    /// Create a new state around the given registry.
    #[must_use]
    pub fn new(registry: ExecutorRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Get the executor for `mode`.
    #[must_use]
    pub fn executor(&self, mode: ExecutionMode) -> Arc<dyn Executor> {
        self.registry.get(mode)
    }
}

/// Build the router with both sort endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/process-single", post(process_single))
        .route("/process-concurrent", post(process_concurrent))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server until Ctrl+C.
pub async fn run(config: &ServerConfig) -> Result<()> {
    let registry = ExecutorRegistry::new(config.executor_options(), Arc::new(LoggingObserver::new()))
        .context("failed to build executors")?;
    let opts = registry.options();
    info!(
        algorithm = registry.algorithm_name(),
        workers = opts.max_workers,
        simulated_work = ?opts.simulated_work,
        result_order = %opts.result_order,
        "Executors ready"
    );

    let router = build_router(AppState::new(registry));
    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Server listening on port {}...", config.port);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
