//! Handlers for the two sort endpoints.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::{debug, error, warn};

use sortbatch_core::{execute_timed, ExecutionMode};

use crate::app::AppState;
use crate::errors::ApiError;
use crate::payload::{decode_request, SortResponse};

/// `POST /process-single`: sort each sub-array in order.
pub async fn process_single(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SortResponse>, ApiError> {
    process(&state, ExecutionMode::Sequential, &body).await
}

/// `POST /process-concurrent`: sort each sub-array on the worker pool.
pub async fn process_concurrent(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SortResponse>, ApiError> {
    process(&state, ExecutionMode::Concurrent, &body).await
}

async fn process(
    state: &AppState,
    mode: ExecutionMode,
    body: &[u8],
) -> Result<Json<SortResponse>, ApiError> {
    let request = decode_request(body).map_err(|e| {
        warn!(mode = %mode, error = %e, "Rejected request payload");
        ApiError::InvalidPayload(e)
    })?;

    debug!(mode = %mode, tasks = request.to_sort.len(), "Sorting batch");

    // Executors block on simulated work; keep them off the async workers.
    let executor = state.executor(mode);
    let result =
        tokio::task::spawn_blocking(move || execute_timed(executor.as_ref(), request.to_sort))
            .await
            .map_err(|e| {
                error!(mode = %mode, error = %e, "Sort worker failed");
                ApiError::Worker(e)
            })??;

    Ok(Json(SortResponse::from(result)))
}
