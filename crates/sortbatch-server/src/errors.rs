//! API errors and their HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use sortbatch_core::SortError;

/// Plain-text body returned for undecodable request bodies.
pub const INVALID_PAYLOAD: &str = "Invalid JSON payload";

/// Error type for the sort endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body is not JSON of the expected shape.
    #[error("Invalid JSON payload")]
    InvalidPayload(#[source] serde_json::Error),

    /// The executor failed to sort the batch.
    #[error("sort failed: {0}")]
    Sort(#[from] SortError),

    /// The blocking task running the executor did not finish. The cause is
    /// logged, never sent to the client.
    #[error("sort worker failed")]
    Worker(#[source] tokio::task::JoinError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::Sort(_) | Self::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
