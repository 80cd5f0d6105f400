//! API error type for the HTTP layer
//!
//! [`ApiError`] unifies handler failure modes into a single enum that
//! can be converted into an HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::engine::SimulationError;
use crate::store::StoreError;

/// Errors that can occur in the API layer
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource was not found
    #[error("not found: {0}")]
    NotFound(String),

    /// A required query parameter was missing or invalid
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The engine rejected the run
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// A data file could not be read or written
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            // A zero speed can only mean entrant state was built
            // outside the seeding path.
            Self::Simulation(SimulationError::InvalidSpeed { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Simulation(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
