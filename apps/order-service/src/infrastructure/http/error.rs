//! HTTP error mapping for the REST adapter.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::response::ErrorResponse;
use crate::domain::shared::DomainError;

/// Adapter-level error wrapping domain failures for HTTP transport.
///
/// Validation failures map to 400, missing aggregates to 404, and store
/// failures to 500. The response body always carries a stable error code
/// alongside the human-readable message.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] DomainError);

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self.0 {
            DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Infrastructure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn code(&self) -> &'static str {
        match self.0 {
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Infrastructure { .. } => "INFRASTRUCTURE_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        let body = ErrorResponse {
            error: self.code().to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
