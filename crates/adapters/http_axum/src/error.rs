//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use geostore_domain::error::{GeoStoreError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`GeoStoreError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(GeoStoreError);

impl From<GeoStoreError> for ApiError {
    fn from(err: GeoStoreError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            GeoStoreError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            GeoStoreError::NotFound(err) => {
                tracing::debug!(entity = err.entity, id = %err.id, "lookup matched no row");
                (StatusCode::NOT_FOUND, err.to_string())
            }
            GeoStoreError::Unavailable(err) => {
                tracing::error!(error = %err, "database unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database connection failed".to_string(),
                )
            }
            GeoStoreError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while processing your request".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
