//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use infinity_domain::error::{InfinityError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`InfinityError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(InfinityError);

impl From<InfinityError> for ApiError {
    fn from(err: InfinityError) -> Self {
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
            InfinityError::UnknownCommand(err) => (StatusCode::NOT_FOUND, err.to_string()),
            InfinityError::Validation(err @ ValidationError::UnknownSettingKey(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            InfinityError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            InfinityError::InvalidArguments(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            InfinityError::ElementMissing(err) => (StatusCode::CONFLICT, err.to_string()),
            InfinityError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
