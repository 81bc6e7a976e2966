use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use profiledesk_core::AppError;
use tracing::error;

use crate::dto::ErrorResponse;

/// HTTP error wrapper around core application errors.
#[derive(Debug)]
pub struct ConsoleError(pub AppError);

impl From<AppError> for ConsoleError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ConsoleError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self.0, "console request failed");
        }

        let payload = Json(ErrorResponse {
            message: self.0.to_string(),
        });

        (status, payload).into_response()
    }
}

/// Standard console result type.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
