use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::ErrorResponse;
use crate::AppError;

/// Converts `AppError` into HTTP responses at the request boundary.
///
/// Nothing propagates as process-fatal; storage failures are logged for
/// operators and shown generically to the end user.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let AppError::Storage(msg) = &self.0 {
            log::error!(target: "cookmark::http", "msg=\"storage failure\" error=\"{msg}\"");
        }

        let status = match &self.0 {
            AppError::DuplicateUsername => StatusCode::CONFLICT,
            AppError::InvalidCredentials | AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::CatalogUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::PasswordHashError | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::from(self.0))).into_response()
    }
}
