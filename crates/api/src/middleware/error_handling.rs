//! # Error Handling Middleware
//!
//! Maps scheduling errors to HTTP status codes and `{"error": "..."}` JSON
//! bodies so every endpoint reports failures the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError, Json,
};
use serde_json::json;
use timetable_core::errors::ScheduleError;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// Handlers return `Result<_, AppError>`; the `?` operator converts both
/// `ScheduleError` and `eyre::Report` into it.
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ScheduleError::Validation(_) => StatusCode::BAD_REQUEST,
            ScheduleError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ScheduleError::Authorization(_) => StatusCode::FORBIDDEN,
            ScheduleError::NotFound(_) => StatusCode::NOT_FOUND,
            ScheduleError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ScheduleError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Storage failures are logged in full but reported generically.
        let message = match &self.0 {
            ScheduleError::Database(report) => {
                error!("Database failure: {:?}", report);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ScheduleError::Database(err))
    }
}

/// Maps a ScheduleError to an HTTP response
pub fn map_error(err: ScheduleError) -> Response {
    AppError(err).into_response()
}

/// Turns failures of the outer tower layers, such as the request timeout,
/// into JSON responses.
pub async fn handle_layer_error(err: BoxError) -> Response {
    let (status, message) = if err.is::<tower::timeout::error::Elapsed>() {
        (StatusCode::REQUEST_TIMEOUT, "Request timed out".to_string())
    } else {
        error!("Unhandled middleware error: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    };

    (status, Json(json!({ "error": message }))).into_response()
}
