use crate::models::{ApiResponse, NotFoundBody};
use crate::scoring::ScoringError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

/// Message sent to clients when the request body cannot be decoded.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
/// Message sent to clients when the scorer fails.
pub const SCORING_FAILED_MESSAGE: &str = "Error scoring lead";
/// Message sent for unmatched routes.
pub const NOT_FOUND_MESSAGE: &str = "Endpoint not found";

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// The request body was rejected before reaching a handler.
    InvalidBody {
        /// Status chosen by the body-parsing stage (400, 413 or 422).
        status: StatusCode,
        /// Human-readable reason.
        detail: String,
    },
    /// The lead scorer returned an error.
    Scoring(ScoringError),
    /// No route matches the request.
    NotFound,
    /// Internal server error.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidBody { status, detail } => {
                write!(f, "Invalid body ({}): {}", status.as_u16(), detail)
            }
            AppError::Scoring(e) => write!(f, "Scoring error: {}", e),
            AppError::NotFound => write!(f, "Not found"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Maps each error variant to an HTTP status code and JSON body.
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidBody { status, detail } => {
                tracing::warn!("Rejected request body ({}): {}", status, detail);
                (status, Json(ApiResponse::failure(INVALID_BODY_MESSAGE, detail))).into_response()
            }
            AppError::Scoring(e) => {
                tracing::error!("Scoring error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::failure(SCORING_FAILED_MESSAGE, e.to_string())),
                )
                    .into_response()
            }
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(NotFoundBody {
                    message: NOT_FOUND_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::failure("Internal server error", msg)),
                )
                    .into_response()
            }
        }
    }
}

impl From<ScoringError> for AppError {
    fn from(err: ScoringError) -> Self {
        AppError::Scoring(err)
    }
}
