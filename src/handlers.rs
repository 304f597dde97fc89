use crate::config::Config;
use crate::errors::AppError;
use crate::extract::LeadPayload;
use crate::models::{ApiResponse, InsightResult};
use crate::scoring::LeadScorer;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

/// Body returned by the health check.
pub const HEALTH_MESSAGE: &str = "Server is healthy";

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Scorer invoked by `POST /api/leads/score`.
    pub scorer: Arc<dyn LeadScorer>,
}

impl AppState {
    pub fn new(config: Config, scorer: Arc<dyn LeadScorer>) -> Self {
        Self { config, scorer }
    }
}

/// Health check endpoint.
///
/// Always returns HTTP 200 with a plain-text confirmation.
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, HEALTH_MESSAGE)
}

/// POST /api/leads/score
///
/// Scores the submitted lead and wraps the insight in the success envelope.
/// Scorer failures become a 500 failure envelope.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `lead` - The decoded lead record.
///
/// # Returns
///
/// * `Result<Json<ApiResponse<InsightResult>>, AppError>` - The scored lead or an error.
pub async fn score_lead(
    State(state): State<Arc<AppState>>,
    LeadPayload(lead): LeadPayload,
) -> Result<Json<ApiResponse<InsightResult>>, AppError> {
    tracing::debug!("POST /api/leads/score - {} field(s)", lead.0.len());

    let insight = state.scorer.score(&lead)?;

    tracing::info!("Lead scored: {}", insight.score);

    Ok(Json(ApiResponse::ok(insight)))
}

/// Catch-all for unmatched routes and methods.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
