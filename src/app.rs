//! HTTP application assembly: routes plus the middleware chain.

use crate::errors::AppError;
use crate::handlers::{self, AppState};
use crate::middleware::json_body_middleware;
use axum::{
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

/// Builds the router with every route and layer attached.
///
/// Wrong methods on known paths fall through to the same 404 as unknown paths.
/// Malformed JSON bodies are rejected for every path, matched or not.
pub fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.body_limit_bytes;

    Router::new()
        .route("/health", get(handlers::health).fallback(handlers::not_found))
        .route(
            "/api/leads/score",
            post(handlers::score_lead).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(json_body_middleware))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .layer(CorsLayer::permissive())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(detail).into_response()
}
