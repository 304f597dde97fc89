use crate::errors::AppError;
use crate::extract::has_json_content_type;
use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    http::{self, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::de::IgnoredAny;

/// Rejects JSON bodies that fail to parse before any route handles them.
///
/// Only requests declaring a JSON content type with a non-empty body are
/// inspected. The buffered body is handed on unchanged.
pub async fn json_body_middleware(req: Request, next: Next) -> Response {
    if !has_json_content_type(req.headers()) {
        return next.run(req).await;
    }

    let (parts, body) = req.into_parts();
    let bytes = match Bytes::from_request(http::Request::new(body), &()).await {
        Ok(bytes) => bytes,
        Err(rejection) => {
            return AppError::InvalidBody {
                status: rejection.status(),
                detail: rejection.body_text(),
            }
            .into_response()
        }
    };

    if !bytes.iter().all(u8::is_ascii_whitespace) {
        if let Err(e) = serde_json::from_slice::<IgnoredAny>(&bytes) {
            return AppError::InvalidBody {
                status: StatusCode::BAD_REQUEST,
                detail: format!("Failed to parse the request body as JSON: {}", e),
            }
            .into_response();
        }
    }

    next.run(http::Request::from_parts(parts, Body::from(bytes))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::to_bytes, http::header, middleware, routing::post, Router};
    use tower::ServiceExt; // for oneshot

    fn echo_app() -> Router {
        Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .layer(middleware::from_fn(json_body_middleware))
    }

    fn json_request(body: &'static str) -> Request {
        http::Request::builder()
            .method("POST")
            .uri("/echo")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_json_passes_through_unchanged() {
        let response = echo_app().oneshot(json_request(r#"{"a": [1, 2]}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"a": [1, 2]}"#);
    }

    #[tokio::test]
    async fn test_malformed_json_rejected() {
        let response = echo_app().oneshot(json_request("{bad")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_json_body_not_inspected() {
        let req = http::Request::builder()
            .method("POST")
            .uri("/echo")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("{bad"))
            .unwrap();
        let response = echo_app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
