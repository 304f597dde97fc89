use crate::errors::AppError;
use crate::models::LeadRecord;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
};
use serde_json::Value;

/// Lead decoded from the request body.
///
/// A body not declared as JSON, or an empty one, yields an empty lead. A
/// JSON body must decode to a JSON object.
#[derive(Debug, Clone, Default)]
pub struct LeadPayload(pub LeadRecord);

#[async_trait]
impl<S> FromRequest<S> for LeadPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Bodies not declared as JSON are never inspected
        if !has_json_content_type(req.headers()) {
            return Ok(Self(LeadRecord::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidBody {
                status: rejection.status(),
                detail: rejection.body_text(),
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(LeadRecord::default()));
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| AppError::InvalidBody {
            status: StatusCode::BAD_REQUEST,
            detail: format!("Failed to parse the request body as JSON: {}", e),
        })?;

        LeadRecord::from_value(value)
            .map(Self)
            .map_err(|other| AppError::InvalidBody {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                detail: format!("Expected a JSON object, got {}", json_kind(&other)),
            })
    }
}

/// `application/json` or any `application/*+json` media type.
pub(crate) fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
