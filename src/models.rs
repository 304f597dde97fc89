use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============ Request Models ============

/// A prospective customer record submitted for scoring.
///
/// The record is schemaless: any JSON object is accepted and no field is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadRecord(pub Map<String, Value>);

impl LeadRecord {
    /// Normalizes a decoded JSON document into a lead record.
    ///
    /// Only JSON objects are leads; any other value is returned unchanged as the error.
    pub fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(other),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

// ============ Response Models ============

/// Mock scoring output for a single lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightResult {
    /// Lead score in `0..100`.
    pub score: u8,
    /// Recommended next steps, in priority order.
    pub follow_up_actions: Vec<String>,
}

/// Standard JSON envelope returned by the API endpoints.
///
/// Successful calls carry `data`; failed calls carry `message` and `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            error: Some(error.into()),
        }
    }
}

/// Body returned for unmatched routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotFoundBody {
    pub message: String,
}
