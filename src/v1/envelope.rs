use std::collections::BTreeMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;

lazy_static! {
    /// Headers attached to every envelope, whatever the payload or outcome.
    pub static ref RESPONSE_HEADERS: BTreeMap<String, String> = [
        ("Content-Type", "application/json"),
        ("Access-Control-Allow-Origin", "*"),
        (
            "Access-Control-Allow-Headers",
            "Content-Type,Authorization,X-Amz-Date,X-Api-Key,X-Amz-Security-Token",
        ),
        ("Access-Control-Allow-Methods", "GET, OPTIONS, POST"),
        (
            "Cache-Control",
            "no-store, no-cache, must-revalidate, max-age = 0",
        ),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
}

/// HTTP-shaped response in the API Gateway proxy integration format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status_code: u16,
    pub body: String,
    pub headers: BTreeMap<String, String>,
}

impl Envelope {
    /// Builds an envelope from an optional payload and error.
    ///
    /// A supplied error is logged and forces status 400; otherwise the status
    /// is `status` or 200. A missing payload is encoded as `{}`.
    pub fn build(
        payload: Option<&Value>,
        error: Option<&dyn fmt::Display>,
        status: Option<u16>,
    ) -> Self {
        let status_code = match error {
            Some(err) => {
                tracing::error!(error = %err, "Request failed");
                STATUS_BAD_REQUEST
            }
            None => status.unwrap_or(STATUS_OK),
        };
        Self {
            status_code,
            body: encode_body(payload),
            headers: RESPONSE_HEADERS.clone(),
        }
    }

    pub fn ok(payload: &Value) -> Self {
        Self::build(Some(payload), None, None)
    }

    pub fn with_status(payload: &Value, status: u16) -> Self {
        Self::build(Some(payload), None, Some(status))
    }

    pub fn from_error(error: &dyn fmt::Display) -> Self {
        Self::build(None, Some(error), None)
    }

    /// Decodes the body back into JSON.
    pub fn body_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

fn encode_body(payload: Option<&Value>) -> String {
    match payload {
        Some(value) if !value.is_null() => {
            serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
        }
        _ => "{}".to_string(),
    }
}
