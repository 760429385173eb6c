use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Request payload for the recommendation endpoint
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest {
    pub question: String,
}

/// Recommendation returned by the API.
/// `keywords` and `num_results` are optional across deployments; `answer`
/// is required and a payload without it fails to decode.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Recommendation {
    pub answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub num_results: u64,
}

/// Decode a response body into a [`Recommendation`].
///
/// Two payload shapes are accepted across deployments: either the body is
/// the recommendation object itself, or it is an API Gateway proxy envelope
/// whose `body` field holds the recommendation as a JSON-encoded string.
/// A top-level string-valued `body` field triggers the unwrap; both shapes
/// must yield the same result for equivalent data.
pub fn decode_recommendation(raw: &str) -> Result<Recommendation, ClientError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| ClientError::Decode(e.to_string()))?;

    let payload = match value.get("body").and_then(serde_json::Value::as_str) {
        Some(body) => serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))?,
        None => value,
    };

    serde_json::from_value(payload).map_err(|e| ClientError::Decode(e.to_string()))
}
