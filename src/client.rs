use tracing::{debug, info};

use crate::error::ClientError;
use crate::models::{AskRequest, Recommendation, decode_recommendation};

/// HTTP client for the recommendation API.
/// Cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct RecommendClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RecommendClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Send one question to the API and decode the answer.
    /// Single attempt: no retry, no timeout beyond the HTTP stack's own.
    pub async fn ask(&self, question: &str) -> Result<Recommendation, ClientError> {
        info!("Posting question to {}", self.endpoint);

        let request = AskRequest {
            question: question.to_string(),
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        info!("Received response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::Network(format!(
                "API request failed with status {}: {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        debug!("Response body: {}", body);

        decode_recommendation(&body)
    }
}
