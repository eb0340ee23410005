//! Gemini gateway adapter — request building, classification, parsing.

use super::types::{ErrorResponse, GenerateContentResponse, build_request};
use async_trait::async_trait;
use gemchat_application::{ChatGateway, GatewayError};
use gemchat_domain::{Message, Model};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

/// Connection settings for the Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub max_output_tokens: Option<u32>,
}

/// HTTP adapter for the Gemini `generateContent` endpoint
pub struct GeminiGateway {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiGateway {
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Request(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    fn request_url(&self, model: &Model) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl ChatGateway for GeminiGateway {
    async fn continue_conversation(
        &self,
        model: &Model,
        history: &[Message],
    ) -> Result<String, GatewayError> {
        let body = build_request(history, self.config.max_output_tokens);

        debug!(model = %model, turns = history.len(), "Sending generateContent request");

        let response = self
            .http
            .post(self.request_url(model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Request(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            warn!(status = %status, "Gemini API returned an error");
            return Err(classify_failure(status, &error_body));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Response(format!("Failed to parse response: {e}")))?;

        api_response
            .reply_text()
            .ok_or_else(|| GatewayError::Response("No candidates in response".to_string()))
    }
}

/// Map a non-success HTTP response to the gateway error taxonomy.
///
/// Rate/quota conditions surface either as HTTP 429 or as a
/// `RESOURCE_EXHAUSTED` status marker in the error body; both collapse
/// into [`GatewayError::RateLimited`] here, at the provider boundary.
fn classify_failure(status: StatusCode, error_body: &str) -> GatewayError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return GatewayError::RateLimited;
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(error_body) {
        if parsed.error.status == "RESOURCE_EXHAUSTED" {
            return GatewayError::RateLimited;
        }
        return GatewayError::Response(format!(
            "Gemini API error ({}): {}",
            parsed.error.status, parsed.error.message
        ));
    }

    GatewayError::Response(format!("Gemini API returned {status}: {error_body}"))
}
