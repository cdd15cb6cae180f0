//! Gemini API client
//!
//! Thin request/response glue around POST generateContent: one single-turn
//! request per user message, no retry, no streaming, no rate limiting.

use crate::errors::{HealthError, Result};
use crate::gemini::prompt::build_prompt;
use crate::gemini::types::{Content, GenerateRequest, GenerateResponse, GenerationConfig, Part};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Generation-length cap sent with every request
pub const MAX_OUTPUT_TOKENS: u32 = 200;

/// Request timeout (30 seconds)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed user-visible reply substituted for any failed request
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't get a response from the assistant.";

/// Seam between the chat session and the text-generation service
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Produce a reply for one user message
    async fn reply(&self, message: &str) -> Result<String>;
}

/// HTTP client for the Gemini generateContent endpoint
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a new client
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(HealthError::HttpError)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Endpoint URL without the key query parameter
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send one message and extract the first text part of the first
    /// candidate.
    pub async fn generate(&self, message: &str) -> Result<String> {
        let url = format!("{}?key={}", self.endpoint(), self.api_key);

        let request = GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: build_prompt(message),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| HealthError::GeminiApiError(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(HealthError::GeminiApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| HealthError::GeminiApiError(format!("Failed to parse response: {}", e)))?;

        body.first_text()
            .map(|t| t.to_string())
            .ok_or_else(|| {
                HealthError::GeminiApiError("Response contained no text candidates".to_string())
            })
    }

    /// Check whether the endpoint is reachable.
    ///
    /// Any HTTP response counts as reachable; an auth error still proves the
    /// network path works.
    pub async fn is_reachable(&self) -> bool {
        self.client
            .get(&self.base_url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .is_ok()
    }

    /// Get the configured model name
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatBackend for GeminiClient {
    async fn reply(&self, message: &str) -> Result<String> {
        self.generate(message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_API_BASE, DEFAULT_MODEL};

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new(DEFAULT_API_BASE, DEFAULT_MODEL, "key").unwrap();
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert_eq!(
            client.endpoint(),
            format!("{}/models/{}:generateContent", DEFAULT_API_BASE, DEFAULT_MODEL)
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = GeminiClient::new("http://localhost:9999/v1/", "test-model", "key").unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1/models/test-model:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_against_unreachable_host() {
        // Port 9 (discard) is not serving HTTP; the call must surface an
        // API error rather than panic
        let client = GeminiClient::new("http://127.0.0.1:9", "test-model", "key").unwrap();
        let result = client.generate("hello").await;
        assert!(matches!(result, Err(HealthError::GeminiApiError(_))));
    }
}
