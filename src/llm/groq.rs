//! Groq LLM client.
//!
//! Groq exposes an OpenAI-compatible chat-completions API; this client posts
//! a single request per call with no retries, matching the service's
//! fail-once propagation policy. Only the request timeout bounds the call.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::{AskqlError, Result};
use crate::llm::types::Message;
use crate::llm::LlmClient;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Groq chat-completions endpoint.
const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Sampling temperature. Zero keeps generated SQL deterministic.
const TEMPERATURE: f32 = 0.0;

/// Groq client configuration.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key for authentication.
    pub api_key: String,
    /// Model to use (e.g., "llama-3.1-70b-versatile").
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl GroqConfig {
    /// Creates a new config with the given API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Groq LLM client.
#[derive(Debug, Clone)]
pub struct GroqClient {
    config: GroqConfig,
    client: Client,
}

impl GroqClient {
    /// Creates a new Groq client with the given configuration.
    pub fn new(config: GroqConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AskqlError::generation(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Converts internal messages to the wire format.
    fn convert_messages(messages: &[Message]) -> Vec<GroqMessage> {
        messages
            .iter()
            .map(|m| GroqMessage {
                role: m.role.as_str().to_string(),
                content: m.content.clone(),
            })
            .collect()
    }

    /// Maps an API error response to an AskqlError.
    fn parse_error(status: reqwest::StatusCode, body: &str) -> AskqlError {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return AskqlError::generation("Authentication failed. Check your GROQ_API_KEY.");
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return AskqlError::generation("Rate limited by the Groq API. Please wait.");
        }

        if let Ok(error_response) = serde_json::from_str::<GroqErrorResponse>(body) {
            return AskqlError::generation(format!(
                "Groq API error: {}",
                error_response.error.message
            ));
        }

        AskqlError::generation(format!("Groq API error ({status}): {body}"))
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    async fn complete(&self, messages: &[Message]) -> Result<String> {
        let request = GroqRequest {
            model: self.config.model.clone(),
            messages: Self::convert_messages(messages),
            temperature: TEMPERATURE,
        };

        debug!("Groq API request for model {}", self.config.model);

        let response = self
            .client
            .post(GROQ_API_URL)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AskqlError::generation("Groq API request timed out.")
                } else if e.is_connect() {
                    AskqlError::generation("Failed to connect to the Groq API. Check your network.")
                } else {
                    AskqlError::generation(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AskqlError::generation(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(Self::parse_error(status, &body));
        }

        let response: GroqResponse = serde_json::from_str(&body)
            .map_err(|e| AskqlError::generation(format!("failed to parse response: {e}")))?;

        response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AskqlError::generation("No response from the Groq API"))
    }
}

// Groq wire types (OpenAI-compatible)

#[derive(Debug, Serialize)]
struct GroqRequest {
    model: String,
    messages: Vec<GroqMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct GroqMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
}

#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqMessage,
}

#[derive(Debug, Deserialize)]
struct GroqErrorResponse {
    error: GroqError,
}

#[derive(Debug, Deserialize)]
struct GroqError {
    message: String,
}
