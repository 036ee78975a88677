//! LLM integration for SQL generation.
//!
//! Provides the client trait, provider selection, and the generator used by
//! the natural-language request path.

pub mod groq;
pub mod mock;
pub mod prompt;
pub mod types;

pub use groq::{GroqClient, GroqConfig};
pub use mock::MockLlmClient;
pub use prompt::build_messages;
pub use types::{Message, Role};

use async_trait::async_trait;
use std::str::FromStr;

use crate::config::LlmConfig;
use crate::error::{AskqlError, Result};

/// Trait for LLM clients that can generate completions.
///
/// Implementations must be thread-safe (Send + Sync) to support async
/// operations.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generates a completion for the given messages.
    ///
    /// Returns the complete response as a single string.
    async fn complete(&self, messages: &[Message]) -> Result<String>;
}

/// LLM provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LlmProvider {
    /// Groq (OpenAI-compatible chat completions).
    #[default]
    Groq,
    /// Mock client for testing (no API key required).
    Mock,
}

impl LlmProvider {
    /// Returns the provider as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::Mock => "mock",
        }
    }
}

impl FromStr for LlmProvider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "groq" => Ok(Self::Groq),
            "mock" => Ok(Self::Mock),
            _ => Err(format!("Unknown LLM provider: {s}")),
        }
    }
}

impl std::fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The SQL generator used by the natural-language path.
///
/// "Configured" versus "not configured" is an explicit variant rather than an
/// implicit absence: a service started without a credential carries the
/// reason with it and fails with a clear generation error at call time,
/// leaving the direct-SQL paths untouched.
pub enum SqlGenerator {
    /// A usable client; the NL path is live.
    Enabled(Box<dyn LlmClient>),
    /// No usable client; the string explains why.
    Disabled(String),
}

impl SqlGenerator {
    /// Builds a generator from configuration.
    ///
    /// A missing API key for a provider that needs one produces the
    /// `Disabled` variant instead of an error, so the rest of the service
    /// starts normally.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        match config.provider {
            LlmProvider::Groq => match &config.api_key {
                Some(key) => {
                    let groq = GroqConfig::new(key, &config.model)
                        .with_timeout(config.timeout_secs);
                    Ok(Self::Enabled(Box::new(GroqClient::new(groq)?)))
                }
                None => Ok(Self::Disabled(
                    "GROQ_API_KEY is missing. Set it in your environment or .env file."
                        .to_string(),
                )),
            },
            LlmProvider::Mock => Ok(Self::Enabled(Box::new(MockLlmClient::new()))),
        }
    }

    /// Returns true if the NL path can serve requests.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// Generates raw SQL text for a natural-language question.
    ///
    /// The returned text is untrusted model output; callers normalize it
    /// before execution.
    pub async fn generate(&self, question: &str) -> Result<String> {
        match self {
            Self::Enabled(client) => client.complete(&build_messages(question)).await,
            Self::Disabled(reason) => Err(AskqlError::generation(reason.clone())),
        }
    }
}
