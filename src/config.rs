//! Configuration for askql.
//!
//! Configuration is an explicitly constructed value built from CLI arguments
//! and environment variables, then passed into the executor and generator.
//! There is no process-wide settings singleton.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::llm::LlmProvider;

/// Default SQLite database file.
pub const DEFAULT_DATABASE: &str = "school.db";

/// Default HTTP listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Default Groq model.
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-70b-versatile";

/// Default timeout for model API calls, in seconds.
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,

    /// LLM provider configuration.
    pub llm: LlmConfig,
}

/// LLM provider configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Which provider to use.
    pub provider: LlmProvider,

    /// API key; absence degrades only the natural-language path.
    pub api_key: Option<String>,

    /// Model name.
    pub model: String,

    /// Request timeout in seconds for model calls.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            api_key: None,
            model: DEFAULT_GROQ_MODEL.to_string(),
            timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE),
            // The constant is valid, so this parse cannot fail.
            listen_addr: DEFAULT_LISTEN_ADDR
                .parse()
                .expect("default listen address parses"),
            llm: LlmConfig::default(),
        }
    }
}
