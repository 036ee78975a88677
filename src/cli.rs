//! Command-line argument parsing for askql.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{
    Config, LlmConfig, DEFAULT_DATABASE, DEFAULT_GROQ_MODEL, DEFAULT_LISTEN_ADDR,
    DEFAULT_LLM_TIMEOUT_SECS,
};
use crate::error::{AskqlError, Result};
use crate::llm::LlmProvider;

/// Natural-language to SQL HTTP service for a demo student database.
#[derive(Parser, Debug)]
#[command(name = "askql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(short, long, env = "SQLITE_PATH", default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,

    /// Address to bind the HTTP server to
    #[arg(short, long, env = "LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: String,

    /// Groq API key; without it the /nl2sql and /ask paths are disabled
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub groq_api_key: Option<String>,

    /// Groq model name
    #[arg(long, env = "GROQ_MODEL", default_value = DEFAULT_GROQ_MODEL)]
    pub groq_model: String,

    /// Timeout for model API calls, in seconds
    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = DEFAULT_LLM_TIMEOUT_SECS)]
    pub llm_timeout_secs: u64,

    /// LLM provider to use ("groq" or "mock")
    #[arg(long, value_name = "PROVIDER", default_value = "groq")]
    pub llm: String,

    /// Recreate and reseed the STUDENT table before serving
    #[arg(long)]
    pub seed: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Converts parsed arguments into the service configuration.
    pub fn to_config(&self) -> Result<Config> {
        let listen_addr = self
            .listen
            .parse()
            .map_err(|e| AskqlError::config(format!("invalid listen address '{}': {e}", self.listen)))?;

        let provider: LlmProvider = self.llm.parse().map_err(AskqlError::Config)?;

        Ok(Config {
            database_path: self.database.clone(),
            listen_addr,
            llm: LlmConfig {
                provider,
                api_key: self.groq_api_key.clone(),
                model: self.groq_model.clone(),
                timeout_secs: self.llm_timeout_secs,
            },
        })
    }
}
