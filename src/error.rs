//! Error types for askql.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for askql operations.
#[derive(Error, Debug)]
pub enum AskqlError {
    /// SQL generation errors (model unreachable, unauthenticated, not configured).
    #[error("Generation error: {0}")]
    Generation(String),

    /// Query execution errors (syntax errors, missing tables, locked database, etc.)
    #[error("Execution error: {0}")]
    Execution(String),

    /// Configuration errors (invalid listen address, bad provider name, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AskqlError {
    /// Creates a generation error with the given message.
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Creates an execution error with the given message.
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Generation(_) => "Generation Error",
            Self::Execution(_) => "Execution Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using AskqlError.
pub type Result<T> = std::result::Result<T, AskqlError>;
