//! askql - natural-language to SQL HTTP service.
//!
//! This library exposes the core modules for use in integration tests.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod llm;
pub mod normalize;
pub mod server;
