//! HTTP API for askql.
//!
//! Wires the core pipeline (normalizer, executor, generator) to a versioned
//! JSON API. The server holds no mutable cross-request state; concurrency
//! control for the database file is left entirely to SQLite.

pub mod handlers;
pub mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::db::Executor;
use crate::llm::SqlGenerator;

/// Shared per-request state.
///
/// The executor is a path, cheap to clone; the generator is shared behind an
/// Arc because trait objects are not cloneable.
#[derive(Clone)]
pub struct AppState {
    pub executor: Executor,
    pub generator: Arc<SqlGenerator>,
}

impl AppState {
    /// Creates the application state.
    pub fn new(executor: Executor, generator: SqlGenerator) -> Self {
        Self {
            executor,
            generator: Arc::new(generator),
        }
    }
}

/// Builds the application router with all routes under `/api/v1`.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        .route("/students", get(handlers::list_students))
        .route("/sql", post(handlers::run_sql))
        .route("/nl2sql", post(handlers::nl_to_sql))
        .route("/ask", post(handlers::ask))
        .with_state(state);

    Router::new().nest("/api/v1", api)
}
