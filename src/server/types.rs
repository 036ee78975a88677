//! Request and response bodies for the HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::db::Row;
use crate::error::AskqlError;

/// Body of `POST /nl2sql` and `POST /ask`.
#[derive(Debug, Serialize, Deserialize)]
pub struct NlQuery {
    /// English question to convert to SQL.
    pub question: String,
}

/// A SQL statement; request body of `POST /sql`, response body of
/// `POST /nl2sql`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SqlQuery {
    pub sql: String,
}

/// Response body of `POST /sql`.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResult {
    pub rows: Vec<Row>,
}

/// Response body of `POST /ask`: the normalized statement plus its rows.
#[derive(Debug, Serialize, Deserialize)]
pub struct AskResult {
    pub sql: String,
    pub rows: Vec<Row>,
}

/// Response body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// An API error carrying the HTTP status chosen by the call path.
///
/// The same underlying failure maps to different classes depending on who
/// supplied the statement: client-supplied SQL fails as a 400, while
/// machine-generated SQL and provider failures fail as 500s.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    /// Wraps an error as a client-class (400) failure.
    pub fn bad_request(err: AskqlError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: err.to_string(),
        }
    }

    /// Wraps an error as a server-class (500) failure.
    pub fn internal(err: AskqlError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
