//! HTTP request handlers.
//!
//! Each handler composes the core pipeline pieces and decides the error
//! class for its path: `/sql` treats execution failures as client errors
//! (the statement was caller-supplied), while `/students`, `/nl2sql`, and
//! `/ask` treat failures as server errors.

use axum::extract::State;
use axum::Json;
use tracing::{error, warn};

use crate::db::Student;
use crate::normalize::normalize_sql;
use crate::server::types::{ApiError, AskResult, Health, NlQuery, QueryResult, SqlQuery};
use crate::server::AppState;

const STUDENT_PROJECTION: &str = "SELECT NAME, CLASS, SECTION, MARKS FROM STUDENT;";

/// `GET /health` — liveness probe; touches neither database nor model.
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// `GET /students` — lists the STUDENT table as typed records.
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let rows = state
        .executor
        .fetch_all(STUDENT_PROJECTION, &[])
        .await
        .map_err(|e| {
            error!("student listing failed: {e}");
            ApiError::internal(e)
        })?;

    let students = rows
        .iter()
        .map(Student::from_row)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            error!("student listing failed: {e}");
            ApiError::internal(e)
        })?;

    Ok(Json(students))
}

/// `POST /sql` — executes a caller-supplied statement.
///
/// Execution failures are the caller's problem: 400 with the engine message.
pub async fn run_sql(
    State(state): State<AppState>,
    Json(query): Json<SqlQuery>,
) -> Result<Json<QueryResult>, ApiError> {
    let rows = state
        .executor
        .fetch_all(&query.sql, &[])
        .await
        .map_err(|e| {
            warn!("client-supplied statement failed: {e}");
            ApiError::bad_request(e)
        })?;

    Ok(Json(QueryResult { rows }))
}

/// `POST /nl2sql` — converts a question into a normalized SQL statement
/// without executing it.
pub async fn nl_to_sql(
    State(state): State<AppState>,
    Json(payload): Json<NlQuery>,
) -> Result<Json<SqlQuery>, ApiError> {
    let raw = state.generator.generate(&payload.question).await.map_err(|e| {
        error!("SQL generation failed: {e}");
        ApiError::internal(e)
    })?;

    Ok(Json(SqlQuery {
        sql: normalize_sql(&raw),
    }))
}

/// `POST /ask` — the full pipeline: generate, normalize, execute.
///
/// The statement is machine-generated here, so execution failures are
/// server-class, not the caller's fault.
pub async fn ask(
    State(state): State<AppState>,
    Json(payload): Json<NlQuery>,
) -> Result<Json<AskResult>, ApiError> {
    let raw = state.generator.generate(&payload.question).await.map_err(|e| {
        error!("SQL generation failed: {e}");
        ApiError::internal(e)
    })?;

    let sql = normalize_sql(&raw);

    let rows = state.executor.fetch_all(&sql, &[]).await.map_err(|e| {
        error!("generated statement failed: {e}");
        ApiError::internal(e)
    })?;

    Ok(Json(AskResult { sql, rows }))
}
