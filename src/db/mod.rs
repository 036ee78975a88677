//! SQLite query execution.
//!
//! Each call opens its own scoped connection and closes it on every exit
//! path. There is deliberately no pool, no cache, and no retry: the service
//! targets a single-file demo database where the engine's own locking is all
//! the coordination needed.

mod seed;
mod types;

pub use seed::{seed_students, SEED_ROW_COUNT};
pub use types::{Row, Student, Value};

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{Column as SqlxColumn, Connection, Row as SqlxRow, TypeInfo};
use tracing::debug;

use crate::error::{AskqlError, Result};

/// Executes single SQL statements against the configured database file.
///
/// Holds only the path; connections are opened per call and released before
/// the call returns, success or failure.
#[derive(Debug, Clone)]
pub struct Executor {
    database_path: PathBuf,
}

impl Executor {
    /// Creates an executor for the database file at `database_path`.
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    /// Returns the path of the database file this executor targets.
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// Executes a read statement and materializes the full result set.
    ///
    /// Parameters, if any, are bound positionally. Rows are fetched eagerly;
    /// there are no partial results.
    pub async fn fetch_all(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        let mut conn = self.connect().await?;

        let mut query = sqlx::query(sql);
        for param in params {
            query = bind_value(query, param);
        }

        let result = query.fetch_all(&mut conn).await;
        // Release the connection before inspecting the outcome so the error
        // path closes it too.
        let _ = conn.close().await;

        let rows = result.map_err(|e| AskqlError::execution(e.to_string()))?;
        debug!("fetched {} rows", rows.len());

        Ok(rows.iter().map(convert_row).collect())
    }

    /// Executes a write statement, commits, and returns the affected-row
    /// count.
    ///
    /// Used by seeding and administrative paths, not the request pipeline.
    pub async fn execute(&self, sql: &str, params: &[Value]) -> Result<u64> {
        let mut conn = self.connect().await?;

        let mut query = sqlx::query(sql);
        for param in params {
            query = bind_value(query, param);
        }

        let result = query.execute(&mut conn).await;
        let _ = conn.close().await;

        let outcome = result.map_err(|e| AskqlError::execution(e.to_string()))?;
        Ok(outcome.rows_affected())
    }

    /// Opens a connection to the database file, creating the file if absent.
    async fn connect(&self) -> Result<SqliteConnection> {
        let options = SqliteConnectOptions::new()
            .filename(&self.database_path)
            .create_if_missing(true);

        SqliteConnection::connect_with(&options)
            .await
            .map_err(|e| AskqlError::execution(format!("failed to open database: {e}")))
    }
}

type SqliteQuery<'q> =
    sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>;

/// Binds one dynamic value to the query's next positional placeholder.
fn bind_value<'q>(query: SqliteQuery<'q>, value: &'q Value) -> SqliteQuery<'q> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Bool(b) => query.bind(*b),
        Value::Int(i) => query.bind(*i),
        Value::Float(f) => query.bind(*f),
        Value::Text(s) => query.bind(s.as_str()),
        Value::Bytes(b) => query.bind(b.as_slice()),
    }
}

/// Converts a sqlx row into dynamically typed values.
///
/// The declared column type drives decoding; anything unrecognized falls back
/// to text, and undecodable cells become NULL.
fn convert_row(row: &SqliteRow) -> Row {
    row.columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let type_name = column.type_info().name().to_uppercase();
            match type_name.as_str() {
                "INTEGER" | "INT" | "INT4" | "INT8" | "BIGINT" => row
                    .try_get::<Option<i64>, _>(i)
                    .map(Value::from)
                    .unwrap_or(Value::Null),
                "REAL" | "FLOAT" | "DOUBLE" | "NUMERIC" => row
                    .try_get::<Option<f64>, _>(i)
                    .map(Value::from)
                    .unwrap_or(Value::Null),
                "BOOLEAN" | "BOOL" => row
                    .try_get::<Option<bool>, _>(i)
                    .map(Value::from)
                    .unwrap_or(Value::Null),
                "BLOB" => row
                    .try_get::<Option<Vec<u8>>, _>(i)
                    .map(Value::from)
                    .unwrap_or(Value::Null),
                "NULL" => Value::Null,
                _ => row
                    .try_get::<Option<String>, _>(i)
                    .map(Value::from)
                    .unwrap_or(Value::Null),
            }
        })
        .collect()
}
