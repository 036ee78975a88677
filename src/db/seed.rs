//! Demo database seeding.
//!
//! Creates the STUDENT table if needed, clears it, and inserts the fixed
//! sample rows. Safe to run repeatedly.

use tracing::info;

use super::{Executor, Value};
use crate::error::Result;

const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS STUDENT (
  NAME    VARCHAR(25),
  CLASS   VARCHAR(25),
  SECTION VARCHAR(25),
  MARKS   INT
);";

const INSERT_STUDENT: &str =
    "INSERT INTO STUDENT (NAME, CLASS, SECTION, MARKS) VALUES (?, ?, ?, ?);";

const SEED_ROWS: [(&str, &str, &str, i64); 4] = [
    ("Alice", "Data Science", "A", 85),
    ("Bob", "Data Science", "B", 78),
    ("Charlie", "AI", "A", 92),
    ("Diana", "AI", "B", 88),
];

/// Number of rows the seed leaves in the STUDENT table.
pub const SEED_ROW_COUNT: usize = SEED_ROWS.len();

/// Seeds the STUDENT table, truncating any existing rows first.
///
/// Returns the number of rows inserted.
pub async fn seed_students(executor: &Executor) -> Result<u64> {
    executor.execute(CREATE_TABLE, &[]).await?;
    executor.execute("DELETE FROM STUDENT;", &[]).await?;

    let mut inserted = 0;
    for (name, class, section, marks) in SEED_ROWS {
        inserted += executor
            .execute(
                INSERT_STUDENT,
                &[
                    Value::from(name),
                    Value::from(class),
                    Value::from(section),
                    Value::Int(marks),
                ],
            )
            .await?;
    }

    info!(
        "seeded STUDENT table in {} with {} rows",
        executor.database_path().display(),
        inserted
    );
    Ok(inserted)
}
