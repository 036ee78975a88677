//! Result types for query execution.
//!
//! A statement's projection decides the arity and types of each row, so rows
//! are dynamically typed rather than bound to the table schema.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AskqlError, Result};

/// A row of data from a query result.
pub type Row = Vec<Value>;

/// A single value from the database.
///
/// Serializes untagged so a row renders as a plain JSON array of scalars,
/// e.g. `["Alice", "Data Science", "A", 85]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    /// NULL value.
    #[default]
    Null,

    /// Boolean value.
    Bool(bool),

    /// Signed integer (up to i64).
    Int(i64),

    /// Floating point number.
    Float(f64),

    /// Text value.
    Text(String),

    /// Binary data.
    Bytes(Vec<u8>),
}

impl Value {
    /// Returns true if this value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns a string representation suitable for display.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Text(s) => s.clone(),
            Value::Bytes(b) => format!("<{} bytes>", b.len()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => Value::Null,
        }
    }
}

/// A student record, the expected shape of the four-column STUDENT projection.
///
/// Not an enforced schema; queries may project anything. This is a
/// convenience for the `/students` listing path only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub name: String,
    pub class_name: String,
    pub section: String,
    pub marks: i64,
}

impl Student {
    /// Builds a student from a `NAME, CLASS, SECTION, MARKS` row.
    pub fn from_row(row: &Row) -> Result<Self> {
        match row.as_slice() {
            [Value::Text(name), Value::Text(class_name), Value::Text(section), Value::Int(marks)] => {
                Ok(Self {
                    name: name.clone(),
                    class_name: class_name.clone(),
                    section: section.clone(),
                    marks: *marks,
                })
            }
            _ => Err(AskqlError::internal(format!(
                "unexpected row shape for student projection: {row:?}"
            ))),
        }
    }
}
