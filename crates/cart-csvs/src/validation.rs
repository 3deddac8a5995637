/*!
# Structural Validation

Checks raw cart text against a [`Schema`] in one pass:

1. header names and count,
2. field count of every non-blank data row,
3. every cell of every well-shaped row.

Nothing short-circuits. Every problem found is returned, in detection order.
*/

use crate::cells::validate_cell;
use crate::schemas::Schema;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::debug;

// ================================================================================================
// Validation Errors
// ================================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Header,
    Row,
    Cell,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Header => f.write_str("header"),
            ErrorKind::Row => f.write_str("row"),
            ErrorKind::Cell => f.write_str("cell"),
        }
    }
}

/// One structural problem in a cart file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,

    /// Data row index (0-based, header excluded); `None` for header errors
    #[serde(serialize_with = "serialize_index")]
    pub row: Option<usize>,

    /// Column index; `None` when the error is not about one column
    #[serde(serialize_with = "serialize_index")]
    pub column: Option<usize>,

    pub message: String,
}

impl ValidationError {
    pub fn new(
        kind: ErrorKind,
        row: Option<usize>,
        column: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            row,
            column,
            message: message.into(),
        }
    }

    /// Same error placed at a data row and column
    pub fn at(self, row: usize, column: usize) -> Self {
        Self {
            row: Some(row),
            column: Some(column),
            ..self
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.kind)?;
        if let Some(row) = self.row {
            write!(f, " row {}", row)?;
        }
        if let Some(column) = self.column {
            write!(f, " column {}", column)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Absent indexes are written as `-1`
fn serialize_index<S>(index: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match index {
        Some(i) => serializer.serialize_u64(*i as u64),
        None => serializer.serialize_i64(-1),
    }
}

// ================================================================================================
// Line Splitting
// ================================================================================================

/// Trimmed, non-blank lines of a cart file split into header and data rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLines<'a> {
    pub header: Option<&'a str>,
    pub rows: Vec<&'a str>,
}

impl<'a> CartLines<'a> {
    pub fn split(text: &'a str) -> Self {
        let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
        let header = lines.next();
        Self {
            header,
            rows: lines.collect(),
        }
    }
}

// ================================================================================================
// Structural Validator
// ================================================================================================

/// Validate cart text against `schema`, returning every problem found
pub fn validate_text(text: &str, schema: &Schema) -> Vec<ValidationError> {
    let lines = CartLines::split(text);
    let mut errors = Vec::new();

    if let Some(error) = validate_header(lines.header, schema) {
        errors.push(error);
    }

    for (row_index, row) in lines.rows.iter().enumerate() {
        let cells: Vec<&str> = row.split(',').collect();

        if cells.len() != schema.column_count() {
            errors.push(ValidationError::new(
                ErrorKind::Row,
                Some(row_index),
                None,
                format!(
                    "Expected row to have {} cells but received {}.",
                    schema.column_count(),
                    cells.len()
                ),
            ));
            continue;
        }

        for (column_index, (cell, column)) in cells.iter().zip(schema.columns()).enumerate() {
            if let Some(error) = validate_cell(cell, column) {
                errors.push(error.at(row_index, column_index));
            }
        }
    }

    debug!(
        rows = lines.rows.len(),
        errors = errors.len(),
        "validated cart text"
    );

    errors
}

fn validate_header(header: Option<&str>, schema: &Schema) -> Option<ValidationError> {
    let expected: Vec<&str> = schema.header_names().collect();

    let Some(header) = header else {
        return Some(ValidationError::new(
            ErrorKind::Header,
            None,
            None,
            format!(
                "Expected header to be \"{}\" but received empty input.",
                expected.join(",")
            ),
        ));
    };

    let actual: Vec<&str> = header.split(',').map(str::trim).collect();
    let first_mismatch = (0..expected.len().max(actual.len()))
        .find(|&i| expected.get(i) != actual.get(i))?;

    let message = if actual.len() != expected.len() {
        format!(
            "Expected header to have {} columns but received {}.",
            expected.len(),
            actual.len()
        )
    } else {
        format!(
            "Expected header to be named \"{}\" but received \"{}\".",
            expected[first_mismatch], actual[first_mismatch]
        )
    };

    Some(ValidationError::new(
        ErrorKind::Header,
        None,
        Some(first_mismatch),
        message,
    ))
}

// ================================================================================================
// Tests
// ================================================================================================
