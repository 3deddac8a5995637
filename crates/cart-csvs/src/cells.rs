/*!
# Cell Validation & Coercion

Each [`ColumnType`] maps to a [`CellHandler`]: a predicate deciding whether a
trimmed cell is acceptable and a coercion turning it into a [`CellValue`].
New column types get a new handler in [`ColumnType::handler`].
*/

use crate::schemas::{Column, ColumnType};
use crate::validation::{ErrorKind, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

// ================================================================================================
// Cell Values
// ================================================================================================

/// A converted cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            CellValue::Number(_) => None,
        }
    }

    /// Numeric view of the cell. Text holding a number counts.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => parse_number(s.trim()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// Finite floating point parse; `NaN` and infinities are not numbers here
pub(crate) fn parse_number(trimmed: &str) -> Option<f64> {
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

// ================================================================================================
// Dispatch Table
// ================================================================================================

/// Validate + coerce pair for one column type. Both receive the trimmed cell.
pub struct CellHandler {
    pub accepts: fn(&str) -> bool,
    pub coerce: fn(&str) -> CellValue,
    /// Completes "Expected cell to be ..."
    pub expectation: &'static str,
}

fn accepts_string(s: &str) -> bool {
    !s.is_empty()
}

fn coerce_string(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

fn accepts_number_positive(s: &str) -> bool {
    parse_number(s).is_some_and(|n| n >= 0.0)
}

fn coerce_number(s: &str) -> CellValue {
    match parse_number(s) {
        Some(n) => CellValue::Number(n),
        None => CellValue::Text(s.to_string()),
    }
}

static STRING_HANDLER: CellHandler = CellHandler {
    accepts: accepts_string,
    coerce: coerce_string,
    expectation: "a nonempty string",
};

static NUMBER_POSITIVE_HANDLER: CellHandler = CellHandler {
    accepts: accepts_number_positive,
    coerce: coerce_number,
    expectation: "a positive number",
};

impl ColumnType {
    pub fn handler(self) -> &'static CellHandler {
        match self {
            ColumnType::String => &STRING_HANDLER,
            ColumnType::NumberPositive => &NUMBER_POSITIVE_HANDLER,
        }
    }
}

// ================================================================================================
// Cell Validator
// ================================================================================================

/// Check one raw cell against its column.
///
/// The returned error has no position; the structural pass places it with
/// [`ValidationError::at`].
pub fn validate_cell(raw: &str, column: &Column) -> Option<ValidationError> {
    let handler = column.column_type.handler();
    if (handler.accepts)(raw.trim()) {
        return None;
    }

    Some(ValidationError::new(
        ErrorKind::Cell,
        None,
        None,
        format!(
            "Expected cell to be {} but received \"{}\".",
            handler.expectation, raw
        ),
    ))
}

/// Convert one trimmed cell according to its column type
pub fn coerce_cell(trimmed: &str, column_type: ColumnType) -> CellValue {
    (column_type.handler().coerce)(trimmed)
}

// ================================================================================================
// Tests
// ================================================================================================
