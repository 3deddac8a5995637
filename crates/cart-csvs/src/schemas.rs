/*!
# Cart CSV Schema Definitions

A [`Schema`] is the ordered list of columns a cart file must carry. Column order
drives both header matching and the key order of converted records.

The default schema describes `cart.csv`:

| Header         | Key        | Type              |
|----------------|------------|-------------------|
| `Product name` | `name`     | `STRING`          |
| `Price`        | `price`    | `NUMBER_POSITIVE` |
| `Quantity`     | `quantity` | `NUMBER_POSITIVE` |

Schemas are plain configuration. Build a new one with [`Schema::new`] or load it
from YAML with [`Schema::from_yaml_file`]; nothing in this crate mutates a schema
after construction.
*/

use crate::errors::{CartError, CartResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Expected headers for cart.csv in exact order
pub const CART_CSV_HEADERS: &[&str] = &["Product name", "Price", "Quantity"];

/// Output keys for cart.csv, parallel to [`CART_CSV_HEADERS`]
pub const CART_CSV_KEYS: &[&str] = &["name", "price", "quantity"];

// ================================================================================================
// Column Types
// ================================================================================================

/// Value type of a single column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Any non-blank text
    String,
    /// A number greater than or equal to zero
    NumberPositive,
}

impl ColumnType {
    /// Every recognized column type
    pub const ALL: &'static [ColumnType] = &[ColumnType::String, ColumnType::NumberPositive];
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::String => f.write_str("STRING"),
            ColumnType::NumberPositive => f.write_str("NUMBER_POSITIVE"),
        }
    }
}

// ================================================================================================
// Columns
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Header text expected at this position
    pub name: String,

    /// Property name used in converted records
    pub key: String,

    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, key: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            column_type,
        }
    }
}

// ================================================================================================
// Schema
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    columns: Vec<Column>,
}

/// On-disk shape of a schema file, checked by [`Schema::new`] before use
#[derive(Debug, Deserialize)]
struct SchemaFile {
    columns: Vec<Column>,
}

impl Schema {
    /// Build a schema, rejecting an empty column list and duplicate keys
    pub fn new(columns: Vec<Column>) -> CartResult<Self> {
        if columns.is_empty() {
            return Err(CartError::InvalidSchema(
                "schema must declare at least one column".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if column.key.trim().is_empty() {
                return Err(CartError::InvalidSchema(format!(
                    "column '{}' has an empty key",
                    column.name
                )));
            }
            if !seen.insert(column.key.as_str()) {
                return Err(CartError::InvalidSchema(format!(
                    "duplicate column key '{}'",
                    column.key
                )));
            }
        }

        Ok(Self { columns })
    }

    pub fn from_yaml_str(yaml: &str) -> CartResult<Self> {
        let file: SchemaFile = serde_yaml::from_str(yaml)?;
        Self::new(file.columns)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> CartResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn supported_types() -> &'static [ColumnType] {
        ColumnType::ALL
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn header_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

impl Default for Schema {
    fn default() -> Self {
        let types = [
            ColumnType::String,
            ColumnType::NumberPositive,
            ColumnType::NumberPositive,
        ];
        let columns = CART_CSV_HEADERS
            .iter()
            .zip(CART_CSV_KEYS)
            .zip(types)
            .map(|((name, key), column_type)| Column::new(*name, *key, column_type))
            .collect();

        Self { columns }
    }
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_schema_matches_cart_headers() {
        let schema = Schema::default();

        assert_eq!(schema.column_count(), 3);
        assert_eq!(
            schema.header_names().collect::<Vec<_>>(),
            CART_CSV_HEADERS.to_vec()
        );
        assert_eq!(schema.columns()[0].column_type, ColumnType::String);
        assert_eq!(schema.columns()[1].key, "price");
        assert_eq!(schema.columns()[2].column_type, ColumnType::NumberPositive);
        assert!(schema
            .columns()
            .iter()
            .all(|c| Schema::supported_types().contains(&c.column_type)));
    }

    #[test]
    fn test_schema_rejects_duplicate_keys() {
        let result = Schema::new(vec![
            Column::new("A", "same", ColumnType::String),
            Column::new("B", "same", ColumnType::NumberPositive),
        ]);

        assert!(result
            .unwrap_err()
            .to_string()
            .contains("duplicate column key 'same'"));
    }

    #[test]
    fn test_schema_rejects_empty_columns() {
        assert!(matches!(
            Schema::new(vec![]),
            Err(CartError::InvalidSchema(_))
        ));
    }

    #[test]
    fn test_schema_from_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "columns:\n  - name: Sku\n    key: sku\n    type: string\n  - name: Weight\n    key: weight\n    type: number_positive"
        )
        .unwrap();

        let schema = Schema::from_yaml_file(file.path()).unwrap();

        assert_eq!(
            schema.columns(),
            &[
                Column::new("Sku", "sku", ColumnType::String),
                Column::new("Weight", "weight", ColumnType::NumberPositive),
            ]
        );
    }

    #[test]
    fn test_schema_from_yaml_rejects_unknown_type() {
        let yaml = "columns:\n  - name: When\n    key: when\n    type: date\n";

        assert!(matches!(
            Schema::from_yaml_str(yaml),
            Err(CartError::Yaml(_))
        ));
    }
}
