/*!
# Records & Line Items

A [`Record`] is one converted data line: schema keys mapped to coerced
[`CellValue`]s, in schema column order. A [`LineItem`] is a record with an
identifier attached.
*/

use crate::cells::{coerce_cell, CellValue};
use crate::schemas::Schema;
use serde::ser::{Serialize, SerializeMap, Serializer};

// ================================================================================================
// Record
// ================================================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an existing value in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(CellValue::as_str)
    }

    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(CellValue::as_number)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// ================================================================================================
// Line Items
// ================================================================================================

/// One converted cart line.
///
/// Field names follow the schema keys; `name`, `price` and `quantity` are the
/// keys of the default cart schema.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: String,
    pub fields: Record,
}

impl LineItem {
    pub fn new(id: impl Into<String>, fields: Record) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.get(key)
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get_str("name")
    }

    pub fn price(&self) -> Option<f64> {
        self.fields.get_number("price")
    }

    pub fn quantity(&self) -> Option<f64> {
        self.fields.get_number("quantity")
    }
}

impl Serialize for LineItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("id", &self.id)?;
        for (key, value) in self.fields.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// ================================================================================================
// Line Converter
// ================================================================================================

/// Convert one data line into a record keyed by the schema.
///
/// Only call this on lines that passed structural validation: field count and
/// cell types are not re-checked. A missing trailing field converts as empty.
pub fn parse_line(line: &str, schema: &Schema) -> Record {
    let mut cells = line.split(',').map(str::trim);

    schema
        .columns()
        .iter()
        .map(|column| {
            let cell = cells.next().unwrap_or_default();
            (column.key.as_str(), coerce_cell(cell, column.column_type))
        })
        .collect()
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{Column, ColumnType};

    #[test]
    fn test_parse_line_default_schema() {
        let record = parse_line("Mollis consequat,9.00,2", &Schema::default());

        assert_eq!(record.get_str("name"), Some("Mollis consequat"));
        assert_eq!(record.get("price"), Some(&CellValue::Number(9.0)));
        assert_eq!(record.get("quantity"), Some(&CellValue::Number(2.0)));
        assert_eq!(
            record.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            vec!["name", "price", "quantity"]
        );
    }

    #[test]
    fn test_parse_line_custom_schema() {
        let schema = Schema::new(vec![
            Column::new("TestName", "testName", ColumnType::String),
            Column::new("TestTet", "testText", ColumnType::String),
            Column::new("TestValue2", "testValue2", ColumnType::NumberPositive),
        ])
        .unwrap();

        let record = parse_line("TestString,  testString2, 3", &schema);

        assert_eq!(record.get_str("testName"), Some("TestString"));
        assert_eq!(record.get_str("testText"), Some("testString2"));
        assert_eq!(record.get_number("testValue2"), Some(3.0));
    }

    #[test]
    fn test_parse_line_keeps_fractional_quantity() {
        let record = parse_line("Widget,1.5,2.5", &Schema::default());

        assert_eq!(record.get_number("quantity"), Some(2.5));
    }

    #[test]
    fn test_record_insert_replaces_existing_key() {
        let mut record = Record::new();
        record.insert("price", "5");
        record.insert("quantity", 2.0);
        record.insert("price", 7.0);

        assert_eq!(record.len(), 2);
        assert_eq!(record.get_number("price"), Some(7.0));
    }

    #[test]
    fn test_line_item_serializes_id_first_in_schema_order() {
        let item = LineItem::new("item-1", parse_line("test1,5,6", &Schema::default()));

        let json = serde_json::to_string(&item).unwrap();

        assert_eq!(
            json,
            r#"{"id":"item-1","name":"test1","price":5.0,"quantity":6.0}"#
        );
    }
}
