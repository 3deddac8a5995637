/*!
# Parse Result Export

Renders a [`ParseResult`] as CSV (`id` followed by the schema headers) or as
pretty-printed JSON.
*/

use crate::{errors::CartResult, parser::ParseResult, schemas::Schema};
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the converted items as CSV to `path`
pub fn write_items_csv<P: AsRef<Path>>(
    path: P,
    result: &ParseResult,
    schema: &Schema,
) -> CartResult<()> {
    let file = File::create(path)?;
    write_items_csv_to(file, result, schema)
}

/// Write the converted items as CSV to any writer
pub fn write_items_csv_to<W: Write>(
    writer: W,
    result: &ParseResult,
    schema: &Schema,
) -> CartResult<()> {
    let mut wtr = Writer::from_writer(writer);

    let mut header = vec!["id"];
    header.extend(schema.header_names());
    wtr.write_record(&header)?;

    for item in &result.items {
        let mut row = vec![item.id.clone()];
        for column in schema.columns() {
            row.push(
                item.get(&column.key)
                    .map(|value| value.to_string())
                    .unwrap_or_default(),
            );
        }
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn to_json_pretty(result: &ParseResult) -> CartResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{parse_line, LineItem};
    use csv::Reader;
    use tempfile::NamedTempFile;

    fn sample_result() -> ParseResult {
        let schema = Schema::default();
        ParseResult {
            items: vec![
                LineItem::new("a", parse_line("Mollis consequat,9.00,2", &schema)),
                LineItem::new("b", parse_line("Tvoluptatem,10.32,1", &schema)),
            ],
            total: 28.32,
        }
    }

    #[test]
    fn test_write_items_csv() {
        let temp_file = NamedTempFile::new().unwrap();

        write_items_csv(temp_file.path(), &sample_result(), &Schema::default()).unwrap();

        let mut rdr = Reader::from_path(temp_file.path()).unwrap();
        assert_eq!(
            rdr.headers().unwrap().iter().collect::<Vec<_>>(),
            vec!["id", "Product name", "Price", "Quantity"]
        );
        let rows: Vec<Vec<String>> = rdr
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();
        assert_eq!(rows[0], vec!["a", "Mollis consequat", "9", "2"]);
        assert_eq!(rows[1], vec!["b", "Tvoluptatem", "10.32", "1"]);
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json_pretty(&sample_result()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 28.32);
        assert_eq!(value["items"][0]["id"], "a");
        assert_eq!(value["items"][1]["name"], "Tvoluptatem");
        assert_eq!(value["items"][1]["price"], 10.32);
    }
}
