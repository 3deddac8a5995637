use crate::commands::{build_parser, validate::print_errors};
use crate::error::CliResult;
use cart_csvs::{to_json_pretty, write_items_csv, write_items_csv_to, CartError};
use clap::ValueEnum;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

/// Convert a cart file and write the items and total to `output`, or to `out`
/// when no output file is given. `out` receives nothing but the chosen format.
pub fn execute<W: Write>(
    file: PathBuf,
    schema: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
    mut out: W,
) -> CliResult<()> {
    let parser = build_parser(schema.as_deref())?;

    let result = match parser.parse(&file) {
        Ok(result) => result,
        Err(err @ CartError::ValidationFailed { .. }) => {
            print_errors(err.validation_errors());
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    match (format, output) {
        (OutputFormat::Json, Some(path)) => {
            std::fs::write(&path, to_json_pretty(&result)?)?;
            tracing::info!("Wrote {} items to {}", result.items.len(), path.display());
        }
        (OutputFormat::Json, None) => writeln!(out, "{}", to_json_pretty(&result)?)?,
        (OutputFormat::Csv, Some(path)) => {
            write_items_csv(&path, &result, parser.schema())?;
            tracing::info!("Wrote {} items to {}", result.items.len(), path.display());
        }
        (OutputFormat::Csv, None) => {
            write_items_csv_to(&mut out, &result, parser.schema())?;
        }
    }

    tracing::info!("Total: {:.2}", result.total);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_parse_writes_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cart.csv");
        let output = dir.path().join("cart.json");
        std::fs::write(&input, "Product name,Price,Quantity\ntest1,5,6\ntest2,10,6\n").unwrap();

        execute(
            input,
            None,
            OutputFormat::Json,
            Some(output.clone()),
            Vec::new(),
        )
        .unwrap();

        let json = std::fs::read_to_string(output).unwrap();
        assert!(json.contains("\"total\": 90.0"));
        assert!(json.contains("\"name\": \"test2\""));
    }

    #[test]
    fn test_parse_writes_csv_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cart.csv");
        let output = dir.path().join("items.csv");
        std::fs::write(&input, "Product name,Price,Quantity\ntest1,5,6\n").unwrap();

        execute(
            input,
            None,
            OutputFormat::Csv,
            Some(output.clone()),
            Vec::new(),
        )
        .unwrap();

        let csv = std::fs::read_to_string(output).unwrap();
        assert!(csv.starts_with("id,Product name,Price,Quantity\n"));
        assert!(csv.trim_end().ends_with(",test1,5,6"));
    }

    #[test]
    fn test_parse_invalid_cart_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cart.csv");
        std::fs::write(&input, "Product name,Price,Quantity\ntest1,5,-6\n").unwrap();

        let err = execute(input, None, OutputFormat::Json, None, Vec::new()).unwrap_err();

        assert!(matches!(
            err,
            CliError::Cart(CartError::ValidationFailed { .. })
        ));
        assert_eq!(err.to_string(), "Validation failed!");
    }

    #[test]
    fn test_parse_json_to_stdout_is_only_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cart.csv");
        std::fs::write(
            &input,
            "Product name,Price,Quantity\ntest1,5,6\ntest2,10,6\n",
        )
        .unwrap();
        let mut out = Vec::new();

        execute(input, None, OutputFormat::Json, None, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["total"], 90.0);
        assert_eq!(value["items"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_parse_csv_to_stdout_is_only_csv() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cart.csv");
        std::fs::write(
            &input,
            "Product name,Price,Quantity\ntest1,5,6\ntest2,10,6\n",
        )
        .unwrap();
        let mut out = Vec::new();

        execute(input, None, OutputFormat::Csv, None, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,Product name,Price,Quantity");
        assert!(lines[1].ends_with(",test1,5,6"));
        assert!(lines[2].ends_with(",test2,10,6"));
    }
}
