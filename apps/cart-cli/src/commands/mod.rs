pub mod parse;
pub mod validate;

use cart_csvs::{CartParser, Schema};
use std::path::Path;

use crate::error::CliResult;

/// Parser for the default cart schema, or for the YAML schema at `schema`
pub fn build_parser(schema: Option<&Path>) -> CliResult<CartParser> {
    let parser = CartParser::new();
    match schema {
        Some(path) => {
            tracing::debug!("Loading schema from {}", path.display());
            Ok(parser.with_schema(Schema::from_yaml_file(path)?))
        }
        None => Ok(parser),
    }
}
