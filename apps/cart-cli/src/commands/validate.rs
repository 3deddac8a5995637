use crate::commands::build_parser;
use crate::error::{CliError, CliResult};
use cart_csvs::{FsReader, SourceReader, ValidationError};
use std::path::PathBuf;

/// Report every structural problem in a cart file
pub fn execute(file: PathBuf, schema: Option<PathBuf>) -> CliResult<()> {
    let parser = build_parser(schema.as_deref())?;
    let text = FsReader.read_source(&file)?;

    let errors = parser.validate(&text);
    if errors.is_empty() {
        println!("{}: OK", file.display());
        return Ok(());
    }

    print_errors(&errors);
    Err(CliError::InvalidCart {
        file: file.display().to_string(),
        count: errors.len(),
    })
}

pub fn print_errors(errors: &[ValidationError]) {
    for error in errors {
        println!("{}", error);
    }
}
