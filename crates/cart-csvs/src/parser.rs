/*!
# Cart Parser

[`CartParser`] ties the pieces together: read raw text, validate it in full,
and only when it is clean convert every data line and total the cart.
*/

use crate::{
    errors::{CartError, CartResult},
    records::{parse_line, LineItem, Record},
    schemas::Schema,
    sources::{FsReader, IdGenerator, SourceReader, UuidIds},
    totals::{calc_total, round_total},
    validation::{validate_text, CartLines, ValidationError},
};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// Converted cart: every line item plus the order total rounded to 2 places
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    pub items: Vec<LineItem>,
    pub total: f64,
}

pub struct CartParser {
    schema: Schema,
    reader: Box<dyn SourceReader>,
    ids: Box<dyn IdGenerator>,
}

impl CartParser {
    /// Parser for the default cart schema reading from the filesystem
    pub fn new() -> Self {
        Self {
            schema: Schema::default(),
            reader: Box::new(FsReader),
            ids: Box::new(UuidIds),
        }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_reader(mut self, reader: impl SourceReader + 'static) -> Self {
        self.reader = Box::new(reader);
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Every structural problem in `text`, in detection order
    pub fn validate(&self, text: &str) -> Vec<ValidationError> {
        validate_text(text, &self.schema)
    }

    /// Convert one already-validated data line
    pub fn parse_line(&self, line: &str) -> Record {
        parse_line(line, &self.schema)
    }

    pub fn calc_total(&self, items: &[LineItem]) -> f64 {
        calc_total(items)
    }

    /// Read, validate and convert the cart at `path`.
    ///
    /// Read failures propagate as [`CartError::Io`]. Any structural problem
    /// fails the whole parse with [`CartError::ValidationFailed`].
    pub fn parse<P: AsRef<Path>>(&self, path: P) -> CartResult<ParseResult> {
        let path = path.as_ref();
        let text = self.reader.read_source(path)?;
        debug!(path = %path.display(), bytes = text.len(), "read cart source");

        self.parse_text(&text)
    }

    /// Validate and convert cart text that is already in memory
    pub fn parse_text(&self, text: &str) -> CartResult<ParseResult> {
        let errors = self.validate(text);
        if !errors.is_empty() {
            warn!(errors = errors.len(), "cart validation failed");
            return Err(CartError::ValidationFailed { errors });
        }

        let items: Vec<LineItem> = CartLines::split(text)
            .rows
            .into_iter()
            .map(|line| LineItem::new(self.ids.next_id(), self.parse_line(line)))
            .collect();

        let total = round_total(calc_total(&items));
        info!(items = items.len(), total, "parsed cart");

        Ok(ParseResult { items, total })
    }
}

impl Default for CartParser {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartParser")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}
