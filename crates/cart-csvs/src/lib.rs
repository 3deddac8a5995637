/*!
# Cart CSV Parsing

Schema-driven reader for shopping cart CSV files. Raw text is validated against
a declared column [`Schema`], converted into [`LineItem`]s and totalled.

## Cart CSV (`cart.csv`)
Default columns:
- `Product name` → `name`: non-blank text
- `Price` → `price`: number, zero or greater
- `Quantity` → `quantity`: number, zero or greater

Cells are separated by plain commas. Quoting, escaping and multi-line cells are
not supported. Blank lines and surrounding whitespace are ignored.

## Validation

[`CartParser::validate`] never stops at the first problem. It returns every
`header`, `row` and `cell` [`ValidationError`] found in one pass. A row with the
wrong number of cells gets a single `row` error and its cells are not checked.

[`CartParser::parse`] refuses to convert anything unless validation comes back
clean, failing with [`CartError::ValidationFailed`] ("Validation failed!").

## Usage

```rust,no_run
use cart_csvs::{CartParser, CartResult};

fn example() -> CartResult<()> {
    let parser = CartParser::new();

    let result = parser.parse("samples/cart.csv")?;
    for item in &result.items {
        println!("{} x{:?} @ {:?}", item.name().unwrap_or("?"), item.quantity(), item.price());
    }
    println!("total: {}", result.total);

    Ok(())
}
```
*/

pub mod cells;
pub mod errors;
pub mod export;
pub mod parser;
pub mod records;
pub mod schemas;
pub mod sources;
pub mod totals;
pub mod validation;

// Re-export main types for convenience
pub use cells::{validate_cell, CellValue};
pub use errors::{CartError, CartResult};
pub use export::{to_json_pretty, write_items_csv, write_items_csv_to};
pub use parser::{CartParser, ParseResult};
pub use records::{parse_line, LineItem, Record};
pub use schemas::{Column, ColumnType, Schema, CART_CSV_HEADERS, CART_CSV_KEYS};
pub use sources::{FsReader, IdGenerator, SequentialIds, SourceReader, UuidIds};
pub use totals::{calc_total, round_total};
pub use validation::{validate_text, ErrorKind, ValidationError};
