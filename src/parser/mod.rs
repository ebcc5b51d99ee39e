//! Plain-text parsing module.

mod options;
mod sheet_parser;
mod table;

pub use options::{ErrorMode, ParseOptions};
pub use sheet_parser::SheetParser;
pub use table::{is_table_line, split_row, table_run_len, MalformedRow, ParsedTable, PipeTableReader};
