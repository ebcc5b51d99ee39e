//! # gridsheet
//!
//! Document model for fixed-grid exam answer sheets.
//!
//! An answer sheet is a grid of 22 lines by 20 character cells per page, up
//! to three pages. Content is a flat sequence of positioned blocks (text
//! runs, tables and drawings) that must fit the physical form: no two blocks
//! on the same line, every table within the 20-cell width budget.
//!
//! ## Quick Start
//!
//! ```
//! use gridsheet::{blocks_to_plain_text, parse_to_blocks};
//!
//! let doc = parse_to_blocks("answer\n| a | b |\n| --- | --- |\n| 1 | 2 |");
//! assert!(doc.is_valid());
//! assert_eq!(doc.total_lines, 3);
//!
//! let text = blocks_to_plain_text(&doc);
//! assert!(text.starts_with("answer\n| a | b |"));
//! ```
//!
//! ## Features
//!
//! - **Block model**: text, table and drawing blocks with derived line ranges
//! - **Validation**: range, overlap and table-shape checks with precise diagnostics
//! - **Plain-text parsing**: pipe tables and text runs, laid out from line 1
//! - **Editing**: rebuild-and-replace edits that always revalidate
//! - **JSON**: camelCase wire shape shared with editors and structuring pipelines

pub mod edit;
pub mod error;
pub mod grid;
pub mod model;
pub mod parser;
pub mod render;
pub mod validate;

// Re-export commonly used types
pub use edit::DocumentEdit;
pub use error::{Error, Result};
pub use grid::{LINES_PER_PAGE, MAX_CELLS_PER_LINE, MAX_LINES, MAX_PAGES, MIN_COLUMN_WIDTH};
pub use model::{
    Block, BlockKind, Document, DocumentMetadata, DrawingBlock, LeftMarginItem, TableBlock,
    TextBlock,
};
pub use parser::{ErrorMode, ParseOptions, SheetParser};
pub use render::{ConversionPreview, JsonFormat, SheetStats};
pub use validate::{Issue, ValidationReport};

use std::io::Read;

/// Parse plain text into a validated document.
///
/// Parsing is lenient: malformed table rows are dropped and input past the
/// last sheet line is truncated. Problems that remain are reported in the
/// document's metadata, never as an error.
///
/// # Example
///
/// ```
/// use gridsheet::parse_to_blocks;
///
/// let doc = parse_to_blocks("hello\nworld");
/// let text = doc.blocks[0].as_text().unwrap();
/// assert_eq!(text.lines, vec!["hello", "world"]);
/// assert_eq!((text.line_start, text.line_end), (1, 2));
/// ```
pub fn parse_to_blocks(text: &str) -> Document {
    SheetParser::new().parse_lenient(text)
}

/// Parse plain text with custom options.
///
/// # Example
///
/// ```
/// use gridsheet::{parse_with_options, ParseOptions};
///
/// let result = parse_with_options("|a|b|\n|1|", ParseOptions::new().strict());
/// assert!(result.is_err());
/// ```
pub fn parse_with_options(text: &str, options: ParseOptions) -> Result<Document> {
    SheetParser::with_options(options).parse(text)
}

/// Parse plain text from a reader.
///
/// # Arguments
///
/// * `reader` - Any type implementing `Read` that yields UTF-8 text
///
/// # Example
///
/// ```no_run
/// use gridsheet::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("answer.txt").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    parse_reader_with_options(reader, ParseOptions::default())
}

/// Parse plain text from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Document> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_with_options(&text, options)
}

/// Render a document back to plain text. Drawings are omitted.
pub fn blocks_to_plain_text(doc: &Document) -> String {
    render::to_text(doc)
}

/// Validate a whole document.
///
/// Pure and idempotent: the document is not touched and calling this twice
/// on the same snapshot yields the same report.
pub fn validate_document(doc: &Document) -> ValidationReport {
    validate::validate_document(doc)
}

/// Validate a single block in isolation.
///
/// # Example
///
/// ```
/// use gridsheet::{validate_block, Block};
///
/// let table = Block::table(["a", "b", "c"], Vec::<Vec<String>>::new(), [10, 10, 5], 1);
/// let report = validate_block(&table);
/// assert!(!report.is_valid);
/// ```
pub fn validate_block(block: &Block) -> ValidationReport {
    validate::validate_block(block)
}

/// Serialize a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    render::to_json(doc, format)
}

/// Load a document from JSON, recomputing its validation metadata.
///
/// Use this for payloads from outside the crate, such as an
/// image-to-structure pipeline, whose claims of validity cannot be trusted.
pub fn from_json(json: &str) -> Result<Document> {
    render::from_json(json)
}

/// Parse plain text and collect statistics about the resulting sheet.
pub fn preview(text: &str) -> ConversionPreview {
    render::preview(text)
}
