//! Structural validation of blocks and documents.
//!
//! Validation is a pure function of its input: it never mutates the block or
//! document, keeps no state between calls, and always returns the full list
//! of diagnostics instead of stopping at the first problem.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::grid::{self, LEFT_MARGIN_COLUMNS, MAX_CELLS_PER_LINE, MAX_LINES, MIN_COLUMN_WIDTH};
use crate::model::{Block, Document, LeftMarginItem, TableBlock};

/// A single diagnostic produced by validation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// A block starts on line 0.
    #[error("Block {block_id} starts before line 1: {line_start}")]
    StartsBeforeFirstLine { block_id: String, line_start: u32 },

    /// A block runs past the last line of the sheet.
    #[error("Block {block_id} ends after line {max}: {line_end}", max = MAX_LINES)]
    EndsAfterLastLine { block_id: String, line_end: u32 },

    /// A block's start line is after its end line.
    #[error("Block {block_id} start line is after end line: {line_start} > {line_end}")]
    InvertedRange {
        block_id: String,
        line_start: u32,
        line_end: u32,
    },

    /// Two blocks claim the same line.
    #[error("Line {line} is used by multiple blocks")]
    LineOverlap { line: u32 },

    /// Column widths add up to more than one line.
    #[error("Table {block_id} width ({total_width}) exceeds {max} cells", max = MAX_CELLS_PER_LINE)]
    TableTooWide { block_id: String, total_width: u32 },

    /// A column is narrower than the minimum (1-indexed column).
    #[error("Table {block_id} column {column} is {width} cells wide, minimum is {min}", min = MIN_COLUMN_WIDTH)]
    ColumnTooNarrow {
        block_id: String,
        column: usize,
        width: u32,
    },

    /// The number of column widths differs from the number of headers.
    #[error("Table {block_id} has {widths} column widths for {headers} headers")]
    ColumnCountMismatch {
        block_id: String,
        widths: usize,
        headers: usize,
    },

    /// A data row has a different cell count than the header (1-indexed row).
    #[error("Table {block_id} row {row} has {cells} cells, expected {headers}")]
    RowShapeMismatch {
        block_id: String,
        row: usize,
        cells: usize,
        headers: usize,
    },

    /// The document claims more lines than the sheet has.
    #[error("Document exceeds {max} lines: {total_lines}", max = MAX_LINES)]
    DocumentTooLong { total_lines: u32 },

    /// `total_lines` disagrees with the blocks it summarizes.
    #[error("Document declares {declared} total lines but its blocks end at line {actual}")]
    TotalLinesMismatch { declared: u32, actual: u32 },

    /// A gutter item sits outside the sheet.
    #[error("Left margin item on line {line} is outside lines 1-{max}", max = MAX_LINES)]
    MarginLineOutOfRange { line: u32 },

    /// A gutter item names a column the gutter does not have.
    #[error("Left margin item on line {line} uses column {column}, expected 1-{max}", max = LEFT_MARGIN_COLUMNS)]
    MarginColumnInvalid { line: u32, column: u8 },

    /// A block is split across a physical page break.
    #[error("Block {block_id} spans pages {start_page} to {end_page}")]
    CrossesPageBoundary {
        block_id: String,
        start_page: u32,
        end_page: u32,
    },

    /// A table uses less than half of the line.
    #[error("Table {block_id} only uses {total_width} out of {max} available cells", max = MAX_CELLS_PER_LINE)]
    NarrowTable { block_id: String, total_width: u32 },
}

impl Issue {
    /// Whether this issue is advisory only.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Issue::CrossesPageBoundary { .. } | Issue::NarrowTable { .. }
        )
    }
}

/// Outcome of validating a block or a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// True when `errors` is empty
    pub is_valid: bool,

    /// Problems that make the data untrustworthy
    pub errors: Vec<Issue>,

    /// Advisory findings
    pub warnings: Vec<Issue>,
}

impl ValidationReport {
    /// Build a report from collected diagnostics.
    pub fn new(errors: Vec<Issue>, warnings: Vec<Issue>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Append another report's diagnostics after this one's.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.is_valid = self.errors.is_empty();
    }

    /// Check if the report carries no diagnostics at all.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Validate a single block's line range and, for tables, its shape.
pub fn validate_block(block: &Block) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let id = block.id();
    let (start, end) = (block.line_start(), block.line_end());

    if start < 1 {
        errors.push(Issue::StartsBeforeFirstLine {
            block_id: id.to_string(),
            line_start: start,
        });
    }
    if end > MAX_LINES {
        errors.push(Issue::EndsAfterLastLine {
            block_id: id.to_string(),
            line_end: end,
        });
    }
    if start > end {
        errors.push(Issue::InvertedRange {
            block_id: id.to_string(),
            line_start: start,
            line_end: end,
        });
    }

    if block.crosses_pages() {
        warnings.push(Issue::CrossesPageBoundary {
            block_id: id.to_string(),
            start_page: grid::page_of(start),
            end_page: grid::page_of(end),
        });
    }

    if let Block::Table(table) = block {
        check_table(table, &mut errors, &mut warnings);
    }

    log::trace!(
        "validated {} block {} ({}..={}): {} errors, {} warnings",
        block.kind(),
        id,
        start,
        end,
        errors.len(),
        warnings.len()
    );

    ValidationReport::new(errors, warnings)
}

fn check_table(table: &TableBlock, errors: &mut Vec<Issue>, warnings: &mut Vec<Issue>) {
    let total_width = table.total_width();
    if total_width > MAX_CELLS_PER_LINE {
        errors.push(Issue::TableTooWide {
            block_id: table.id.clone(),
            total_width,
        });
    }

    for (i, &width) in table.column_widths.iter().enumerate() {
        if width < MIN_COLUMN_WIDTH {
            errors.push(Issue::ColumnTooNarrow {
                block_id: table.id.clone(),
                column: i + 1,
                width,
            });
        }
    }

    if table.column_widths.len() != table.headers.len() {
        errors.push(Issue::ColumnCountMismatch {
            block_id: table.id.clone(),
            widths: table.column_widths.len(),
            headers: table.headers.len(),
        });
    }

    for (i, row) in table.rows.iter().enumerate() {
        if row.len() != table.headers.len() {
            errors.push(Issue::RowShapeMismatch {
                block_id: table.id.clone(),
                row: i + 1,
                cells: row.len(),
                headers: table.headers.len(),
            });
        }
    }

    if total_width < MAX_CELLS_PER_LINE / 2 {
        warnings.push(Issue::NarrowTable {
            block_id: table.id.clone(),
            total_width,
        });
    }
}

/// Validate a whole document: line budget, overlaps, every block, and the gutter.
///
/// Blocks are examined in storage order; no sorting by line is assumed.
pub fn validate_document(doc: &Document) -> ValidationReport {
    let mut errors = Vec::new();

    if doc.total_lines > MAX_LINES {
        errors.push(Issue::DocumentTooLong {
            total_lines: doc.total_lines,
        });
    }

    let extent = Document::occupied_extent(&doc.blocks);
    if doc.total_lines != extent {
        errors.push(Issue::TotalLinesMismatch {
            declared: doc.total_lines,
            actual: extent,
        });
    }

    // Lines outside the sheet are range errors already; only walk the grid.
    let mut occupied = HashSet::new();
    for block in &doc.blocks {
        let first = block.line_start().max(1);
        let last = block.line_end().min(MAX_LINES);
        for line in first..=last {
            if !occupied.insert(line) {
                errors.push(Issue::LineOverlap { line });
            }
        }
    }

    let mut report = ValidationReport::new(errors, Vec::new());
    for block in &doc.blocks {
        report.merge(validate_block(block));
    }

    let mut margin_errors = Vec::new();
    for item in doc.margin_items() {
        check_margin_item(item, &mut margin_errors);
    }
    report.merge(ValidationReport::new(margin_errors, Vec::new()));

    report
}

fn check_margin_item(item: &LeftMarginItem, errors: &mut Vec<Issue>) {
    if item.line < 1 || item.line > MAX_LINES {
        errors.push(Issue::MarginLineOutOfRange { line: item.line });
    }
    if item.column < 1 || item.column > LEFT_MARGIN_COLUMNS {
        errors.push(Issue::MarginColumnInvalid {
            line: item.line,
            column: item.column,
        });
    }
}
