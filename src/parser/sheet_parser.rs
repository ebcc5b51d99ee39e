//! Plain-text answer parser.

use crate::error::{Error, Result};
use crate::grid::MAX_LINES;
use crate::model::{Block, Document, TextBlock};

use super::options::{ErrorMode, ParseOptions};
use super::table::{is_table_line, table_run_len, MalformedRow, PipeTableReader};

/// Converts delimiter-based plain text into positioned blocks.
///
/// Lines that start and end with `|` form tables; everything else is
/// collected into text runs. Output lines are assigned consecutively from
/// line 1 and input beyond the last sheet line is dropped.
pub struct SheetParser {
    options: ParseOptions,
    tables: PipeTableReader,
}

/// Blocks produced by one pass over the input.
struct Collected {
    blocks: Vec<Block>,
    dropped: Vec<MalformedRow>,
}

impl SheetParser {
    /// Create a parser with default (lenient) options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            tables: PipeTableReader::new(),
        }
    }

    /// Parse text into a validated document.
    ///
    /// In [`ErrorMode::Strict`] the first table row whose cell count differs
    /// from its header fails the parse; in lenient mode such rows are dropped.
    pub fn parse(&self, text: &str) -> Result<Document> {
        let collected = self.collect(text);
        if self.options.error_mode == ErrorMode::Strict {
            if let Some(row) = collected.dropped.first() {
                return Err(Error::MalformedTableRow {
                    source_line: row.source_line,
                    expected: row.expected,
                    found: row.found,
                });
            }
        }
        Ok(Document::from_blocks(collected.blocks, None))
    }

    /// Parse text, dropping malformed table rows regardless of the configured mode.
    pub fn parse_lenient(&self, text: &str) -> Document {
        Document::from_blocks(self.collect(text).blocks, None)
    }

    fn collect(&self, text: &str) -> Collected {
        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        let mut blocks = Vec::new();
        let mut dropped = Vec::new();
        let mut cursor: u32 = 1;
        let mut index = 0;

        while index < lines.len() && cursor <= MAX_LINES {
            if is_table_line(lines[index]) {
                let run = table_run_len(&lines[index..]);
                if run >= 2 {
                    let table = self
                        .tables
                        .read(&lines[index..index + run], index + 1, cursor);
                    log::debug!(
                        "table at line {}: {} columns, {} rows from {} source lines",
                        cursor,
                        table.block.column_count(),
                        table.block.row_count(),
                        run
                    );
                    cursor = table.block.line_end.saturating_add(1);
                    index += run;
                    dropped.extend(table.dropped);
                    blocks.push(Block::Table(table.block));
                    continue;
                }
                log::debug!(
                    "single table line at input line {} treated as text",
                    index + 1
                );
            }

            // The first line is always taken so a rejected table line lands in text.
            let line_start = cursor;
            let mut run = Vec::new();
            loop {
                run.push(lines[index].to_string());
                index += 1;
                cursor += 1;
                if index >= lines.len() || cursor > MAX_LINES || is_table_line(lines[index]) {
                    break;
                }
            }
            blocks.push(Block::Text(TextBlock::new(run, line_start)));
        }

        if index < lines.len() {
            log::debug!(
                "sheet full at line {}: {} input lines not placed",
                MAX_LINES,
                lines.len() - index
            );
        }

        Collected { blocks, dropped }
    }
}

impl Default for SheetParser {
    fn default() -> Self {
        Self::new()
    }
}
