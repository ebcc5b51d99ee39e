//! Pipe-delimited table recognition.
//!
//! A table in plain text is a run of consecutive lines that each start and
//! end with `|`. The first line is the header; an optional markdown
//! separator row (`|---|:--:|`) may follow it.

use regex::Regex;

use crate::model::TableBlock;

/// A data row dropped because its cell count differed from the header's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedRow {
    /// 1-indexed line in the parsed input
    pub source_line: usize,
    /// Cell count of the header
    pub expected: usize,
    /// Cell count of the row
    pub found: usize,
}

/// A table read from source lines.
#[derive(Debug, Clone)]
pub struct ParsedTable {
    /// The emitted block
    pub block: TableBlock,
    /// Rows that were left out
    pub dropped: Vec<MalformedRow>,
}

/// Whether `line`, once trimmed, starts and ends with a pipe.
pub fn is_table_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Number of consecutive table lines at the start of `lines`.
pub fn table_run_len(lines: &[&str]) -> usize {
    lines.iter().take_while(|l| is_table_line(l)).count()
}

/// Split a table line into trimmed cells.
///
/// Only the outer pipes are removed; empty cells between two pipes are kept.
pub fn split_row(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let inner = trimmed
        .strip_prefix('|')
        .and_then(|rest| rest.strip_suffix('|'))
        .unwrap_or("");
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Reads runs of table lines into [`TableBlock`]s.
pub struct PipeTableReader {
    separator_cell: Regex,
}

impl PipeTableReader {
    /// Create a new reader.
    pub fn new() -> Self {
        Self {
            separator_cell: Regex::new(r"^:?-+:?$").expect("separator cell pattern is valid"),
        }
    }

    /// Whether `line` is a cosmetic header separator such as `| --- | :-: |`.
    pub fn is_separator(&self, line: &str) -> bool {
        is_table_line(line)
            && split_row(line)
                .iter()
                .all(|cell| self.separator_cell.is_match(cell))
    }

    /// Build a table from a run of at least two table lines.
    ///
    /// `first_source_line` is the 1-indexed input line of `lines[0]` and is
    /// only used to locate dropped rows. Column widths are never read from
    /// the source: the line budget is split evenly across the header's cells.
    pub fn read(&self, lines: &[&str], first_source_line: usize, line_start: u32) -> ParsedTable {
        let headers = lines.first().map(|l| split_row(l)).unwrap_or_default();
        let data_start = match lines.get(1) {
            Some(line) if self.is_separator(line) => 2,
            _ => 1,
        };

        let mut rows = Vec::new();
        let mut dropped = Vec::new();
        for (offset, line) in lines.iter().enumerate().skip(data_start) {
            let cells = split_row(line);
            if cells.len() == headers.len() {
                rows.push(cells);
            } else {
                log::debug!(
                    "dropping table row at line {}: {} cells, header has {}",
                    first_source_line + offset,
                    cells.len(),
                    headers.len()
                );
                dropped.push(MalformedRow {
                    source_line: first_source_line + offset,
                    expected: headers.len(),
                    found: cells.len(),
                });
            }
        }

        let widths = TableBlock::even_column_widths(headers.len());
        ParsedTable {
            block: TableBlock::new(headers, rows, widths, line_start),
            dropped,
        }
    }
}

impl Default for PipeTableReader {
    fn default() -> Self {
        Self::new()
    }
}
