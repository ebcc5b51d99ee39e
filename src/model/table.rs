//! Table blocks.

use serde::{Deserialize, Serialize};

use super::{end_line, fresh_id, BlockKind};
use crate::grid::MAX_CELLS_PER_LINE;

/// A table: one header line followed by one line per data row.
///
/// Shape is not checked on construction; a provisional table with ragged rows
/// or too many columns is representable and reported by the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableBlock {
    /// Block identifier
    pub id: String,

    /// First line occupied (the header line)
    pub line_start: u32,

    /// Last line occupied
    pub line_end: u32,

    /// Header cells
    pub headers: Vec<String>,

    /// Data rows, each expected to have one cell per header
    pub rows: Vec<Vec<String>>,

    /// Width of each column in character cells
    pub column_widths: Vec<u32>,
}

impl TableBlock {
    /// Create a table with a fresh id; `line_end` is `line_start + rows`.
    pub fn new<S, R, C>(
        headers: impl IntoIterator<Item = S>,
        rows: R,
        column_widths: impl IntoIterator<Item = u32>,
        line_start: u32,
    ) -> Self
    where
        S: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let headers = headers.into_iter().map(Into::into).collect();
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self {
            id: fresh_id(BlockKind::Table),
            line_start,
            line_end: end_line(line_start, rows.len() + 1),
            headers,
            rows,
            column_widths: column_widths.into_iter().collect(),
        }
    }

    /// Replace the generated id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Number of columns, taken from the header.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all column widths, saturating at `u32::MAX`.
    pub fn total_width(&self) -> u32 {
        self.column_widths
            .iter()
            .fold(0u32, |total, &width| total.saturating_add(width))
    }

    /// Split the full line budget evenly across `column_count` columns.
    ///
    /// The first `MAX_CELLS_PER_LINE % column_count` columns get one extra
    /// cell, so the widths always sum to exactly `MAX_CELLS_PER_LINE`.
    pub fn even_column_widths(column_count: usize) -> Vec<u32> {
        if column_count == 0 {
            return Vec::new();
        }
        let count = u32::try_from(column_count).unwrap_or(u32::MAX);
        let base = MAX_CELLS_PER_LINE / count;
        let remainder = (MAX_CELLS_PER_LINE % count) as usize;
        (0..column_count)
            .map(|i| if i < remainder { base + 1 } else { base })
            .collect()
    }
}
