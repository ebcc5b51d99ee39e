//! Document model types for answer-sheet content.
//!
//! This module defines the in-memory shape shared by the parser, the
//! validator, editors, and the image-to-structure pipeline. Construction is
//! cheap and accepts any data; [`crate::validate`] decides what is correct.

mod block;
mod document;
mod margin;
mod table;

pub use block::{Block, BlockKind, DrawingBlock, TextBlock};
pub use document::{Document, DocumentMetadata};
pub use margin::LeftMarginItem;
pub use table::TableBlock;

/// Line number of the last row of a block `height` lines tall starting at `line_start`.
pub(crate) fn end_line(line_start: u32, height: usize) -> u32 {
    let height = u32::try_from(height).unwrap_or(u32::MAX);
    line_start.saturating_add(height).saturating_sub(1)
}

/// A fresh, globally unique block id such as `text-67e55044-...`.
pub(crate) fn fresh_id(kind: BlockKind) -> String {
    format!("{}-{}", kind, uuid::Uuid::new_v4())
}
