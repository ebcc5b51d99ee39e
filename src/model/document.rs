//! Document-level types.

use serde::{Deserialize, Serialize};

use super::{Block, LeftMarginItem};
use crate::grid::{self, MAX_LINES};
use crate::validate::{self, ValidationReport};

/// A complete answer sheet: positioned blocks plus optional gutter annotations.
///
/// Documents are treated as immutable snapshots. Every change goes through
/// [`Document::from_blocks`] (or [`Document::apply`](crate::edit)), which
/// recomputes `total_lines` and the validation metadata from scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Blocks in storage order (not necessarily sorted by line)
    pub blocks: Vec<Block>,

    /// Outline annotations in the left gutter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_margin: Option<Vec<LeftMarginItem>>,

    /// Highest line occupied by any block, 0 if there are none
    pub total_lines: u32,

    /// Result of the last validation pass
    pub metadata: DocumentMetadata,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::from_blocks(Vec::new(), None)
    }

    /// Build a document from blocks, deriving `total_lines` and validation metadata.
    pub fn from_blocks(blocks: Vec<Block>, left_margin: Option<Vec<LeftMarginItem>>) -> Self {
        let total_lines = Self::occupied_extent(&blocks);
        Self {
            blocks,
            left_margin,
            total_lines,
            metadata: DocumentMetadata::default(),
        }
        .revalidated()
    }

    /// Recompute the validation metadata, leaving everything else as it is.
    pub fn revalidated(mut self) -> Self {
        self.metadata = DocumentMetadata::from(&validate::validate_document(&self));
        self
    }

    /// Validate this document without touching its metadata.
    pub fn validate(&self) -> ValidationReport {
        validate::validate_document(self)
    }

    /// Whether the last validation pass found no errors.
    pub fn is_valid(&self) -> bool {
        self.metadata.is_valid
    }

    /// Highest `line_end` among `blocks`, or 0.
    pub fn occupied_extent(blocks: &[Block]) -> u32 {
        blocks.iter().map(Block::line_end).max().unwrap_or(0)
    }

    /// Find a block by id.
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id() == id)
    }

    /// Position of a block in storage order.
    pub fn block_index(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id() == id)
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Lines still free after the last occupied line.
    pub fn available_lines(&self) -> u32 {
        MAX_LINES.saturating_sub(self.total_lines)
    }

    /// Number of pages the content reaches into.
    pub fn pages_used(&self) -> u32 {
        grid::page_of(self.total_lines)
    }

    /// Gutter annotations, empty if none were supplied.
    pub fn margin_items(&self) -> &[LeftMarginItem] {
        self.left_margin.as_deref().unwrap_or(&[])
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation outcome stored alongside the blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// Whether no validation errors were found
    pub is_valid: bool,

    /// Rendered error diagnostics
    pub validation_errors: Vec<String>,

    /// Rendered warning diagnostics
    pub validation_warnings: Vec<String>,
}

impl From<&ValidationReport> for DocumentMetadata {
    fn from(report: &ValidationReport) -> Self {
        Self {
            is_valid: report.is_valid,
            validation_errors: report.errors.iter().map(ToString::to_string).collect(),
            validation_warnings: report.warnings.iter().map(ToString::to_string).collect(),
        }
    }
}
