//! Error types for gridsheet library.
//!
//! Structural problems in a document (overlaps, out-of-range blocks, table
//! shape mismatches) are not errors: they are reported as
//! [`Issue`](crate::validate::Issue)s by the validator. This type covers
//! operations that genuinely cannot produce a result.

use std::io;
use thiserror::Error;

use crate::model::BlockKind;

/// Result type alias for gridsheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting or editing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A table data row did not match the header's cell count (strict parsing only).
    #[error("Malformed table row at source line {source_line}: expected {expected} cells, found {found}")]
    MalformedTableRow {
        /// 1-indexed line in the parsed input
        source_line: usize,
        /// Cell count of the table header
        expected: usize,
        /// Cell count of the offending row
        found: usize,
    },

    /// No block with the given id exists in the document.
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    /// An edit targeted a block of a different kind.
    #[error("Block {block_id} is a {found} block, expected {expected}")]
    BlockKindMismatch {
        /// Id of the targeted block
        block_id: String,
        /// Kind the edit applies to
        expected: BlockKind,
        /// Kind of the block actually stored
        found: BlockKind,
    },
}
