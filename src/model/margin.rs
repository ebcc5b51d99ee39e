//! Left-margin outline annotations.

use serde::{Deserialize, Serialize};

/// An outline marker (such as `문1)`, `1.`, or `1)`) placed in the gutter.
///
/// Gutter items are independent of block occupancy: any number of them may
/// share a line with a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeftMarginItem {
    /// Grid line the marker sits on
    pub line: u32,

    /// Gutter column, 1 to 3 from outermost to innermost
    pub column: u8,

    /// Marker text
    pub content: String,
}

impl LeftMarginItem {
    /// Create a new gutter item.
    pub fn new(line: u32, column: u8, content: impl Into<String>) -> Self {
        Self {
            line,
            column,
            content: content.into(),
        }
    }
}
