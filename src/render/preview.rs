//! Conversion preview with statistics.

use serde::{Deserialize, Serialize};

use crate::grid;
use crate::model::{Block, Document};
use crate::parser::SheetParser;

use super::text::to_text;

/// Result of converting plain text, including what the sheet would look like
/// when written back out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionPreview {
    /// The text that was parsed
    pub original: String,

    /// The parsed document
    pub document: Document,

    /// The document rendered back to plain text
    pub plain_text: String,

    /// Validation warnings for the document
    pub warnings: Vec<String>,

    /// Sheet statistics
    pub stats: SheetStats,
}

impl ConversionPreview {
    /// Whether the parsed document passed validation.
    pub fn is_valid(&self) -> bool {
        self.document.is_valid()
    }
}

/// Statistics about a document's use of the sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetStats {
    /// Total number of blocks
    pub total_blocks: usize,

    /// Number of text blocks
    pub text_blocks: usize,

    /// Number of table blocks
    pub table_blocks: usize,

    /// Number of drawing blocks
    pub drawing_blocks: usize,

    /// Highest occupied line
    pub total_lines: u32,

    /// Pages the content reaches into
    pub pages_used: u32,

    /// Text lines wider than one grid line
    pub overflowing_lines: usize,
}

impl SheetStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self {
            total_blocks: doc.block_count(),
            total_lines: doc.total_lines,
            pages_used: doc.pages_used(),
            ..Self::default()
        };

        for block in &doc.blocks {
            match block {
                Block::Text(text) => {
                    stats.text_blocks += 1;
                    stats.overflowing_lines +=
                        text.lines.iter().filter(|line| !grid::fits_line(line)).count();
                }
                Block::Table(_) => stats.table_blocks += 1,
                Block::Drawing(_) => stats.drawing_blocks += 1,
            }
        }

        stats
    }

    /// Fraction of the sheet's lines in use, from 0.0 to 1.0.
    pub fn fill_ratio(&self) -> f64 {
        f64::from(self.total_lines.min(grid::MAX_LINES)) / f64::from(grid::MAX_LINES)
    }
}

/// Parse `text` and report what the resulting sheet looks like.
pub fn preview(text: &str) -> ConversionPreview {
    let document = SheetParser::new().parse_lenient(text);
    let plain_text = to_text(&document);
    let stats = SheetStats::from_document(&document);

    ConversionPreview {
        original: text.to_string(),
        warnings: document.metadata.validation_warnings.clone(),
        plain_text,
        stats,
        document,
    }
}
