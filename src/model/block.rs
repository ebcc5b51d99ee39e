//! Positioned content blocks.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{end_line, fresh_id, TableBlock};
use crate::grid;

/// Discriminator of the three block variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// A run of text lines
    Text,
    /// A table with a header line and data rows
    Table,
    /// A freehand diagram
    Drawing,
}

impl BlockKind {
    /// Lowercase name used in ids and in the `type` tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Table => "table",
            BlockKind::Drawing => "drawing",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content block occupying the contiguous lines `line_start..=line_end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    /// Free text
    Text(TextBlock),

    /// Tabular data
    Table(TableBlock),

    /// Vector drawing
    Drawing(DrawingBlock),
}

impl Block {
    /// Create a text block starting at `line_start`.
    pub fn text<S: Into<String>>(lines: impl IntoIterator<Item = S>, line_start: u32) -> Self {
        Block::Text(TextBlock::new(lines, line_start))
    }

    /// Create a table block starting at `line_start`.
    pub fn table<S, R, C>(
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
        Block::Table(TableBlock::new(headers, rows, column_widths, line_start))
    }

    /// Create an empty drawing block `line_count` lines tall.
    pub fn drawing(line_count: u32, line_start: u32) -> Self {
        Block::Drawing(DrawingBlock::new(line_count, line_start))
    }

    /// Block identifier.
    pub fn id(&self) -> &str {
        match self {
            Block::Text(b) => &b.id,
            Block::Table(b) => &b.id,
            Block::Drawing(b) => &b.id,
        }
    }

    /// Variant of this block.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Text(_) => BlockKind::Text,
            Block::Table(_) => BlockKind::Table,
            Block::Drawing(_) => BlockKind::Drawing,
        }
    }

    /// First line occupied (1-indexed).
    pub fn line_start(&self) -> u32 {
        match self {
            Block::Text(b) => b.line_start,
            Block::Table(b) => b.line_start,
            Block::Drawing(b) => b.line_start,
        }
    }

    /// Last line occupied (inclusive).
    pub fn line_end(&self) -> u32 {
        match self {
            Block::Text(b) => b.line_end,
            Block::Table(b) => b.line_end,
            Block::Drawing(b) => b.line_end,
        }
    }

    /// Occupied line numbers.
    pub fn lines(&self) -> RangeInclusive<u32> {
        self.line_start()..=self.line_end()
    }

    /// Number of lines occupied, 0 for an inverted range.
    pub fn height(&self) -> u32 {
        if self.line_end() < self.line_start() {
            0
        } else {
            self.line_end() - self.line_start() + 1
        }
    }

    /// Whether the block starts and ends on different pages.
    pub fn crosses_pages(&self) -> bool {
        grid::crosses_pages(self.line_start(), self.line_end())
    }

    /// Move the block so it starts at `line_start`, keeping its span.
    pub fn moved_to(mut self, line_start: u32) -> Self {
        let span = self.line_end().saturating_sub(self.line_start());
        let (start, end) = self.position_mut();
        *start = line_start;
        *end = line_start.saturating_add(span);
        self
    }

    fn position_mut(&mut self) -> (&mut u32, &mut u32) {
        match self {
            Block::Text(b) => (&mut b.line_start, &mut b.line_end),
            Block::Table(b) => (&mut b.line_start, &mut b.line_end),
            Block::Drawing(b) => (&mut b.line_start, &mut b.line_end),
        }
    }

    /// Check if this block is a text block.
    pub fn is_text(&self) -> bool {
        matches!(self, Block::Text(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Check if this block is a drawing.
    pub fn is_drawing(&self) -> bool {
        matches!(self, Block::Drawing(_))
    }

    /// Borrow the text variant.
    pub fn as_text(&self) -> Option<&TextBlock> {
        match self {
            Block::Text(b) => Some(b),
            _ => None,
        }
    }

    /// Borrow the table variant.
    pub fn as_table(&self) -> Option<&TableBlock> {
        match self {
            Block::Table(b) => Some(b),
            _ => None,
        }
    }

    /// Borrow the drawing variant.
    pub fn as_drawing(&self) -> Option<&DrawingBlock> {
        match self {
            Block::Drawing(b) => Some(b),
            _ => None,
        }
    }
}

impl From<TextBlock> for Block {
    fn from(block: TextBlock) -> Self {
        Block::Text(block)
    }
}

impl From<TableBlock> for Block {
    fn from(block: TableBlock) -> Self {
        Block::Table(block)
    }
}

impl From<DrawingBlock> for Block {
    fn from(block: DrawingBlock) -> Self {
        Block::Drawing(block)
    }
}

/// A run of text, one string per grid line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    /// Block identifier
    pub id: String,

    /// First line occupied
    pub line_start: u32,

    /// Last line occupied
    pub line_end: u32,

    /// Line contents; blank strings still occupy a row
    pub lines: Vec<String>,
}

impl TextBlock {
    /// Create a text block with a fresh id; `line_end` follows from the line count.
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>, line_start: u32) -> Self {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self {
            id: fresh_id(BlockKind::Text),
            line_start,
            line_end: end_line(line_start, lines.len()),
            lines,
        }
    }

    /// Replace the generated id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Number of text lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// A diagram whose scene data is carried through untouched.
///
/// The height is chosen by the caller and never derived from the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingBlock {
    /// Block identifier
    pub id: String,

    /// First line occupied
    pub line_start: u32,

    /// Last line occupied
    pub line_end: u32,

    /// Opaque vector scene (element list and canvas state)
    #[serde(default = "DrawingBlock::empty_scene")]
    pub scene: Value,

    /// Rendered preview image, typically base64 encoded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl DrawingBlock {
    /// Create a drawing `line_count` lines tall with an empty scene.
    pub fn new(line_count: u32, line_start: u32) -> Self {
        Self::with_scene(line_count, line_start, Self::empty_scene())
    }

    /// Create a drawing `line_count` lines tall with the given scene.
    pub fn with_scene(line_count: u32, line_start: u32, scene: Value) -> Self {
        Self {
            id: fresh_id(BlockKind::Drawing),
            line_start,
            line_end: end_line(line_start, line_count as usize),
            scene,
            thumbnail: None,
        }
    }

    /// Replace the generated id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Attach a rendered thumbnail.
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// The scene used when none is supplied.
    pub fn empty_scene() -> Value {
        json!({ "elements": [], "appState": {} })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_block_derives_end() {
        let block = TextBlock::new(["hello", "", "world"], 4);
        assert_eq!(block.line_start, 4);
        assert_eq!(block.line_end, 6);
        assert_eq!(block.line_count(), 3);
        assert!(block.id.starts_with("text-"));
    }

    #[test]
    fn test_drawing_block_defaults() {
        let block = DrawingBlock::new(8, 10);
        assert_eq!(block.line_end, 17);
        assert_eq!(block.scene, DrawingBlock::empty_scene());
        assert!(block.thumbnail.is_none());
    }

    #[test]
    fn test_drawing_block_with_scene() {
        let scene = json!({ "elements": [{ "type": "rectangle" }] });
        let block = DrawingBlock::with_scene(2, 1, scene.clone()).with_thumbnail("data");
        assert_eq!(block.scene, scene);
        assert_eq!(block.thumbnail.as_deref(), Some("data"));
        assert_eq!(block.line_end, 2);
    }

    #[test]
    fn test_block_accessors() {
        let block = Block::text(["a", "b"], 21);
        assert_eq!(block.kind(), BlockKind::Text);
        assert_eq!(block.lines(), 21..=22);
        assert_eq!(block.height(), 2);
        assert!(!block.crosses_pages());
        assert!(block.is_text());
        assert!(block.as_table().is_none());

        let block = Block::text(["a", "b"], 22);
        assert!(block.crosses_pages());
    }

    #[test]
    fn test_moved_to_keeps_span() {
        let block = Block::drawing(5, 3).moved_to(10);
        assert_eq!(block.line_start(), 10);
        assert_eq!(block.line_end(), 14);
        assert_eq!(block.height(), 5);
    }

    #[test]
    fn test_inverted_range_height() {
        let block = Block::text(Vec::<String>::new(), 5);
        assert_eq!(block.line_end(), 4);
        assert_eq!(block.height(), 0);
    }

    #[test]
    fn test_block_serde_tag() {
        let block = Block::Text(TextBlock::new(["x"], 1).with_id("t1"));
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["lineStart"], 1);
        assert_eq!(json["lineEnd"], 1);
        assert_eq!(json["id"], "t1");
    }

    #[test]
    fn test_drawing_deserialize_without_scene() {
        let json = r#"{"type":"drawing","id":"d1","lineStart":1,"lineEnd":4}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        let drawing = block.as_drawing().unwrap();
        assert_eq!(drawing.scene, DrawingBlock::empty_scene());
        assert_eq!(block.height(), 4);
    }
}
