//! Editor operations on documents.
//!
//! Edits never modify a document in place. [`Document::apply`] copies the
//! block list, changes the copy, and builds a fresh [`Document`] whose
//! validation metadata is recomputed from scratch.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{
    end_line, Block, BlockKind, Document, DrawingBlock, LeftMarginItem, TableBlock, TextBlock,
};

/// Height of a drawing created by converting another block.
pub const DEFAULT_DRAWING_HEIGHT: u32 = 8;

/// Headers of a table created by converting another block.
pub const DEFAULT_TABLE_HEADERS: [&str; 3] = ["항목", "내용", "비고"];

/// Column widths of a table created by converting another block.
pub const DEFAULT_TABLE_WIDTHS: [u32; 3] = [6, 8, 5];

/// A single change requested by an editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DocumentEdit {
    /// Replace a text block's lines; its end line follows the new count.
    SetTextLines { block_id: String, lines: Vec<String> },

    /// Replace a table's cells; its end line follows the new row count.
    SetTableContent {
        block_id: String,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },

    /// Replace a table's cells and column widths (adding or removing rows or columns).
    SetTableStructure {
        block_id: String,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        column_widths: Vec<u32>,
    },

    /// Replace a drawing's scene; the height is unchanged.
    SetDrawingScene { block_id: String, scene: Value },

    /// Change a drawing's height in lines.
    ResizeDrawing { block_id: String, height: u32 },

    /// Insert a block after the given line and reflow the blocks that follow.
    InsertBlock { after_line: u32, block: Block },

    /// Remove a block, leaving its lines empty.
    RemoveBlock { block_id: String },

    /// Replace a block with an empty block of another kind and reflow.
    ConvertBlock { block_id: String, kind: BlockKind },

    /// Replace the gutter annotations.
    SetLeftMargin { items: Vec<LeftMarginItem> },
}

impl Document {
    /// Apply an edit, producing a new revalidated document.
    pub fn apply(&self, edit: DocumentEdit) -> Result<Document> {
        let mut blocks = self.blocks.clone();
        let mut left_margin = self.left_margin.clone();

        match edit {
            DocumentEdit::SetTextLines { block_id, lines } => {
                let text = text_mut(&mut blocks, &block_id)?;
                text.line_end = end_line(text.line_start, lines.len());
                text.lines = lines;
            }
            DocumentEdit::SetTableContent {
                block_id,
                headers,
                rows,
            } => {
                let table = table_mut(&mut blocks, &block_id)?;
                table.line_end = end_line(table.line_start, rows.len() + 1);
                table.headers = headers;
                table.rows = rows;
            }
            DocumentEdit::SetTableStructure {
                block_id,
                headers,
                rows,
                column_widths,
            } => {
                let table = table_mut(&mut blocks, &block_id)?;
                table.line_end = end_line(table.line_start, rows.len() + 1);
                table.headers = headers;
                table.rows = rows;
                table.column_widths = column_widths;
            }
            DocumentEdit::SetDrawingScene { block_id, scene } => {
                drawing_mut(&mut blocks, &block_id)?.scene = scene;
            }
            DocumentEdit::ResizeDrawing { block_id, height } => {
                let drawing = drawing_mut(&mut blocks, &block_id)?;
                drawing.line_end = end_line(drawing.line_start, height as usize);
            }
            DocumentEdit::InsertBlock { after_line, block } => {
                insert_block(&mut blocks, self.total_lines, after_line, block);
            }
            DocumentEdit::RemoveBlock { block_id } => {
                let index = find(&blocks, &block_id)?;
                blocks.remove(index);
            }
            DocumentEdit::ConvertBlock { block_id, kind } => {
                let index = find(&blocks, &block_id)?;
                if blocks[index].kind() != kind {
                    blocks[index] = default_block(kind, blocks[index].line_start());
                    reflow_after(&mut blocks, index);
                }
            }
            DocumentEdit::SetLeftMargin { items } => {
                left_margin = Some(items);
            }
        }

        Ok(Document::from_blocks(blocks, left_margin))
    }

    /// Apply several edits in order, stopping at the first failure.
    pub fn apply_all(&self, edits: impl IntoIterator<Item = DocumentEdit>) -> Result<Document> {
        edits
            .into_iter()
            .try_fold(self.clone(), |doc, edit| doc.apply(edit))
    }
}

fn find(blocks: &[Block], block_id: &str) -> Result<usize> {
    blocks
        .iter()
        .position(|b| b.id() == block_id)
        .ok_or_else(|| Error::BlockNotFound(block_id.to_string()))
}

fn kind_mismatch(block: &Block, expected: BlockKind) -> Error {
    Error::BlockKindMismatch {
        block_id: block.id().to_string(),
        expected,
        found: block.kind(),
    }
}

fn text_mut<'a>(blocks: &'a mut [Block], block_id: &str) -> Result<&'a mut TextBlock> {
    let index = find(blocks, block_id)?;
    match &mut blocks[index] {
        Block::Text(text) => Ok(text),
        other => Err(kind_mismatch(other, BlockKind::Text)),
    }
}

fn table_mut<'a>(blocks: &'a mut [Block], block_id: &str) -> Result<&'a mut TableBlock> {
    let index = find(blocks, block_id)?;
    match &mut blocks[index] {
        Block::Table(table) => Ok(table),
        other => Err(kind_mismatch(other, BlockKind::Table)),
    }
}

fn drawing_mut<'a>(blocks: &'a mut [Block], block_id: &str) -> Result<&'a mut DrawingBlock> {
    let index = find(blocks, block_id)?;
    match &mut blocks[index] {
        Block::Drawing(drawing) => Ok(drawing),
        other => Err(kind_mismatch(other, BlockKind::Drawing)),
    }
}

/// Place `block` after `after_line` and shift everything stored after it.
fn insert_block(blocks: &mut Vec<Block>, total_lines: u32, after_line: u32, block: Block) {
    if after_line == 0 {
        blocks.insert(0, block.moved_to(1));
        reflow_after(blocks, 0);
        return;
    }

    match blocks.iter().position(|b| b.line_end() >= after_line) {
        Some(index) => {
            let line_start = blocks[index].line_end().saturating_add(1);
            blocks.insert(index + 1, block.moved_to(line_start));
            reflow_after(blocks, index + 1);
        }
        None => {
            let line_start = total_lines.saturating_add(1);
            blocks.push(block.moved_to(line_start));
        }
    }
}

/// Restack every block after `index` directly below its predecessor, keeping heights.
fn reflow_after(blocks: &mut [Block], index: usize) {
    for i in index + 1..blocks.len() {
        let line_start = blocks[i - 1].line_end().saturating_add(1);
        let moved = blocks[i].clone().moved_to(line_start);
        blocks[i] = moved;
    }
}

/// The empty block an editor shows after converting to `kind`.
fn default_block(kind: BlockKind, line_start: u32) -> Block {
    match kind {
        BlockKind::Text => Block::text([""], line_start),
        BlockKind::Table => Block::table(
            DEFAULT_TABLE_HEADERS,
            [["", "", ""], ["", "", ""]],
            DEFAULT_TABLE_WIDTHS,
            line_start,
        ),
        BlockKind::Drawing => Block::drawing(DEFAULT_DRAWING_HEIGHT, line_start),
    }
}
