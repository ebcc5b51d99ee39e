//! Integration tests for editor operations.

use gridsheet::edit::{DEFAULT_DRAWING_HEIGHT, DEFAULT_TABLE_HEADERS};
use gridsheet::model::{DrawingBlock, TableBlock, TextBlock};
use gridsheet::{parse_to_blocks, Block, BlockKind, Document, DocumentEdit, Error, LeftMarginItem};
use serde_json::json;

/// Text on lines 1-3, a table on 4-6, a drawing on 7-10.
fn answer() -> Document {
    Document::from_blocks(
        vec![
            Block::Text(TextBlock::new(["정의", "설명", ""], 1).with_id("intro")),
            Block::Table(
                TableBlock::new(
                    ["구분", "내용"],
                    vec![vec!["A", "a"], vec!["B", "b"]],
                    [10, 10],
                    4,
                )
                .with_id("compare"),
            ),
            Block::Drawing(DrawingBlock::new(4, 7).with_id("diagram")),
        ],
        None,
    )
}

fn ranges(doc: &Document) -> Vec<(String, u32, u32)> {
    doc.blocks
        .iter()
        .map(|b| (b.id().to_string(), b.line_start(), b.line_end()))
        .collect()
}

#[test]
fn test_answer_fixture_is_valid() {
    let doc = answer();
    assert!(doc.is_valid());
    assert_eq!(doc.total_lines, 10);
}

#[test]
fn test_every_edit_yields_a_new_document() {
    let doc = answer();
    let edited = doc
        .apply(DocumentEdit::SetTextLines {
            block_id: "intro".into(),
            lines: vec!["한 줄".into()],
        })
        .unwrap();

    assert_eq!(doc, answer());
    assert_eq!(edited.block("intro").unwrap().line_end(), 1);
    assert_eq!(edited.total_lines, 10);
    assert!(edited.is_valid());
}

#[test]
fn test_growing_text_is_reported_not_reflowed() {
    let edited = answer()
        .apply(DocumentEdit::SetTextLines {
            block_id: "intro".into(),
            lines: vec!["1".into(), "2".into(), "3".into(), "4".into()],
        })
        .unwrap();

    assert!(!edited.is_valid());
    assert_eq!(edited.metadata.validation_errors, vec!["Line 4 is used by multiple blocks"]);
}

#[test]
fn test_add_table_row_and_column() {
    let edited = answer()
        .apply(DocumentEdit::SetTableStructure {
            block_id: "compare".into(),
            headers: vec!["구분".into(), "내용".into(), "비고".into()],
            rows: vec![vec!["A".into(), "a".into(), "".into()]],
            column_widths: vec![7, 7, 6],
        })
        .unwrap();

    let table = edited.block("compare").unwrap().as_table().unwrap();
    assert_eq!(table.column_count(), 3);
    assert_eq!(table.line_end, 5);
    assert!(edited.is_valid());
}

#[test]
fn test_insert_block_reflows_followers() {
    let edited = answer()
        .apply(DocumentEdit::InsertBlock {
            after_line: 3,
            block: Block::Text(TextBlock::new(["추가", "내용"], 1).with_id("new")),
        })
        .unwrap();

    assert_eq!(
        ranges(&edited),
        vec![
            ("intro".to_string(), 1, 3),
            ("new".to_string(), 4, 5),
            ("compare".to_string(), 6, 8),
            ("diagram".to_string(), 9, 12),
        ]
    );
    assert!(edited.is_valid());
    assert_eq!(edited.total_lines, 12);
}

#[test]
fn test_insert_in_middle_of_block_goes_after_it() {
    let edited = answer()
        .apply(DocumentEdit::InsertBlock {
            after_line: 5,
            block: Block::drawing(2, 1),
        })
        .unwrap();
    assert_eq!(edited.blocks[2].lines(), 7..=8);
    assert_eq!(edited.blocks[3].lines(), 9..=12);
}

#[test]
fn test_convert_text_to_drawing() {
    let edited = answer()
        .apply(DocumentEdit::ConvertBlock {
            block_id: "intro".into(),
            kind: BlockKind::Drawing,
        })
        .unwrap();

    let drawing = &edited.blocks[0];
    assert!(drawing.is_drawing());
    assert_eq!(drawing.height(), DEFAULT_DRAWING_HEIGHT);
    assert_eq!(edited.blocks[1].lines(), 9..=11);
    assert_eq!(edited.blocks[2].lines(), 12..=15);
    assert!(edited.is_valid());
}

#[test]
fn test_convert_drawing_to_table() {
    let edited = answer()
        .apply(DocumentEdit::ConvertBlock {
            block_id: "diagram".into(),
            kind: BlockKind::Table,
        })
        .unwrap();

    let table = edited.blocks[2].as_table().unwrap();
    assert_eq!(table.headers, DEFAULT_TABLE_HEADERS.map(String::from).to_vec());
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.line_start, 7);
    assert_eq!(table.line_end, 9);
    assert_eq!(edited.total_lines, 9);
}

#[test]
fn test_drawing_scene_is_opaque() {
    let scene = json!({"elements": [{"type": "arrow", "x": 1}], "appState": {"zoom": 2}});
    let edited = answer()
        .apply(DocumentEdit::SetDrawingScene {
            block_id: "diagram".into(),
            scene: scene.clone(),
        })
        .unwrap();
    let drawing = edited.block("diagram").unwrap().as_drawing().unwrap();
    assert_eq!(drawing.scene, scene);
    assert_eq!(drawing.line_end, 10);
}

#[test]
fn test_resize_drawing_past_sheet_is_invalid() {
    let edited = answer()
        .apply(DocumentEdit::ResizeDrawing {
            block_id: "diagram".into(),
            height: 61,
        })
        .unwrap();
    assert_eq!(edited.total_lines, 67);
    assert!(!edited.is_valid());
}

#[test]
fn test_wrong_kind_and_missing_block() {
    let doc = answer();

    let err = doc
        .apply(DocumentEdit::ResizeDrawing {
            block_id: "intro".into(),
            height: 2,
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "Block intro is a text block, expected drawing");

    let err = doc
        .apply(DocumentEdit::RemoveBlock {
            block_id: "nope".into(),
        })
        .unwrap_err();
    assert!(matches!(err, Error::BlockNotFound(id) if id == "nope"));
}

#[test]
fn test_apply_all_on_parsed_document() {
    let doc = parse_to_blocks("개요\n|a|b|\n|1|2|");
    let table_id = doc.blocks[1].id().to_string();

    let edited = doc
        .apply_all([
            DocumentEdit::RemoveBlock { block_id: table_id },
            DocumentEdit::InsertBlock {
                after_line: 1,
                block: Block::drawing(3, 1),
            },
            DocumentEdit::SetLeftMargin {
                items: vec![LeftMarginItem::new(1, 1, "1.")],
            },
        ])
        .unwrap();

    assert_eq!(edited.block_count(), 2);
    assert_eq!(edited.blocks[1].lines(), 2..=4);
    assert_eq!(edited.margin_items().len(), 1);
    assert!(edited.is_valid());
}
