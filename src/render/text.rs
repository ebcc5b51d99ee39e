//! Plain text rendering for answer sheets.

use crate::model::{Block, Document, TableBlock};

/// Convert a document back to the plain-text form the parser reads.
///
/// Text lines are emitted verbatim. Tables get a header row, a synthesized
/// `---` separator and their data rows. Drawings have no text form and are
/// skipped.
pub fn to_text(doc: &Document) -> String {
    let mut output: Vec<String> = Vec::new();

    for block in &doc.blocks {
        match block {
            Block::Text(text) => output.extend(text.lines.iter().cloned()),
            Block::Table(table) => push_table(&mut output, table),
            Block::Drawing(_) => {}
        }
    }

    output.join("\n")
}

fn push_table(output: &mut Vec<String>, table: &TableBlock) {
    output.push(pipe_row(&table.headers));
    output.push(pipe_row(&vec!["---"; table.headers.len()]));
    for row in &table.rows {
        output.push(pipe_row(row));
    }
}

fn pipe_row<S: AsRef<str>>(cells: &[S]) -> String {
    let cells: Vec<&str> = cells.iter().map(AsRef::as_ref).collect();
    format!("| {} |", cells.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_mixed() {
        let doc = Document::from_blocks(
            vec![
                Block::text(["first", ""], 1),
                Block::table(["a", "b"], vec![vec!["1", "2"]], [10, 10], 3),
                Block::drawing(4, 5),
                Block::text(["last"], 9),
            ],
            None,
        );

        assert_eq!(
            to_text(&doc),
            "first\n\n| a | b |\n| --- | --- |\n| 1 | 2 |\nlast"
        );
    }

    #[test]
    fn test_to_text_empty_document() {
        assert_eq!(to_text(&Document::new()), "");
    }

    #[test]
    fn test_table_without_rows() {
        let doc = Document::from_blocks(
            vec![Block::table(["x"], Vec::<Vec<String>>::new(), [20], 1)],
            None,
        );
        assert_eq!(to_text(&doc), "| x |\n| --- |");
    }
}
