//! JSON rendering and loading for answer sheets.

use crate::error::Result;
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc)?,
        JsonFormat::Compact => serde_json::to_string(doc)?,
    };
    Ok(json)
}

/// Load a document from JSON and validate it.
///
/// The metadata in the payload is discarded and recomputed. `totalLines` is
/// kept as declared, so a producer that got it wrong is caught by validation.
pub fn from_json(json: &str) -> Result<Document> {
    let doc: Document = serde_json::from_str(json)?;
    log::debug!(
        "loaded document with {} blocks, {} declared lines",
        doc.block_count(),
        doc.total_lines
    );
    Ok(doc.revalidated())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    fn sample() -> Document {
        Document::from_blocks(
            vec![
                Block::text(["hello"], 1),
                Block::table(["a", "b"], vec![vec!["1", "2"]], [10, 10], 2),
            ],
            None,
        )
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"totalLines\": 3"));
        assert!(json.contains("\"columnWidths\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
        assert!(json.contains("\"type\":\"table\""));
    }

    #[test]
    fn test_from_json_round_trip() {
        let doc = sample();
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert_eq!(from_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_from_json_replaces_claimed_metadata() {
        let json = r#"{
            "blocks": [
                {"type": "text", "id": "t1", "lineStart": 1, "lineEnd": 3, "lines": ["a", "b", "c"]},
                {"type": "text", "id": "t2", "lineStart": 3, "lineEnd": 5, "lines": ["d", "e", "f"]}
            ],
            "totalLines": 5,
            "metadata": {"isValid": true, "validationErrors": [], "validationWarnings": []}
        }"#;
        let doc = from_json(json).unwrap();
        assert!(!doc.metadata.is_valid);
        assert!(doc.metadata.validation_errors.iter().any(|e| e.contains("Line 3")));
    }

    #[test]
    fn test_from_json_rejects_unknown_type() {
        let json = r#"{"blocks": [{"type": "chart", "id": "c", "lineStart": 1, "lineEnd": 1}],
            "totalLines": 1, "metadata": {"isValid": true, "validationErrors": [], "validationWarnings": []}}"#;
        assert!(matches!(from_json(json), Err(crate::Error::Json(_))));
    }
}
