//! Document Format v0 schema
//!
//! The extractor's output: per paragraph, its inline style string, one
//! style string per run in reading order, and its list ancestry.

use serde::{Deserialize, Serialize};

/// Top-level document file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Paragraphs in document order
    pub paragraphs: Vec<DocumentParagraph>,
}

/// Paragraph as produced by the extractor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentParagraph {
    /// Paragraph text, if extracted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Inline paragraph style string
    #[serde(default)]
    pub style: String,

    /// Inline style string of each run
    #[serde(default)]
    pub runs: Vec<String>,

    /// List ancestry tag (`ol`, `ul`, ...); absent means none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let json = r#"{
            "schema_version": 0,
            "paragraphs": [
                { "text": "Heading", "style": "margin: 0;", "runs": ["bold: true;"], "list": "ol" },
                { "style": "" }
            ]
        }"#;

        let doc: DocumentV0 = serde_json::from_str(json).unwrap();
        assert_eq!(doc.paragraphs.len(), 2);
        assert_eq!(doc.paragraphs[0].list.as_deref(), Some("ol"));
        assert!(doc.paragraphs[1].runs.is_empty());
        assert!(doc.paragraphs[1].text.is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = r#"{"schema_version": 0, "paragraphs": [{"style": "", "colour": "red"}]}"#;
        assert!(serde_json::from_str::<DocumentV0>(json).is_err());
    }
}
