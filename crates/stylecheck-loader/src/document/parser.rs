//! Document parser
//!
//! Decodes JSON or YAML, validates the schema and decomposes every style
//! string into a `PropertySet`.

use crate::document::format_v0::{DocumentParagraph, DocumentV0};
use crate::errors::{document_validation, io_error, unsupported_schema, Result};
use std::fs;
use std::path::Path;
use stylecheck_core::errors::ExError;
use stylecheck_core::{log_op_end, log_op_error, log_op_start};
use stylecheck_core::model::paragraph_number;
use stylecheck_core::{ListKind, Paragraph, PropertySet};

/// Encoding of a document file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from the file extension (`.json`, `.yaml`, `.yml`)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            _ => Err(document_validation(&format!(
                "Cannot determine document format of {}; expected .json, .yaml or .yml",
                path.display()
            ))),
        }
    }
}

/// Load and convert a document file
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, otherwise the errors of
/// [`parse_document_str`].
pub fn load_document_file(path: &Path) -> Result<Vec<Paragraph>> {
    let path_str = path.display().to_string();
    log_op_start!("load_document_file", path = path_str.as_str());
    let start = std::time::Instant::now();

    let result = DocumentFormat::from_path(path)
        .and_then(|format| {
            let content = fs::read_to_string(path).map_err(|e| io_error("document_read", e))?;
            parse_document_str(&content, format)
        })
        .map_err(|e| {
            log_op_error!(
                "load_document_file",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "load_document_file",
        duration_ms = start.elapsed().as_millis() as u64,
        paragraph_count = result.len()
    );

    Ok(result)
}

/// Parse and convert a document from a string
///
/// # Errors
///
/// - `InvalidInput` - decode errors, unknown list tags
/// - `UnsupportedSchemaVersion` - `schema_version` is not 0
/// - `MalformedStyleString` / `DuplicateProperty` - a style string cannot
///   be decomposed; the error carries the paragraph and run numbers
pub fn parse_document_str(content: &str, format: DocumentFormat) -> Result<Vec<Paragraph>> {
    let doc: DocumentV0 = match format {
        DocumentFormat::Json => serde_json::from_str(content)
            .map_err(|e| document_validation(&format!("JSON parse error: {}", e)))?,
        DocumentFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| document_validation(&format!("YAML parse error: {}", e)))?,
    };

    if doc.schema_version != 0 {
        return Err(unsupported_schema("document_parse", doc.schema_version));
    }

    doc.paragraphs
        .iter()
        .enumerate()
        .map(|(index, paragraph)| convert_paragraph(index, paragraph))
        .collect()
}

fn convert_paragraph(index: usize, source: &DocumentParagraph) -> Result<Paragraph> {
    let number = paragraph_number(index);

    let props = PropertySet::parse_style_string(&source.style)
        .map_err(|e| ExError::from(e).with_paragraph(number))?;

    let runs = source
        .runs
        .iter()
        .enumerate()
        .map(|(run, style)| {
            PropertySet::parse_style_string(style).map_err(|e| {
                ExError::from(e)
                    .with_paragraph(number)
                    .with_run(paragraph_number(run))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let list = match source.list.as_deref() {
        Some(tag) => ListKind::from_tag(tag).ok_or_else(|| {
            document_validation(&format!("Unknown list tag '{}'", tag)).with_paragraph(number)
        })?,
        None => ListKind::None,
    };

    let paragraph = Paragraph::new(index, props, runs, list);
    Ok(match &source.text {
        Some(text) => paragraph.with_text(text.as_str()),
        None => paragraph,
    })
}
