//! Spec parser with validation
//!
//! Parses YAML, validates the schema and converts sections into core
//! `Style` and `Substyle` records. Cross-section checks (overlaps, parent
//! resolution, paragraph ranges) belong to the style index, which needs
//! the document.

use crate::errors::{io_error, section_validation, spec_validation, unsupported_schema, Result};
use crate::spec::format_v0::{PropertyDecl, SpecSection, SpecV0};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use stylecheck_core::{log_op_end, log_op_error, log_op_start};
use stylecheck_core::{ListKind, PropertySet, Style, Substyle};

/// Default section key prefix marking a substyle
pub const DEFAULT_SUBSTYLE_PREFIX: &str = "SUB-";

/// Load and convert a spec file
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, otherwise the errors of
/// [`parse_spec_str`].
pub fn load_spec_file(path: &Path, substyle_prefix: &str) -> Result<(Vec<Style>, Vec<Substyle>)> {
    let path_str = path.display().to_string();
    log_op_start!("load_spec_file", path = path_str.as_str());
    let start = std::time::Instant::now();

    let result = fs::read_to_string(path)
        .map_err(|e| io_error("spec_read", e))
        .and_then(|content| parse_spec_str(&content, substyle_prefix))
        .map_err(|e| {
            log_op_error!(
                "load_spec_file",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "load_spec_file",
        duration_ms = start.elapsed().as_millis() as u64,
        style_count = result.0.len(),
        substyle_count = result.1.len()
    );

    Ok(result)
}

/// Parse and convert a spec from a string
///
/// Sections whose name starts with `substyle_prefix` (case-insensitive)
/// become substyles; all others become styles. Both keep file order.
///
/// # Errors
///
/// - `InvalidInput` - YAML syntax or schema errors, invalid section content
/// - `UnsupportedSchemaVersion` - `schema_version` is not 0
pub fn parse_spec_str(content: &str, substyle_prefix: &str) -> Result<(Vec<Style>, Vec<Substyle>)> {
    let spec: SpecV0 = serde_yaml::from_str(content)
        .map_err(|e| spec_validation(&format!("YAML parse error: {}", e)))?;

    validate_spec(&spec, substyle_prefix)?;

    let mut styles = Vec::new();
    let mut substyles = Vec::new();
    for (name, section) in &spec.sections {
        if is_substyle(name, substyle_prefix) {
            substyles.push(convert_substyle(name, section)?);
        } else {
            styles.push(convert_style(name, section)?);
        }
    }

    tracing::debug!(
        styles = styles.len(),
        substyles = substyles.len(),
        "spec parsed"
    );

    Ok((styles, substyles))
}

fn is_substyle(name: &str, prefix: &str) -> bool {
    name.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// Validate a parsed spec
fn validate_spec(spec: &SpecV0, substyle_prefix: &str) -> Result<()> {
    if spec.schema_version != 0 {
        return Err(unsupported_schema("spec_parse", spec.schema_version));
    }

    if substyle_prefix.is_empty() {
        return Err(spec_validation("Substyle prefix must not be empty"));
    }

    let mut names = HashSet::new();
    for (name, section) in &spec.sections {
        if !names.insert(name.as_str()) {
            return Err(section_validation(
                name,
                &format!("Duplicate section: {}", name),
            ));
        }

        if section.paragraphs.is_empty() {
            return Err(section_validation(
                name,
                &format!("Section {} lists no paragraphs", name),
            ));
        }
        if let Some(n) = section.paragraphs.iter().find(|&&n| n < 1) {
            return Err(section_validation(
                name,
                &format!(
                    "Section {} references paragraph {}; paragraph numbers start at 1",
                    name, n
                ),
            ));
        }

        if is_substyle(name, substyle_prefix) {
            if section.paragraph.is_some() {
                return Err(section_validation(
                    name,
                    &format!("Substyle {} cannot declare paragraph properties", name),
                ));
            }
            if section.list.is_some() {
                return Err(section_validation(
                    name,
                    &format!("Substyle {} cannot declare a list requirement", name),
                ));
            }
        } else if section.parent.is_some() {
            return Err(section_validation(
                name,
                &format!("Style {} cannot declare a parent", name),
            ));
        }
    }

    Ok(())
}

fn convert_style(name: &str, section: &SpecSection) -> Result<Style> {
    let list = match &section.list {
        Some(tag) => ListKind::from_tag(&tag.0).ok_or_else(|| {
            section_validation(
                name,
                &format!("Unknown list kind '{}' in section {}", tag.0, name),
            )
        })?,
        None => ListKind::None,
    };

    Ok(Style::new(
        name,
        properties(name, section.paragraph.as_ref())?,
        properties(name, section.font.as_ref())?,
        paragraph_indices(&section.paragraphs),
    )
    .with_list(list))
}

fn convert_substyle(name: &str, section: &SpecSection) -> Result<Substyle> {
    let substyle = Substyle::new(
        name,
        properties(name, section.font.as_ref())?,
        paragraph_indices(&section.paragraphs),
    );
    Ok(match &section.parent {
        Some(parent) => substyle.with_parent(parent.as_str()),
        None => substyle,
    })
}

fn properties(section: &str, decl: Option<&PropertyDecl>) -> Result<PropertySet> {
    match decl {
        None => Ok(PropertySet::new()),
        Some(PropertyDecl::Map(map)) => Ok(PropertySet::from(map.clone())),
        Some(PropertyDecl::Inline(style)) => PropertySet::parse_style_string(style)
            .map_err(|e| section_validation(section, &e.to_string())),
    }
}

/// Validated 1-based numbers to 0-based indices
fn paragraph_indices(numbers: &[i64]) -> Vec<usize> {
    numbers.iter().map(|&n| (n - 1) as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylecheck_core::errors::ExErrorKind;

    const SPEC: &str = r#"
schema_version: 0
sections:
  HEADER:
    paragraph: { margin: 0 }
    font: { bold: true }
    list: ordered-list
    paragraphs: [1]
  BODY:
    paragraph: "margin: 4px; indent: 0;"
    font: { bold: false }
    paragraphs: [2, 3]
  sub-emph:
    parent: BODY
    font: { italic: true }
    paragraphs: [3]
"#;

    #[test]
    fn test_parse_styles_and_substyles() {
        let (styles, substyles) = parse_spec_str(SPEC, "SUB-").unwrap();

        assert_eq!(styles.len(), 2);
        assert_eq!(styles[0].name, "HEADER");
        assert_eq!(styles[0].paragraphs, vec![0]);
        assert_eq!(styles[0].list, ListKind::Ordered);
        assert_eq!(styles[0].paragraph_props.get("margin"), Some("0"));
        assert_eq!(styles[1].paragraph_props.get("indent"), Some("0"));
        assert_eq!(styles[1].paragraphs, vec![1, 2]);

        assert_eq!(substyles.len(), 1);
        assert_eq!(substyles[0].name, "sub-emph");
        assert_eq!(substyles[0].parent.as_deref(), Some("BODY"));
        assert_eq!(substyles[0].paragraphs, vec![2]);
    }

    #[test]
    fn test_custom_prefix_is_case_insensitive() {
        let yaml = "schema_version: 0\nsections:\n  BODY: {paragraphs: [1]}\n  X-BOLD: {font: {bold: true}, paragraphs: [1]}\n  SUB-NOT: {paragraphs: [2]}\n";
        let (styles, substyles) = parse_spec_str(yaml, "x-").unwrap();
        let style_names: Vec<&str> = styles.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(style_names, vec!["BODY", "SUB-NOT"]);
        assert_eq!(substyles.len(), 1);
        assert_eq!(substyles[0].name, "X-BOLD");
        assert!(substyles[0].parent.is_none());
    }

    #[test]
    fn test_reject_wrong_schema_version() {
        let err = parse_spec_str("schema_version: 1\nsections: {}\n", "SUB-").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::UnsupportedSchemaVersion);
    }

    #[test]
    fn test_reject_paragraph_zero() {
        let yaml = "schema_version: 0\nsections:\n  A: {paragraphs: [0]}\n";
        let err = parse_spec_str(yaml, "SUB-").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.style(), Some("A"));
    }

    #[test]
    fn test_reject_section_without_paragraphs() {
        let yaml = "schema_version: 0\nsections:\n  A: {font: {bold: true}}\n";
        assert!(parse_spec_str(yaml, "SUB-").is_err());
    }

    #[test]
    fn test_reject_substyle_paragraph_properties() {
        let yaml = "schema_version: 0\nsections:\n  SUB-X: {paragraph: {margin: 0}, paragraphs: [1]}\n";
        let err = parse_spec_str(yaml, "SUB-").unwrap_err();
        assert!(err.message().contains("cannot declare paragraph properties"));
    }

    #[test]
    fn test_reject_style_parent() {
        let yaml = "schema_version: 0\nsections:\n  A: {parent: B, paragraphs: [1]}\n";
        assert!(parse_spec_str(yaml, "SUB-").is_err());
    }

    #[test]
    fn test_reject_unknown_list_kind() {
        let yaml = "schema_version: 0\nsections:\n  A: {list: dl, paragraphs: [1]}\n";
        let err = parse_spec_str(yaml, "SUB-").unwrap_err();
        assert!(err.message().contains("Unknown list kind"));
    }

    #[test]
    fn test_reject_malformed_inline_properties() {
        let yaml = "schema_version: 0\nsections:\n  A: {font: \"bold true;\", paragraphs: [1]}\n";
        let err = parse_spec_str(yaml, "SUB-").unwrap_err();
        assert_eq!(err.op(), Some("spec_parse"));
    }

    #[test]
    fn test_default_prefix_marks_sub_sections() {
        let (styles, substyles) = parse_spec_str(SPEC, DEFAULT_SUBSTYLE_PREFIX).unwrap();
        assert_eq!(styles.len(), 2);
        assert_eq!(substyles.len(), 1);
        assert!(substyles[0].name.to_uppercase().starts_with(DEFAULT_SUBSTYLE_PREFIX));
    }

    #[test]
    fn test_reject_empty_prefix() {
        assert!(parse_spec_str(SPEC, "").is_err());
    }
}
