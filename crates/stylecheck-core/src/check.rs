//! Check orchestration: the engine entry point.

use crate::conformance::{analyze_substyle, check_style, classify, in_use_substyles};
use crate::core_types::RunId;
use crate::errors::{CheckError, Result};
use crate::index::StyleIndex;
use crate::model::paragraph::text_preview;
use crate::model::{Paragraph, Style, Substyle};
use crate::report::{ConformanceReport, ParagraphReport};
use crate::{log_op_end, log_op_error, log_op_start};
use std::collections::BTreeMap;

/// Default number of characters shown from each paragraph's text
pub const DEFAULT_PREVIEW_LEN: usize = 30;

/// Explicit configuration for a check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Characters of paragraph text carried into the report
    pub preview_len: usize,
    /// Correlation id for the run; generated when absent
    pub run_id: Option<RunId>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            preview_len: DEFAULT_PREVIEW_LEN,
            run_id: None,
        }
    }
}

impl CheckOptions {
    pub fn with_preview_len(mut self, preview_len: usize) -> Self {
        self.preview_len = preview_len;
        self
    }

    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }
}

/// Check `paragraphs` against the given styles and substyles.
///
/// The style index is built first, so every configuration error is
/// returned before any paragraph is diffed. Findings (diffs, unused
/// substyles, list mismatches) never fail the call; they are recorded in
/// the returned report.
///
/// # Errors
///
/// Returns a configuration `CheckError` when the specification does not fit
/// the document, and `Internal` when a paragraph's `index` does not match
/// its position in `paragraphs`.
pub fn check_document(
    styles: Vec<Style>,
    substyles: Vec<Substyle>,
    paragraphs: &[Paragraph],
    options: &CheckOptions,
) -> Result<ConformanceReport> {
    let run_id = options.run_id.clone().unwrap_or_default();
    log_op_start!(
        "check_document",
        run_id = run_id.as_str(),
        style_count = styles.len(),
        substyle_count = substyles.len(),
        paragraph_count = paragraphs.len()
    );
    let start = std::time::Instant::now();

    let result = check_document_impl(styles, substyles, paragraphs, options, run_id.clone())
        .map_err(|e| {
            log_op_error!(
                "check_document",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                run_id = run_id.as_str()
            );
            e
        })?;

    log_op_end!(
        "check_document",
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = run_id.as_str(),
        paragraphs_checked = result.summary.paragraphs_checked,
        clean = result.is_clean()
    );

    Ok(result)
}

fn check_document_impl(
    styles: Vec<Style>,
    substyles: Vec<Substyle>,
    paragraphs: &[Paragraph],
    options: &CheckOptions,
    run_id: RunId,
) -> Result<ConformanceReport> {
    if let Some((position, paragraph)) = paragraphs
        .iter()
        .enumerate()
        .find(|(position, p)| p.index != *position)
    {
        return Err(CheckError::Internal {
            message: format!(
                "paragraph at position {} carries index {}",
                position, paragraph.index
            ),
        });
    }

    let index = StyleIndex::build(styles, substyles, paragraphs.len())?;

    let mut reports = BTreeMap::new();
    for style in index.styles() {
        for conformance in check_style(style, &index, paragraphs) {
            let paragraph = &paragraphs[conformance.index];
            let report = ParagraphReport {
                number: paragraph.number(),
                style: style.name.clone(),
                text: paragraph
                    .text
                    .as_deref()
                    .map(|t| text_preview(t, options.preview_len)),
                paragraph_diff: conformance.paragraph_diff,
                run_diffs: conformance.run_diffs,
                suppressed: conformance.suppressed,
                list: classify(style.list, paragraph.list),
                substyles_in_use: in_use_substyles(&index, paragraph),
            };
            reports.insert(report.number, report);
        }
    }

    let mut usage = Vec::new();
    for substyle in index.substyles() {
        for verdict in analyze_substyle(substyle, paragraphs) {
            if !verdict.in_use {
                tracing::warn!(
                    run_id = run_id.as_str(),
                    substyle = %verdict.substyle,
                    paragraph = verdict.paragraph,
                    "substyle not in use"
                );
            }
            usage.push(verdict);
        }
    }

    Ok(ConformanceReport::new(run_id, reports, usage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListKind, PropertySet};

    #[test]
    fn test_default_options() {
        let options = CheckOptions::default();
        assert_eq!(options.preview_len, 30);
        assert!(options.run_id.is_none());
    }

    #[test]
    fn test_run_id_is_carried_into_report() {
        let run_id = RunId::from_string("run-1".to_string());
        let report = check_document(
            vec![],
            vec![],
            &[],
            &CheckOptions::default().with_run_id(run_id.clone()),
        )
        .unwrap();
        assert_eq!(report.run_id, run_id);
        assert!(report.is_clean());
    }

    #[test]
    fn test_unassigned_paragraphs_are_not_reported() {
        let styles = vec![Style::new("BODY", PropertySet::new(), PropertySet::new(), vec![1])];
        let paragraphs = vec![
            Paragraph::new(0, PropertySet::new(), vec![], ListKind::Ordered),
            Paragraph::new(1, PropertySet::new(), vec![], ListKind::None),
        ];
        let report =
            check_document(styles, vec![], &paragraphs, &CheckOptions::default()).unwrap();
        assert_eq!(report.paragraphs.keys().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_text_preview_uses_configured_length() {
        let styles = vec![Style::new("BODY", PropertySet::new(), PropertySet::new(), vec![0])];
        let paragraphs = vec![Paragraph::new(0, PropertySet::new(), vec![], ListKind::None)
            .with_text("A fairly long\nparagraph of text")];
        let report = check_document(
            styles,
            vec![],
            &paragraphs,
            &CheckOptions::default().with_preview_len(8),
        )
        .unwrap();
        assert_eq!(report.paragraph(1).unwrap().text.as_deref(), Some("A fairly"));
    }

    #[test]
    fn test_misnumbered_paragraph_is_rejected() {
        let paragraphs = vec![Paragraph::new(4, PropertySet::new(), vec![], ListKind::None)];
        let err = check_document(vec![], vec![], &paragraphs, &CheckOptions::default())
            .unwrap_err();
        assert!(matches!(err, CheckError::Internal { .. }));
    }
}
