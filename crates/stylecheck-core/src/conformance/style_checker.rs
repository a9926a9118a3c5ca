//! Per-style paragraph and font conformance.

use crate::conformance::overlay::SubstyleOverlay;
use crate::diff::{diff, DiffEntry};
use crate::index::StyleIndex;
use crate::model::{Paragraph, Style};

/// Diff results for one paragraph under its style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphConformance {
    /// 0-based paragraph index
    pub index: usize,
    pub paragraph_diff: Vec<DiffEntry>,
    /// One post-suppression font diff per run, reading order
    pub run_diffs: Vec<Vec<DiffEntry>>,
    /// Font entries removed by the substyle overlay
    pub suppressed: Vec<DiffEntry>,
}

impl ParagraphConformance {
    pub fn paragraph_ok(&self) -> bool {
        self.paragraph_diff.is_empty()
    }

    pub fn font_ok(&self) -> bool {
        self.run_diffs.iter().all(Vec::is_empty)
    }
}

/// Check a single paragraph against `style`, suppressing font entries
/// sanctioned by `overlay`.
pub fn check_paragraph(
    style: &Style,
    paragraph: &Paragraph,
    overlay: &SubstyleOverlay<'_>,
) -> ParagraphConformance {
    let paragraph_diff = diff(&style.paragraph_props, &paragraph.props);

    let mut run_diffs = Vec::with_capacity(paragraph.runs.len());
    let mut suppressed = Vec::new();
    for run in &paragraph.runs {
        let (kept, dropped) = overlay.apply(diff(&style.font_props, run));
        run_diffs.push(kept);
        suppressed.extend(dropped);
    }

    ParagraphConformance {
        index: paragraph.index,
        paragraph_diff,
        run_diffs,
        suppressed,
    }
}

/// Check every paragraph assigned to `style`, in assignment order.
///
/// `paragraphs` must be the sequence the index was built against.
pub fn check_style(
    style: &Style,
    index: &StyleIndex,
    paragraphs: &[Paragraph],
) -> Vec<ParagraphConformance> {
    style
        .paragraphs
        .iter()
        .filter_map(|&i| paragraphs.get(i).map(|p| (i, p)))
        .map(|(i, paragraph)| {
            let overlay = SubstyleOverlay::new(i, index.substyles_for_paragraph(i));
            let result = check_paragraph(style, paragraph, &overlay);
            if !result.suppressed.is_empty() {
                tracing::debug!(
                    style = %style.name,
                    paragraph = i + 1,
                    suppressed = result.suppressed.len(),
                    "font entries sanctioned by substyles"
                );
            }
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListKind, PropertySet, Substyle};

    fn header() -> Style {
        Style::new(
            "HEADER",
            PropertySet::from_iter([("margin", "0")]),
            PropertySet::from_iter([("bold", "true")]),
            vec![0],
        )
    }

    fn no_overlay() -> SubstyleOverlay<'static> {
        SubstyleOverlay::new(0, Vec::<&Substyle>::new())
    }

    fn paragraph(runs: Vec<PropertySet>) -> Paragraph {
        Paragraph::new(
            0,
            PropertySet::from_iter([("margin", "0")]),
            runs,
            ListKind::None,
        )
    }

    #[test]
    fn test_extra_font_property_reported_per_run() {
        let p = paragraph(vec![PropertySet::from_iter([
            ("bold", "true"),
            ("italic", "true"),
        ])]);
        let result = check_paragraph(&header(), &p, &no_overlay());
        assert!(result.paragraph_ok());
        assert!(!result.font_ok());
        assert_eq!(result.run_diffs, vec![vec![DiffEntry::added("italic", "true")]]);
    }

    #[test]
    fn test_paragraph_and_font_verdicts_are_independent() {
        let mut p = paragraph(vec![PropertySet::from_iter([("bold", "true")])]);
        p.props = PropertySet::from_iter([("margin", "4px")]);
        let result = check_paragraph(&header(), &p, &no_overlay());
        assert!(!result.paragraph_ok());
        assert!(result.font_ok());
    }

    #[test]
    fn test_paragraph_without_runs_is_font_ok() {
        let result = check_paragraph(&header(), &paragraph(vec![]), &no_overlay());
        assert!(result.font_ok());
        assert!(result.run_diffs.is_empty());
    }

    #[test]
    fn test_check_style_uses_substyles_of_each_paragraph() {
        let styles = vec![Style::new(
            "BODY",
            PropertySet::new(),
            PropertySet::from_iter([("bold", "true")]),
            vec![0, 1],
        )];
        let substyles = vec![Substyle::new(
            "SUB-EMPH",
            PropertySet::from_iter([("bold", "false")]),
            vec![1],
        )];
        let index = StyleIndex::build(styles, substyles, 2).unwrap();
        let run = PropertySet::from_iter([("bold", "false")]);
        let paragraphs = vec![
            Paragraph::new(0, PropertySet::new(), vec![run.clone()], ListKind::None),
            Paragraph::new(1, PropertySet::new(), vec![run], ListKind::None),
        ];

        let results = check_style(&index.styles()[0], &index, &paragraphs);
        assert_eq!(results.len(), 2);
        assert!(!results[0].font_ok());
        assert!(results[1].font_ok());
        assert_eq!(results[1].suppressed.len(), 1);
    }
}
