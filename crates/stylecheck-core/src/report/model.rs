//! Report data structures.

use crate::conformance::{ListVerdict, SubstyleUsage};
use crate::core_types::RunId;
use crate::diff::DiffEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything found for one paragraph assigned to a style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphReport {
    /// 1-based paragraph number
    pub number: u32,
    pub style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub paragraph_diff: Vec<DiffEntry>,
    /// Post-suppression font diff per run
    pub run_diffs: Vec<Vec<DiffEntry>>,
    /// Font entries sanctioned by substyles
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suppressed: Vec<DiffEntry>,
    pub list: ListVerdict,
    /// Substyles assigned to this paragraph and verified in use
    pub substyles_in_use: Vec<String>,
}

impl ParagraphReport {
    pub fn paragraph_ok(&self) -> bool {
        self.paragraph_diff.is_empty()
    }

    pub fn font_ok(&self) -> bool {
        self.run_diffs.iter().all(Vec::is_empty)
    }

    pub fn list_ok(&self) -> bool {
        !self.list.is_defect()
    }

    pub fn is_ok(&self) -> bool {
        self.paragraph_ok() && self.font_ok() && self.list_ok()
    }
}

/// Finding counts across the whole report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub paragraphs_checked: usize,
    pub paragraph_defects: usize,
    pub font_defects: usize,
    pub list_defects: usize,
    pub unused_substyles: usize,
}

impl ReportSummary {
    fn tally(paragraphs: &BTreeMap<u32, ParagraphReport>, usage: &[SubstyleUsage]) -> Self {
        let count = |pred: fn(&ParagraphReport) -> bool| {
            paragraphs.values().filter(|report| !pred(report)).count()
        };
        Self {
            paragraphs_checked: paragraphs.len(),
            paragraph_defects: count(ParagraphReport::paragraph_ok),
            font_defects: count(ParagraphReport::font_ok),
            list_defects: count(ParagraphReport::list_ok),
            unused_substyles: usage.iter().filter(|u| !u.in_use).count(),
        }
    }
}

/// Result of one check run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub run_id: RunId,
    /// Keyed by 1-based paragraph number, ascending
    pub paragraphs: BTreeMap<u32, ParagraphReport>,
    /// One entry per (substyle, paragraph) pair, declaration order
    pub substyle_usage: Vec<SubstyleUsage>,
    pub summary: ReportSummary,
}

impl ConformanceReport {
    /// Assemble a report and compute its summary.
    pub fn new(
        run_id: RunId,
        paragraphs: BTreeMap<u32, ParagraphReport>,
        substyle_usage: Vec<SubstyleUsage>,
    ) -> Self {
        let summary = ReportSummary::tally(&paragraphs, &substyle_usage);
        Self {
            run_id,
            paragraphs,
            substyle_usage,
            summary,
        }
    }

    pub fn paragraph(&self, number: u32) -> Option<&ParagraphReport> {
        self.paragraphs.get(&number)
    }

    /// Usage pairs whose substyle was not found in use
    pub fn unused_substyles(&self) -> impl Iterator<Item = &SubstyleUsage> {
        self.substyle_usage.iter().filter(|u| !u.in_use)
    }

    /// True iff every paragraph is ok on all axes and every substyle is in use.
    pub fn is_clean(&self) -> bool {
        self.paragraphs.values().all(ParagraphReport::is_ok)
            && self.substyle_usage.iter().all(|u| u.in_use)
    }
}
