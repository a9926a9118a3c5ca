//! Substyle usage analysis.
//!
//! A substyle is "in use" in a paragraph when every run of that paragraph
//! agrees with the substyle's font properties: no run diff against the
//! substyle contains an `Added` or `Changed` entry. A `Removed` entry (the
//! run does not define the property at all) counts as inheriting and does
//! not disqualify. A paragraph without runs is vacuously in use.
//!
//! Evaluation for one substyle never consults any other substyle or the
//! base style's overlay.

use crate::diff::{diff, has_defect};
use crate::index::StyleIndex;
use crate::model::{Paragraph, Substyle};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Usage verdict for one (substyle, paragraph) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstyleUsage {
    pub substyle: String,
    /// 1-based paragraph number
    pub paragraph: u32,
    pub in_use: bool,
}

/// True if `substyle`'s overrides are present in every run of `paragraph`.
pub fn substyle_in_use(substyle: &Substyle, paragraph: &Paragraph) -> bool {
    paragraph
        .runs
        .iter()
        .all(|run| !has_defect(&diff(&substyle.font_props, run)))
}

/// Evaluate `substyle` on each of its assigned paragraphs, in assignment
/// order. Repeated indices are evaluated once.
pub fn analyze_substyle(substyle: &Substyle, paragraphs: &[Paragraph]) -> Vec<SubstyleUsage> {
    let mut seen = HashSet::new();
    substyle
        .paragraphs
        .iter()
        .filter(|&&i| seen.insert(i))
        .filter_map(|&i| paragraphs.get(i))
        .map(|paragraph| SubstyleUsage {
            substyle: substyle.name.clone(),
            paragraph: paragraph.number(),
            in_use: substyle_in_use(substyle, paragraph),
        })
        .collect()
}

/// Names of the substyles assigned to `paragraph` that are in use there,
/// declaration order.
pub fn in_use_substyles(index: &StyleIndex, paragraph: &Paragraph) -> Vec<String> {
    index
        .substyles_for_paragraph(paragraph.index)
        .into_iter()
        .filter(|substyle| substyle_in_use(substyle, paragraph))
        .map(|substyle| substyle.name.clone())
        .collect()
}
