//! Style index: name and paragraph lookups over the loaded specification.
//!
//! Building the index is where every configuration error is raised, before
//! any paragraph is diffed:
//!
//! 1. Style and substyle names are unique
//! 2. Every referenced paragraph exists in the document
//! 3. Style assignments form a partition of the covered paragraphs
//! 4. Every substyle resolves to exactly one parent style that covers all
//!    of its paragraphs

use crate::errors::{CheckError, Result};
use crate::model::{Style, Substyle};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Read-only lookup structure built once per check run.
#[derive(Debug, Clone)]
pub struct StyleIndex {
    styles: Vec<Style>,
    substyles: Vec<Substyle>,
    /// Resolved parent style position for each substyle (same order as `substyles`)
    substyle_parents: Vec<usize>,
    /// Paragraph index -> position of the owning style
    owner_by_paragraph: BTreeMap<usize, usize>,
    /// Paragraph index -> positions of covering substyles, declaration order
    substyles_by_paragraph: BTreeMap<usize, Vec<usize>>,
    paragraph_count: usize,
}

impl StyleIndex {
    /// Validate the specification against a document of `paragraph_count`
    /// paragraphs and build the index.
    ///
    /// # Errors
    ///
    /// - `DuplicateStyleName` - a name is declared twice across styles and substyles
    /// - `ParagraphOutOfRange` - a paragraph index is `>= paragraph_count`
    /// - `OverlappingAssignment` - a paragraph is claimed twice by styles
    /// - `UnknownParentStyle` / `UnresolvedParentStyle` - a substyle's parent
    ///   is undeclared or cannot be inferred
    /// - `SubstyleOutsideParent` - an explicit parent does not cover a
    ///   paragraph of its substyle
    pub fn build(
        styles: Vec<Style>,
        substyles: Vec<Substyle>,
        paragraph_count: usize,
    ) -> Result<Self> {
        check_unique_names(&styles, &substyles)?;

        for style in &styles {
            check_in_range(&style.name, &style.paragraphs, paragraph_count)?;
        }
        for substyle in &substyles {
            check_in_range(&substyle.name, &substyle.paragraphs, paragraph_count)?;
        }

        let mut owner_by_paragraph: BTreeMap<usize, usize> = BTreeMap::new();
        for (pos, style) in styles.iter().enumerate() {
            for &paragraph in &style.paragraphs {
                if let Some(&first) = owner_by_paragraph.get(&paragraph) {
                    return Err(CheckError::OverlappingAssignment {
                        paragraph,
                        first_style: styles[first].name.clone(),
                        second_style: style.name.clone(),
                    });
                }
                owner_by_paragraph.insert(paragraph, pos);
            }
        }

        let substyle_parents = substyles
            .iter()
            .map(|substyle| resolve_parent(substyle, &styles))
            .collect::<Result<Vec<usize>>>()?;

        let mut substyles_by_paragraph: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (pos, substyle) in substyles.iter().enumerate() {
            let mut seen = HashSet::new();
            for &paragraph in &substyle.paragraphs {
                if seen.insert(paragraph) {
                    substyles_by_paragraph
                        .entry(paragraph)
                        .or_default()
                        .push(pos);
                }
            }
        }

        tracing::debug!(
            styles = styles.len(),
            substyles = substyles.len(),
            covered_paragraphs = owner_by_paragraph.len(),
            paragraph_count,
            "style index built"
        );

        Ok(Self {
            styles,
            substyles,
            substyle_parents,
            owner_by_paragraph,
            substyles_by_paragraph,
            paragraph_count,
        })
    }

    /// All styles in declaration order
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// All substyles in declaration order
    pub fn substyles(&self) -> &[Substyle] {
        &self.substyles
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraph_count
    }

    pub fn style(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.name == name)
    }

    pub fn substyle(&self, name: &str) -> Option<&Substyle> {
        self.substyles.iter().find(|s| s.name == name)
    }

    /// The style assigned to paragraph `index`, if any
    pub fn style_for_paragraph(&self, index: usize) -> Option<&Style> {
        self.owner_by_paragraph
            .get(&index)
            .map(|&pos| &self.styles[pos])
    }

    /// Substyles whose assignment includes paragraph `index`, declaration order
    pub fn substyles_for_paragraph(&self, index: usize) -> Vec<&Substyle> {
        self.substyles_by_paragraph
            .get(&index)
            .map(|positions| positions.iter().map(|&p| &self.substyles[p]).collect())
            .unwrap_or_default()
    }

    /// Resolved parent style of a substyle
    pub fn parent_of(&self, substyle: &str) -> Option<&Style> {
        self.substyles
            .iter()
            .position(|s| s.name == substyle)
            .map(|pos| &self.styles[self.substyle_parents[pos]])
    }

    /// Paragraph indices assigned to some style, ascending
    pub fn covered_paragraphs(&self) -> impl Iterator<Item = usize> + '_ {
        self.owner_by_paragraph.keys().copied()
    }
}

fn check_unique_names(styles: &[Style], substyles: &[Substyle]) -> Result<()> {
    let mut names = HashSet::new();
    let all = styles
        .iter()
        .map(|s| &s.name)
        .chain(substyles.iter().map(|s| &s.name));
    for name in all {
        if !names.insert(name.as_str()) {
            return Err(CheckError::DuplicateStyleName { name: name.clone() });
        }
    }
    Ok(())
}

fn check_in_range(owner: &str, paragraphs: &[usize], paragraph_count: usize) -> Result<()> {
    match paragraphs.iter().find(|&&p| p >= paragraph_count) {
        Some(&paragraph) => Err(CheckError::ParagraphOutOfRange {
            owner: owner.to_string(),
            paragraph,
            paragraph_count,
        }),
        None => Ok(()),
    }
}

/// Find the position of the substyle's parent among `styles`.
fn resolve_parent(substyle: &Substyle, styles: &[Style]) -> Result<usize> {
    match &substyle.parent {
        Some(parent) => {
            let pos = styles.iter().position(|s| &s.name == parent).ok_or_else(|| {
                CheckError::UnknownParentStyle {
                    substyle: substyle.name.clone(),
                    parent: parent.clone(),
                }
            })?;
            let covered: BTreeSet<usize> = styles[pos].paragraphs.iter().copied().collect();
            if let Some(&paragraph) = substyle.paragraphs.iter().find(|p| !covered.contains(*p)) {
                return Err(CheckError::SubstyleOutsideParent {
                    substyle: substyle.name.clone(),
                    parent: parent.clone(),
                    paragraph,
                });
            }
            Ok(pos)
        }
        None => {
            let candidates: Vec<usize> = styles
                .iter()
                .enumerate()
                .filter(|(_, style)| {
                    !substyle.paragraphs.is_empty()
                        && substyle
                            .paragraphs
                            .iter()
                            .all(|p| style.paragraphs.contains(p))
                })
                .map(|(pos, _)| pos)
                .collect();
            match candidates.as_slice() {
                [pos] => Ok(*pos),
                _ => Err(CheckError::UnresolvedParentStyle {
                    substyle: substyle.name.clone(),
                    candidates: candidates
                        .iter()
                        .map(|&pos| styles[pos].name.clone())
                        .collect(),
                }),
            }
        }
    }
}
