//! Style and substyle expectation records.

use crate::model::{ListKind, PropertySet};
use serde::{Deserialize, Serialize};

/// Named expectation for a set of paragraphs.
///
/// `paragraphs` holds 0-based indices in declaration order; they may be
/// sparse. Assignments across all styles must form a partition, which
/// [`StyleIndex`](crate::index::StyleIndex) enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub name: String,
    pub paragraph_props: PropertySet,
    pub font_props: PropertySet,
    pub paragraphs: Vec<usize>,
    pub list: ListKind,
}

impl Style {
    pub fn new(
        name: impl Into<String>,
        paragraph_props: PropertySet,
        font_props: PropertySet,
        paragraphs: Vec<usize>,
    ) -> Self {
        Self {
            name: name.into(),
            paragraph_props,
            font_props,
            paragraphs,
            list: ListKind::None,
        }
    }

    pub fn with_list(mut self, list: ListKind) -> Self {
        self.list = list;
        self
    }
}

/// Scoped font override applied to a subset of a parent style's paragraphs.
///
/// `parent` may be left empty, in which case the style index associates the
/// substyle with the single style covering all of its paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substyle {
    pub name: String,
    pub parent: Option<String>,
    /// Expected font properties, i.e. the sanctioned overrides
    pub font_props: PropertySet,
    pub paragraphs: Vec<usize>,
}

impl Substyle {
    pub fn new(name: impl Into<String>, font_props: PropertySet, paragraphs: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            font_props,
            paragraphs,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn covers(&self, paragraph: usize) -> bool {
        self.paragraphs.contains(&paragraph)
    }
}
