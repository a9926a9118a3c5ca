//! Extracted paragraph records.

use crate::model::PropertySet;
use serde::{Deserialize, Serialize};

/// List membership of a paragraph, or a style's list requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    #[default]
    None,
    Ordered,
    Unordered,
}

impl ListKind {
    /// Parse any accepted spelling (`ol`, `ordered`, `ordered-list`, ...).
    ///
    /// Matching is case-insensitive; unknown spellings return `None` (the
    /// Option), not `ListKind::None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "false" => Some(ListKind::None),
            "ol" | "ordered" | "ordered-list" => Some(ListKind::Ordered),
            "ul" | "unordered" | "unordered-list" => Some(ListKind::Unordered),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::None => "none",
            ListKind::Ordered => "ordered",
            ListKind::Unordered => "unordered",
        }
    }

    pub fn is_list(&self) -> bool {
        !matches!(self, ListKind::None)
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One paragraph of the extracted document.
///
/// `runs` keeps reading order. `index` is 0-based; reports use `number()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub index: usize,
    /// Short text preview for display, if the extractor provided one
    pub text: Option<String>,
    pub props: PropertySet,
    pub runs: Vec<PropertySet>,
    pub list: ListKind,
}

impl Paragraph {
    pub fn new(index: usize, props: PropertySet, runs: Vec<PropertySet>, list: ListKind) -> Self {
        Self {
            index,
            text: None,
            props,
            runs,
            list,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// 1-based paragraph number used in reports
    pub fn number(&self) -> u32 {
        paragraph_number(self.index)
    }
}

/// Convert a 0-based position to the 1-based number shown to users.
///
/// Positions past `u32::MAX - 1` saturate at `u32::MAX` instead of wrapping.
pub fn paragraph_number(index: usize) -> u32 {
    u32::try_from(index)
        .ok()
        .and_then(|n| n.checked_add(1))
        .unwrap_or(u32::MAX)
}

/// Build the display preview of a paragraph's text.
///
/// Newlines are dropped and the result is cut to `max_chars` characters.
pub fn text_preview(text: &str, max_chars: usize) -> String {
    text.chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .take(max_chars)
        .collect()
}
