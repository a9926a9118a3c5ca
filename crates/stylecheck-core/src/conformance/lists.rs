//! List requirement classification.

use crate::model::ListKind;
use serde::{Deserialize, Serialize};

/// Outcome of comparing a style's list requirement with a paragraph's
/// actual list membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum ListVerdict {
    /// Required list kind present
    ListElement,
    /// Paragraph is in a list of the wrong kind
    ChangeListType { from: ListKind, to: ListKind },
    /// Paragraph should be a list element but is not
    MissingList { expected: ListKind },
    /// Paragraph is a list element but no list is required
    RemoveList { actual: ListKind },
    /// No list required and none present
    NotListElement,
}

impl ListVerdict {
    pub fn is_defect(&self) -> bool {
        !matches!(self, ListVerdict::ListElement | ListVerdict::NotListElement)
    }

    /// Report line for this verdict
    pub fn message(&self) -> String {
        match self {
            ListVerdict::ListElement => "paragraph is a list element (ok)".to_string(),
            ListVerdict::ChangeListType { from, to } => {
                format!("change list type from {from} to {to}")
            }
            ListVerdict::MissingList { expected } => {
                format!("change list type from {} to {expected}", ListKind::None)
            }
            ListVerdict::RemoveList { .. } => "remove list from paragraph".to_string(),
            ListVerdict::NotListElement => "paragraph is not a list element (ok)".to_string(),
        }
    }
}

impl std::fmt::Display for ListVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Classify a paragraph. Total over all `expected` x `actual` pairs.
pub fn classify(expected: ListKind, actual: ListKind) -> ListVerdict {
    match (expected, actual) {
        (ListKind::None, ListKind::None) => ListVerdict::NotListElement,
        (ListKind::None, actual) => ListVerdict::RemoveList { actual },
        (expected, ListKind::None) => ListVerdict::MissingList { expected },
        (expected, actual) if expected == actual => ListVerdict::ListElement,
        (expected, actual) => ListVerdict::ChangeListType {
            from: actual,
            to: expected,
        },
    }
}
