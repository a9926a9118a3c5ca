//! Diff entry type.

use serde::{Deserialize, Serialize};

/// One discrepancy between an expected and an actual property set.
///
/// Entries come out of [`diff`](crate::diff::diff); the shorthand
/// constructors stay inside the crate.
///
/// ```compile_fail
/// let _ = stylecheck_core::DiffEntry::added("bold", "true");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffEntry {
    /// Present in the document, not mandated by the expectation
    Added { property: String, value: String },
    /// Mandated by the expectation, absent from the document
    Removed { property: String, value: String },
    /// Present on both sides with different values
    Changed {
        property: String,
        expected: String,
        actual: String,
    },
}

impl DiffEntry {
    pub(crate) fn added(property: impl Into<String>, value: impl Into<String>) -> Self {
        DiffEntry::Added {
            property: property.into(),
            value: value.into(),
        }
    }

    pub(crate) fn removed(property: impl Into<String>, value: impl Into<String>) -> Self {
        DiffEntry::Removed {
            property: property.into(),
            value: value.into(),
        }
    }

    pub(crate) fn changed(
        property: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        DiffEntry::Changed {
            property: property.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Property name the entry is about
    pub fn property(&self) -> &str {
        match self {
            DiffEntry::Added { property, .. }
            | DiffEntry::Removed { property, .. }
            | DiffEntry::Changed { property, .. } => property,
        }
    }

    /// Added and Changed entries contradict an expectation; Removed only
    /// means the document leaves the property to inheritance.
    pub fn is_defect(&self) -> bool {
        matches!(self, DiffEntry::Added { .. } | DiffEntry::Changed { .. })
    }
}
