//! Substyle overlay: sanctioned font deviations for one paragraph.

use crate::diff::DiffEntry;
use crate::model::Substyle;

/// The font overrides that substyles contribute to a single paragraph.
///
/// A base-style font diff entry is suppressed when it is sanctioned:
///
/// - `Changed(p, expected, actual)`: some participating substyle declares
///   `p` with a value equal to `actual` (the predicted deviation) or to
///   `expected`
/// - `Added(p, _)` / `Removed(p, _)`: some participating substyle declares `p`
///
/// Only substyles whose assignment includes the paragraph participate.
#[derive(Debug, Clone)]
pub struct SubstyleOverlay<'a> {
    paragraph: usize,
    substyles: Vec<&'a Substyle>,
}

impl<'a> SubstyleOverlay<'a> {
    /// Build the overlay for paragraph `paragraph` (0-based), keeping only
    /// the substyles that cover it.
    pub fn new(paragraph: usize, substyles: impl IntoIterator<Item = &'a Substyle>) -> Self {
        Self {
            paragraph,
            substyles: substyles
                .into_iter()
                .filter(|s| s.covers(paragraph))
                .collect(),
        }
    }

    pub fn paragraph(&self) -> usize {
        self.paragraph
    }

    /// Participating substyles, declaration order
    pub fn substyles(&self) -> &[&'a Substyle] {
        &self.substyles
    }

    pub fn is_empty(&self) -> bool {
        self.substyles.is_empty()
    }

    /// True if some participating substyle sanctions `entry`.
    pub fn sanctions(&self, entry: &DiffEntry) -> bool {
        self.substyles.iter().any(|substyle| {
            let overrides = &substyle.font_props;
            match entry {
                DiffEntry::Changed {
                    property,
                    expected,
                    actual,
                } => overrides
                    .get(property)
                    .is_some_and(|v| v == actual.as_str() || v == expected.as_str()),
                DiffEntry::Added { property, .. } | DiffEntry::Removed { property, .. } => {
                    overrides.contains_key(property)
                }
            }
        })
    }

    /// Split `entries` into `(kept, suppressed)`, preserving order in both.
    pub fn apply(&self, entries: Vec<DiffEntry>) -> (Vec<DiffEntry>, Vec<DiffEntry>) {
        if self.is_empty() {
            return (entries, Vec::new());
        }
        entries.into_iter().partition(|entry| !self.sanctions(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertySet;

    fn emph() -> Substyle {
        Substyle::new(
            "SUB-EMPH",
            PropertySet::from_iter([("bold", "false")]),
            vec![0],
        )
    }

    #[test]
    fn test_changed_matching_override_is_suppressed() {
        let sub = emph();
        let overlay = SubstyleOverlay::new(0, [&sub]);
        let (kept, suppressed) = overlay.apply(vec![DiffEntry::changed("bold", "true", "false")]);
        assert!(kept.is_empty());
        assert_eq!(suppressed.len(), 1);
    }

    #[test]
    fn test_changed_matching_base_expected_is_suppressed() {
        let sub = Substyle::new("SUB-X", PropertySet::from_iter([("bold", "true")]), vec![0]);
        let overlay = SubstyleOverlay::new(0, [&sub]);
        assert!(overlay.sanctions(&DiffEntry::changed("bold", "true", "false")));
    }

    #[test]
    fn test_changed_with_unrelated_value_is_kept() {
        let sub = emph();
        let overlay = SubstyleOverlay::new(0, [&sub]);
        let entry = DiffEntry::changed("bold", "true", "medium");
        assert!(!overlay.sanctions(&entry));
    }

    #[test]
    fn test_added_and_removed_suppressed_by_property_name() {
        let sub = emph();
        let overlay = SubstyleOverlay::new(0, [&sub]);
        assert!(overlay.sanctions(&DiffEntry::added("bold", "anything")));
        assert!(overlay.sanctions(&DiffEntry::removed("bold", "true")));
        assert!(!overlay.sanctions(&DiffEntry::added("italic", "true")));
    }

    #[test]
    fn test_substyle_not_covering_paragraph_does_not_participate() {
        let sub = emph();
        let overlay = SubstyleOverlay::new(1, [&sub]);
        assert!(overlay.is_empty());
        let (kept, suppressed) = overlay.apply(vec![DiffEntry::changed("bold", "true", "false")]);
        assert_eq!(kept.len(), 1);
        assert!(suppressed.is_empty());
    }
}
