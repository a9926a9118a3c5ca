//! Property diff computation.

use crate::diff::model::DiffEntry;
use crate::model::PropertySet;

/// Compute the structural diff between `expected` and `actual`.
///
/// - key only in `expected` -> `Removed(key, expected value)`
/// - key only in `actual` -> `Added(key, actual value)`
/// - key in both, values differ -> `Changed(key, expected, actual)`
///
/// Both sets iterate in key order and are merged in a single pass, so
/// the output is sorted by property name.
pub fn diff(expected: &PropertySet, actual: &PropertySet) -> Vec<DiffEntry> {
    let mut entries = Vec::new();
    let mut exp = expected.iter().peekable();
    let mut act = actual.iter().peekable();

    loop {
        match (exp.peek(), act.peek()) {
            (Some(&(ek, ev)), Some(&(ak, av))) => match ek.cmp(ak) {
                std::cmp::Ordering::Less => {
                    entries.push(DiffEntry::removed(ek, ev));
                    exp.next();
                }
                std::cmp::Ordering::Greater => {
                    entries.push(DiffEntry::added(ak, av));
                    act.next();
                }
                std::cmp::Ordering::Equal => {
                    if ev != av {
                        entries.push(DiffEntry::changed(ek, ev, av));
                    }
                    exp.next();
                    act.next();
                }
            },
            (Some(&(ek, ev)), None) => {
                entries.push(DiffEntry::removed(ek, ev));
                exp.next();
            }
            (None, Some(&(ak, av))) => {
                entries.push(DiffEntry::added(ak, av));
                act.next();
            }
            (None, None) => break,
        }
    }

    entries
}

/// True if any entry is Added or Changed.
pub fn has_defect(entries: &[DiffEntry]) -> bool {
    entries.iter().any(DiffEntry::is_defect)
}
