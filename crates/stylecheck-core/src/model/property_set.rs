//! Flat property mappings for paragraphs and runs.

use crate::errors::{CheckError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from property name to property value.
///
/// Keys are unique and kept in sorted order, so iteration (and therefore
/// every diff computed from two sets) is deterministic. Equality is
/// structural over the (key, value) pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertySet(BTreeMap<String, String>);

impl PropertySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Decompose an inline style string such as `"margin: 0; bold: true;"`.
    ///
    /// Declarations are separated by `;` and split on their first `:`.
    /// Whitespace around keys and values is trimmed and empty declarations
    /// are skipped.
    ///
    /// # Errors
    ///
    /// - `MalformedStyleString` - a declaration has no `:` or an empty key
    /// - `DuplicateProperty` - the same key is declared twice
    pub fn parse_style_string(style: &str) -> Result<Self> {
        let mut props = BTreeMap::new();
        for declaration in style.split(';') {
            let declaration = declaration.trim();
            if declaration.is_empty() {
                continue;
            }
            let (key, value) =
                declaration
                    .split_once(':')
                    .ok_or_else(|| CheckError::MalformedStyleString {
                        declaration: declaration.to_string(),
                        reason: "expected '<property>: <value>'".to_string(),
                    })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(CheckError::MalformedStyleString {
                    declaration: declaration.to_string(),
                    reason: "empty property name".to_string(),
                });
            }
            if props
                .insert(key.to_string(), value.trim().to_string())
                .is_some()
            {
                return Err(CheckError::DuplicateProperty {
                    property: key.to_string(),
                });
            }
        }
        Ok(Self(props))
    }

    /// Insert a property, returning the previous value if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a property value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate properties in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate property names in key order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertySet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for PropertySet {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl std::fmt::Display for PropertySet {
    /// Renders the set back into inline style form: `a: 1; b: 2;`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (k, v) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}: {};", k, v)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_style_string() {
        let props =
            PropertySet::parse_style_string("margin-left: 0px; text-align: center;").unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props.get("margin-left"), Some("0px"));
        assert_eq!(props.get("text-align"), Some("center"));
    }

    #[test]
    fn test_parse_tolerates_missing_trailing_semicolon_and_spacing() {
        let props = PropertySet::parse_style_string("  bold :true;italic: false  ").unwrap();
        assert_eq!(props.get("bold"), Some("true"));
        assert_eq!(props.get("italic"), Some("false"));
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        let props = PropertySet::parse_style_string("font-family: a:b;").unwrap();
        assert_eq!(props.get("font-family"), Some("a:b"));
    }

    #[test]
    fn test_parse_empty_string_is_empty_set() {
        assert!(PropertySet::parse_style_string("").unwrap().is_empty());
        assert!(PropertySet::parse_style_string(" ; ;").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_declaration_without_colon() {
        let err = PropertySet::parse_style_string("margin 0;").unwrap_err();
        assert!(matches!(err, CheckError::MalformedStyleString { .. }));
        assert!(err.is_extraction());
    }

    #[test]
    fn test_parse_rejects_empty_key() {
        let err = PropertySet::parse_style_string(": 0;").unwrap_err();
        assert!(matches!(err, CheckError::MalformedStyleString { .. }));
    }

    #[test]
    fn test_parse_rejects_duplicate_key() {
        let err = PropertySet::parse_style_string("bold: true; bold: false;").unwrap_err();
        assert_eq!(
            err,
            CheckError::DuplicateProperty {
                property: "bold".to_string()
            }
        );
    }

    #[test]
    fn test_equality_is_structural() {
        let a: PropertySet = [("b", "2"), ("a", "1")].into_iter().collect();
        let b = PropertySet::parse_style_string("a: 1; b: 2;").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        let a: PropertySet = [("bold", "true"), ("size", "12pt")].into_iter().collect();
        let text = a.to_string();
        assert_eq!(text, "bold: true; size: 12pt;");
        assert_eq!(PropertySet::parse_style_string(&text).unwrap(), a);
    }
}
