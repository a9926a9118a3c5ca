//! Spec Format v0 schema
//!
//! Defines the YAML structure of a style specification. Sections keep
//! their file order, which becomes declaration order in the engine.

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;

/// Top-level spec file structure
#[derive(Debug, Clone, Deserialize)]
pub struct SpecV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Sections in file order, keyed by style or substyle name
    #[serde(deserialize_with = "deserialize_sections")]
    pub sections: Vec<(String, SpecSection)>,
}

/// One style or substyle section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecSection {
    /// Expected paragraph properties (styles only)
    #[serde(default, deserialize_with = "deserialize_properties")]
    pub paragraph: Option<PropertyDecl>,

    /// Expected font properties
    #[serde(default, deserialize_with = "deserialize_properties")]
    pub font: Option<PropertyDecl>,

    /// List requirement (styles only)
    #[serde(default)]
    pub list: Option<Scalar>,

    /// 1-based paragraph numbers
    #[serde(default)]
    pub paragraphs: Vec<i64>,

    /// Parent style name (substyles only)
    #[serde(default)]
    pub parent: Option<String>,
}

/// Property expectations, written either as a mapping or as an inline
/// style string such as `"bold: true; italic: false;"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyDecl {
    Map(BTreeMap<String, String>),
    Inline(String),
}

/// Any YAML scalar, normalized to its string form (`0` -> `"0"`,
/// `true` -> `"true"`, `~` -> `""`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scalar(pub String);

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, number or boolean")
            }

            fn visit_str<E>(self, value: &str) -> Result<Scalar, E>
            where
                E: de::Error,
            {
                Ok(Scalar(value.to_string()))
            }

            fn visit_bool<E>(self, value: bool) -> Result<Scalar, E>
            where
                E: de::Error,
            {
                Ok(Scalar(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Scalar, E>
            where
                E: de::Error,
            {
                Ok(Scalar(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Scalar, E>
            where
                E: de::Error,
            {
                Ok(Scalar(value.to_string()))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Scalar, E>
            where
                E: de::Error,
            {
                Ok(Scalar(value.to_string()))
            }

            fn visit_unit<E>(self) -> Result<Scalar, E>
            where
                E: de::Error,
            {
                Ok(Scalar(String::new()))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// Custom deserializer for property fields: a mapping of scalars or an
/// inline style string; null counts as absent
fn deserialize_properties<'de, D>(deserializer: D) -> Result<Option<PropertyDecl>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PropertiesVisitor;

    impl<'de> Visitor<'de> for PropertiesVisitor {
        type Value = Option<PropertyDecl>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a mapping of properties or an inline style string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(PropertyDecl::Inline(value.to_string())))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut props = BTreeMap::new();
            while let Some((key, value)) = map.next_entry::<Scalar, Scalar>()? {
                if props.insert(key.0.clone(), value.0).is_some() {
                    return Err(de::Error::custom(format!(
                        "duplicate property '{}'",
                        key.0
                    )));
                }
            }
            Ok(Some(PropertyDecl::Map(props)))
        }
    }

    deserializer.deserialize_any(PropertiesVisitor)
}

/// Custom deserializer for the section mapping that keeps file order
fn deserialize_sections<'de, D>(deserializer: D) -> Result<Vec<(String, SpecSection)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SectionsVisitor;

    impl<'de> Visitor<'de> for SectionsVisitor {
        type Value = Vec<(String, SpecSection)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a mapping of section names to sections")
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut sections = Vec::new();
            while let Some(entry) = map.next_entry::<String, SpecSection>()? {
                sections.push(entry);
            }
            Ok(sections)
        }
    }

    deserializer.deserialize_map(SectionsVisitor)
}
