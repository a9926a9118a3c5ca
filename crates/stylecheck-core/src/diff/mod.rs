//! Property diff engine.
//!
//! Compares an expected [`PropertySet`](crate::model::PropertySet) with an
//! actual one and produces an ordered list of [`DiffEntry`] values.
//!
//! ## Entry point
//!
//! ```
//! use stylecheck_core::diff::{diff, DiffEntry};
//! use stylecheck_core::PropertySet;
//!
//! let expected = PropertySet::parse_style_string("bold: true;").unwrap();
//! let actual = PropertySet::parse_style_string("bold: false;").unwrap();
//! let entries = diff(&expected, &actual);
//! assert!(matches!(
//!     entries.as_slice(),
//!     [DiffEntry::Changed { property, expected, actual }]
//!         if property == "bold" && expected == "true" && actual == "false"
//! ));
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: entries come out in property-name order, so identical
//!   inputs produce identical output.
//! - **One entry per key**: every missing, extra or differing key yields
//!   exactly one entry; an empty result means the sets are equal.

pub mod engine;
pub mod model;

pub use engine::{diff, has_defect};
pub use model::DiffEntry;
