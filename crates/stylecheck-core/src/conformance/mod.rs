//! Conformance checks run against an indexed specification.
//!
//! - [`style_checker`] - paragraph and font diffs per style, with overlay
//! - [`overlay`] - substyle suppression of sanctioned font deviations
//! - [`usage`] - whether each substyle is actually present where declared
//! - [`lists`] - list requirement classification

pub mod lists;
pub mod overlay;
pub mod style_checker;
pub mod usage;

pub use lists::{classify, ListVerdict};
pub use overlay::SubstyleOverlay;
pub use style_checker::{check_paragraph, check_style, ParagraphConformance};
pub use usage::{analyze_substyle, in_use_substyles, substyle_in_use, SubstyleUsage};
