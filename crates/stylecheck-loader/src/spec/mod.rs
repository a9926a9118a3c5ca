//! Style specification files
//!
//! Provides:
//! - Spec Format v0 schema
//! - YAML parser with validation and conversion to core records

pub mod format_v0;
pub mod parser;

pub use format_v0::{PropertyDecl, SpecSection, SpecV0};
pub use parser::{load_spec_file, parse_spec_str, DEFAULT_SUBSTYLE_PREFIX};
