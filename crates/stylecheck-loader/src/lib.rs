//! stylecheck Loader - specification and document file formats
//!
//! Converts files on disk into the records the core engine consumes:
//! - Spec Format v0 (YAML): styles and substyles
//! - Document Format v0 (JSON or YAML): extracted paragraphs and runs
//!
//! Every loader returns [`ExError`](stylecheck_core::errors::ExError) with
//! the failing operation recorded, so callers can print a single message.

pub mod document;
pub mod errors;
pub mod spec;

pub use document::{load_document_file, parse_document_str, DocumentFormat};
pub use errors::Result;
pub use spec::{load_spec_file, parse_spec_str, SpecV0, DEFAULT_SUBSTYLE_PREFIX};
