//! Extracted document files
//!
//! Provides:
//! - Document Format v0 schema
//! - JSON/YAML parser producing core `Paragraph` records

pub mod format_v0;
pub mod parser;

pub use format_v0::{DocumentParagraph, DocumentV0};
pub use parser::{load_document_file, parse_document_str, DocumentFormat};
