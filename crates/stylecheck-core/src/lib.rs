//! stylecheck Core - style conformance checking engine
//!
//! This crate checks that the visual formatting of an extracted document
//! matches a declarative style specification:
//! - PropertySet, Paragraph, Style and Substyle records
//! - Structural property diffing (Added/Removed/Changed)
//! - Style index construction with configuration validation
//! - Per-style paragraph and font conformance with substyle suppression
//! - Substyle usage analysis and list conformance
//! - Deterministic report model and text rendering
//!
//! The single entry point is [`check_document`].

pub mod check;
pub mod conformance;
pub mod diff;
pub mod errors;
pub mod index;
pub mod logging_facility;
pub mod model;
pub mod report;

pub use stylecheck_core_types as core_types;

// Re-export commonly used types
pub use check::{check_document, CheckOptions};
pub use diff::{diff, DiffEntry};
pub use errors::{CheckError, ErrorCategory, ExError, ExErrorKind, Result};
pub use index::StyleIndex;
pub use model::{ListKind, Paragraph, PropertySet, Style, Substyle};
pub use report::{ConformanceReport, ParagraphReport};
