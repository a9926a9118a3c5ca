//! Conformance report model and rendering.

pub mod format;
pub mod model;

pub use format::{
    format_entries, format_entry, font_line, paragraph_line, render_text_report,
};
pub use model::{ConformanceReport, ParagraphReport, ReportSummary};
pub use crate::conformance::SubstyleUsage;
