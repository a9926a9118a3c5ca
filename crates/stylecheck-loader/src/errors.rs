//! Error helpers for stylecheck-loader
//!
//! Wraps stylecheck-core ExError with loader-specific constructors

use stylecheck_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a spec validation error
pub fn spec_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("spec_parse")
        .with_message(reason.to_string())
}

/// Create a spec validation error attributed to one section
pub fn section_validation(section: &str, reason: &str) -> ExError {
    spec_validation(reason).with_style(section)
}

/// Create a document validation error
pub fn document_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("document_parse")
        .with_message(reason.to_string())
}

/// Create an unsupported schema version error
pub fn unsupported_schema(op: &str, found: u32) -> ExError {
    ExError::new(ExErrorKind::UnsupportedSchemaVersion)
        .with_op(op.to_string())
        .with_message(format!("Unsupported schema_version: {}. Expected 0", found))
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
