use crate::model::paragraph_number;
use stylecheck_core_types::RunId;
use thiserror::Error;

/// Result type alias using CheckError
pub type Result<T> = std::result::Result<T, CheckError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and machine-readable CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Configuration (fatal, raised before any checking)
    ParagraphOutOfRange,
    OverlappingAssignment,
    UnknownParentStyle,
    SubstyleOutsideParent,
    DuplicateStyleName,

    // Extraction (fatal, surfaced to the caller)
    MalformedStyleString,
    DuplicateProperty,

    // Input files
    InvalidInput,
    UnsupportedSchemaVersion,

    // Integration/IO
    Io,

    // Internal
    Internal,
}

/// Coarse classification of error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The style specification contradicts itself or the document
    Configuration,
    /// The extracted document could not be decomposed into properties
    Extraction,
    /// An input file is syntactically invalid
    Input,
    /// Reading or writing a file failed
    Io,
    /// A bug
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::ParagraphOutOfRange => "ERR_PARAGRAPH_OUT_OF_RANGE",
            ExErrorKind::OverlappingAssignment => "ERR_OVERLAPPING_ASSIGNMENT",
            ExErrorKind::UnknownParentStyle => "ERR_UNKNOWN_PARENT_STYLE",
            ExErrorKind::SubstyleOutsideParent => "ERR_SUBSTYLE_OUTSIDE_PARENT",
            ExErrorKind::DuplicateStyleName => "ERR_DUPLICATE_STYLE_NAME",
            ExErrorKind::MalformedStyleString => "ERR_MALFORMED_STYLE_STRING",
            ExErrorKind::DuplicateProperty => "ERR_DUPLICATE_PROPERTY",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::UnsupportedSchemaVersion => "ERR_UNSUPPORTED_SCHEMA_VERSION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Get the category this kind belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExErrorKind::ParagraphOutOfRange
            | ExErrorKind::OverlappingAssignment
            | ExErrorKind::UnknownParentStyle
            | ExErrorKind::SubstyleOutsideParent
            | ExErrorKind::DuplicateStyleName => ErrorCategory::Configuration,
            ExErrorKind::MalformedStyleString | ExErrorKind::DuplicateProperty => {
                ErrorCategory::Extraction
            }
            ExErrorKind::InvalidInput | ExErrorKind::UnsupportedSchemaVersion => {
                ErrorCategory::Input
            }
            ExErrorKind::Io => ErrorCategory::Io,
            ExErrorKind::Internal => ErrorCategory::Internal,
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling and optional
/// context (operation, style, paragraph, run) for display.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    style: Option<String>,
    paragraph: Option<u32>,
    run: Option<u32>,
    run_id: Option<RunId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            style: None,
            paragraph: None,
            run: None,
            run_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add style (or substyle) name context
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Add 1-based paragraph number context
    pub fn with_paragraph(mut self, paragraph: u32) -> Self {
        self.paragraph = Some(paragraph);
        self
    }

    /// Add 1-based run number context
    pub fn with_run(mut self, run: u32) -> Self {
        self.run = Some(run);
        self
    }

    /// Add check run correlation
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the style context, if any
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Get the paragraph number context, if any
    pub fn paragraph(&self) -> Option<u32> {
        self.paragraph
    }

    /// Get the run number context, if any
    pub fn run(&self) -> Option<u32> {
        self.run
    }

    /// Get the check run id, if any
    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(style) = &self.style {
            write!(f, " (style: {})", style)?;
        }
        if let Some(paragraph) = self.paragraph {
            write!(f, " (paragraph: #{})", paragraph)?;
        }
        if let Some(run) = self.run {
            write!(f, " (run: #{})", run)?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for conformance checking
///
/// Paragraph fields hold 0-based indices; display output converts them to
/// the 1-based numbers users see in reports.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckError {
    // ===== Configuration Errors =====
    /// A style or substyle references a paragraph the document does not have
    #[error("{owner} references paragraph #{} but the document has {paragraph_count} paragraphs", paragraph_number(*paragraph))]
    ParagraphOutOfRange {
        owner: String,
        paragraph: usize,
        paragraph_count: usize,
    },

    /// Two styles (or one style twice) claim the same paragraph
    #[error("paragraph #{} is assigned to both {first_style} and {second_style}", paragraph_number(*paragraph))]
    OverlappingAssignment {
        paragraph: usize,
        first_style: String,
        second_style: String,
    },

    /// A substyle names a parent style that is not declared
    #[error("substyle {substyle} names undeclared parent style {parent}")]
    UnknownParentStyle { substyle: String, parent: String },

    /// A substyle without explicit parent matches zero or several styles
    #[error("substyle {substyle} cannot be associated with a parent style (candidates: {candidates:?})")]
    UnresolvedParentStyle {
        substyle: String,
        candidates: Vec<String>,
    },

    /// A substyle covers a paragraph its parent style does not
    #[error("substyle {substyle} covers paragraph #{} which is not assigned to parent {parent}", paragraph_number(*paragraph))]
    SubstyleOutsideParent {
        substyle: String,
        parent: String,
        paragraph: usize,
    },

    /// The same name is declared twice
    #[error("style name declared more than once: {name}")]
    DuplicateStyleName { name: String },

    // ===== Extraction Errors =====
    /// A style string declaration cannot be split into key and value
    #[error("malformed style declaration '{declaration}': {reason}")]
    MalformedStyleString { declaration: String, reason: String },

    /// A style string declares the same property twice
    #[error("property declared more than once in style string: {property}")]
    DuplicateProperty { property: String },

    // ===== Other Errors =====
    /// Internal error (should not happen)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CheckError {
    /// Get the canonical kind of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            CheckError::ParagraphOutOfRange { .. } => ExErrorKind::ParagraphOutOfRange,
            CheckError::OverlappingAssignment { .. } => ExErrorKind::OverlappingAssignment,
            CheckError::UnknownParentStyle { .. } | CheckError::UnresolvedParentStyle { .. } => {
                ExErrorKind::UnknownParentStyle
            }
            CheckError::SubstyleOutsideParent { .. } => ExErrorKind::SubstyleOutsideParent,
            CheckError::DuplicateStyleName { .. } => ExErrorKind::DuplicateStyleName,
            CheckError::MalformedStyleString { .. } => ExErrorKind::MalformedStyleString,
            CheckError::DuplicateProperty { .. } => ExErrorKind::DuplicateProperty,
            CheckError::Internal { .. } => ExErrorKind::Internal,
        }
    }

    /// True for errors raised while validating the specification
    pub fn is_configuration(&self) -> bool {
        self.kind().category() == ErrorCategory::Configuration
    }

    /// True for errors raised while decomposing extracted style strings
    pub fn is_extraction(&self) -> bool {
        self.kind().category() == ErrorCategory::Extraction
    }
}

/// Conversion from CheckError to ExError
impl From<CheckError> for ExError {
    fn from(err: CheckError) -> Self {
        let base = ExError::new(err.kind()).with_message(err.to_string());
        match err {
            CheckError::ParagraphOutOfRange {
                owner, paragraph, ..
            } => base
                .with_op("build_style_index")
                .with_style(owner)
                .with_paragraph(paragraph_number(paragraph)),

            CheckError::OverlappingAssignment {
                paragraph,
                second_style,
                ..
            } => base
                .with_op("build_style_index")
                .with_style(second_style)
                .with_paragraph(paragraph_number(paragraph)),

            CheckError::UnknownParentStyle { substyle, .. }
            | CheckError::UnresolvedParentStyle { substyle, .. } => {
                base.with_op("resolve_parent_style").with_style(substyle)
            }

            CheckError::SubstyleOutsideParent {
                substyle,
                paragraph,
                ..
            } => base
                .with_op("resolve_parent_style")
                .with_style(substyle)
                .with_paragraph(paragraph_number(paragraph)),

            CheckError::DuplicateStyleName { name } => {
                base.with_op("build_style_index").with_style(name)
            }

            CheckError::MalformedStyleString { .. } | CheckError::DuplicateProperty { .. } => {
                base.with_op("parse_style_string")
            }

            CheckError::Internal { .. } => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::ParagraphOutOfRange, "ERR_PARAGRAPH_OUT_OF_RANGE"),
            (ExErrorKind::OverlappingAssignment, "ERR_OVERLAPPING_ASSIGNMENT"),
            (ExErrorKind::UnknownParentStyle, "ERR_UNKNOWN_PARENT_STYLE"),
            (ExErrorKind::MalformedStyleString, "ERR_MALFORMED_STYLE_STRING"),
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_categories_follow_taxonomy() {
        assert_eq!(
            ExErrorKind::OverlappingAssignment.category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            ExErrorKind::MalformedStyleString.category(),
            ErrorCategory::Extraction
        );
        assert_eq!(ExErrorKind::Io.category(), ErrorCategory::Io);
    }

    #[test]
    fn test_overlap_converts_with_one_based_paragraph() {
        let err = CheckError::OverlappingAssignment {
            paragraph: 3,
            first_style: "HEADER".to_string(),
            second_style: "BODY".to_string(),
        };
        assert!(err.is_configuration());
        assert!(err.to_string().contains("paragraph #4"));

        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::OverlappingAssignment);
        assert_eq!(ex.paragraph(), Some(4));
        assert_eq!(ex.style(), Some("BODY"));
        assert_eq!(ex.op(), Some("build_style_index"));
    }

    #[test]
    fn test_every_kind_has_distinct_code_and_category() {
        let kinds = [
            ExErrorKind::ParagraphOutOfRange,
            ExErrorKind::OverlappingAssignment,
            ExErrorKind::UnknownParentStyle,
            ExErrorKind::SubstyleOutsideParent,
            ExErrorKind::DuplicateStyleName,
            ExErrorKind::MalformedStyleString,
            ExErrorKind::DuplicateProperty,
            ExErrorKind::InvalidInput,
            ExErrorKind::UnsupportedSchemaVersion,
            ExErrorKind::Io,
            ExErrorKind::Internal,
        ];
        let codes: std::collections::BTreeSet<_> = kinds.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), kinds.len());
        assert!(codes.iter().all(|c| c.starts_with("ERR_")));
        assert_eq!(ExErrorKind::UnsupportedSchemaVersion.category(), ErrorCategory::Input);
        assert_eq!(ExErrorKind::Internal.category(), ErrorCategory::Internal);
    }

    #[test]
    fn test_huge_paragraph_index_saturates() {
        let err = CheckError::ParagraphOutOfRange {
            owner: "BODY".to_string(),
            paragraph: usize::MAX,
            paragraph_count: 3,
        };
        assert!(err.to_string().contains(&format!("paragraph #{}", u32::MAX)));

        let ex: ExError = err.into();
        assert_eq!(ex.paragraph(), Some(u32::MAX));
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::MalformedStyleString)
            .with_op("document_parse")
            .with_message("missing ':'")
            .with_paragraph(2)
            .with_run(1);
        let s = err.to_string();
        assert!(s.starts_with("[ERR_MALFORMED_STYLE_STRING]"));
        assert!(s.contains("document_parse"));
        assert!(s.contains("(paragraph: #2)"));
        assert!(s.contains("(run: #1)"));
    }

    #[test]
    fn test_source_chain() {
        let inner = ExError::new(ExErrorKind::DuplicateProperty).with_message("bold");
        let outer = ExError::new(ExErrorKind::InvalidInput).with_source(inner);
        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(ExErrorKind::DuplicateProperty)
        );
        assert!(std::error::Error::source(&outer).is_some());
    }
}
