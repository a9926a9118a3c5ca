//! Validate command
//!
//! Usage: stylecheck validate --spec <FILE> [--document <FILE>]

use crate::commands::Status;
use clap::Args;
use std::path::PathBuf;
use stylecheck_core::errors::ExError;
use stylecheck_core::StyleIndex;
use stylecheck_loader::{load_document_file, load_spec_file, DEFAULT_SUBSTYLE_PREFIX};

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the style specification (YAML)
    #[arg(long)]
    pub spec: PathBuf,

    /// Also build the style index against this extracted document
    #[arg(long)]
    pub document: Option<PathBuf>,

    /// Section prefix marking substyles
    #[arg(long, default_value = DEFAULT_SUBSTYLE_PREFIX)]
    pub substyle_prefix: String,
}

/// Execute validate command
pub fn execute(args: ValidateArgs) -> Result<Status, Box<dyn std::error::Error>> {
    let (styles, substyles) = load_spec_file(&args.spec, &args.substyle_prefix)?;
    println!(
        "Spec OK: {} styles, {} substyles",
        styles.len(),
        substyles.len()
    );

    if let Some(document) = &args.document {
        let paragraphs = load_document_file(document)?;
        let index = StyleIndex::build(styles, substyles, paragraphs.len()).map_err(ExError::from)?;
        println!(
            "Document OK: {} of {} paragraphs assigned to styles",
            index.covered_paragraphs().count(),
            paragraphs.len()
        );
    }

    Ok(Status::Clean)
}
