//! Check command
//!
//! Usage: stylecheck check --spec <FILE> --document <FILE> [--format text|json]

use crate::commands::Status;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use stylecheck_core::check::DEFAULT_PREVIEW_LEN;
use stylecheck_core::core_types::RunId;
use stylecheck_core::errors::ExError;
use stylecheck_core::report::render_text_report;
use stylecheck_core::{check_document, CheckOptions};
use stylecheck_loader::{load_document_file, load_spec_file, DEFAULT_SUBSTYLE_PREFIX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to the style specification (YAML)
    #[arg(long)]
    pub spec: PathBuf,

    /// Path to the extracted document (JSON or YAML)
    #[arg(long)]
    pub document: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Section prefix marking substyles
    #[arg(long, default_value = DEFAULT_SUBSTYLE_PREFIX)]
    pub substyle_prefix: String,

    /// Characters of paragraph text shown in the report
    #[arg(long, default_value_t = DEFAULT_PREVIEW_LEN)]
    pub preview_len: usize,

    /// Exit with status 2 when the report has findings
    #[arg(long)]
    pub strict: bool,
}

/// Execute check command
pub fn execute(args: CheckArgs) -> Result<Status, Box<dyn std::error::Error>> {
    let run_id = RunId::new();
    let options = CheckOptions::default()
        .with_preview_len(args.preview_len)
        .with_run_id(run_id.clone());

    let (styles, substyles) = load_spec_file(&args.spec, &args.substyle_prefix)?;
    let paragraphs = load_document_file(&args.document)?;

    let report = check_document(styles, substyles, &paragraphs, &options)
        .map_err(|e| ExError::from(e).with_run_id(run_id))?;

    let rendered = match args.format {
        OutputFormat::Text => render_text_report(&report),
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    if args.strict && !report.is_clean() {
        return Ok(Status::Findings);
    }
    Ok(Status::Clean)
}
