//! stylecheck CLI
//!
//! Command-line interface for style conformance checking

use clap::{Parser, Subcommand, ValueEnum};
use stylecheck_core::logging_facility::{init, Profile};

mod commands;

use commands::Status;

#[derive(Debug, Parser)]
#[command(name = "stylecheck")]
#[command(about = "stylecheck - Document style conformance checking", long_about = None)]
struct Cli {
    /// Logging profile; logs go to stderr
    #[arg(long, global = true, value_enum)]
    log: Option<LogProfile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    /// Human-readable debug logs
    Dev,
    /// JSON info logs
    Prod,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check a document against a style specification
    Check(commands::check::CheckArgs),
    /// Validate a style specification, optionally against a document
    Validate(commands::validate::ValidateArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.log {
        Some(LogProfile::Dev) => init(Profile::Development),
        Some(LogProfile::Prod) => init(Profile::Production),
        None if std::env::var_os("RUST_LOG").is_some() => init(Profile::Development),
        None => {}
    }

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
    };

    match result {
        Ok(Status::Clean) => {}
        Ok(Status::Findings) => std::process::exit(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
