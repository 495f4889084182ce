//! Command line arguments for disk-doc.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Parsed command line arguments
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "disk-doc",
    about = "Check the health of a storage device from a captured diagnostic report"
)]
pub struct Args {
    /// Enable verbose (info-level) logging to stderr.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Enable debug-level logging to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Command to execute
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Evaluate a report and print the overall status.
    Check(CheckArgs),
    /// Print the device identity captured in a report.
    Info(ReportArgs),
    /// Print the free-text notes stored in a report.
    Notes(ReportArgs),
    /// Suggest a descriptive filename for a report.
    Filename(ReportArgs),
    /// List the checkpoints evaluated per device family.
    List,
    /// Print version information.
    Version,
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct CheckArgs {
    /// JSON report file to analyze.
    #[arg(long, short = 'r')]
    pub report: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct ReportArgs {
    /// Path to the report JSON file (e.g., report.json).
    #[arg(long, short = 'r')]
    pub report: PathBuf,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable status lines
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}
