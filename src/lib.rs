//! disk-doc library
//!
//! Storage device health verdicts from captured diagnostic reports.
//!
//! A report is a JSON snapshot of `smartctl` (and other tool) output taken
//! from one block device. This library reads it back and decides whether the
//! device is healthy:
//! - Device family resolution (`sat`, `nvme`, or unsupported)
//! - Family checkpoints, e.g. reallocated and pending sector counts
//! - Common checkpoints on the SMART commands' exit status
//! - Read-only report helpers: device info, notes, filename suggestion
//!
//! # Example
//!
//! ```no_run
//! use disk_doc::{evaluate, Report};
//! use std::path::Path;
//!
//! let report = Report::load(Path::new("report.json")).expect("readable report");
//! let verdict = evaluate(&report).expect("supported device");
//! println!("Overall Status: {}", verdict.status);
//! ```

pub mod checks;
pub mod cli;
pub mod commands;
pub mod engine;
pub mod report;
pub mod version;

use cli::args::{CheckArgs, OutputFormat};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// Re-exports for public API
pub use checks::DeviceType;
pub use engine::evaluator::Evaluator;
pub use engine::result::{Failure, ResultSummary, Verdict, VerdictStatus};
pub use report::{CommandKind, CommandRecord, Report};

/// Device family a checkpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckFamily {
    /// SCSI/ATA Translation devices
    Sat,
    /// NVMe devices
    Nvme,
    /// Every supported device
    Common,
}

impl fmt::Display for CheckFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckFamily::Sat => write!(f, "SAT"),
            CheckFamily::Nvme => write!(f, "NVMe"),
            CheckFamily::Common => write!(f, "Common"),
        }
    }
}

/// A named health condition the engine evaluates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    /// Unique identifier (e.g., "SAT-001")
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    pub family: CheckFamily,
    /// What a passing checkpoint means
    pub description: &'static str,
}

/// Error types for disk-doc operations.
#[derive(Debug, Error)]
pub enum DiskDocError {
    /// Report file could not be read
    #[error("cannot read report '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Report is not valid JSON or not shaped like a report
    #[error("malformed report: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
    /// A command's structured output is not shaped as expected
    #[error("unexpected output for command '{command}': {source}")]
    Payload {
        command: String,
        #[source]
        source: serde_json::Error,
    },
    /// No rule-set exists for the reported device type
    #[error("Device type '{0}' not supported.")]
    UnsupportedDevice(String),
    /// `generated_on` is not an ISO 8601 timestamp
    #[error("invalid generated_on timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Configuration for evaluating a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Report file to evaluate
    pub report_path: PathBuf,
    /// How the verdict is rendered
    pub format: OutputFormat,
}

impl CheckConfig {
    /// Create configuration from command line arguments
    pub fn from_args(args: &CheckArgs) -> Self {
        CheckConfig {
            report_path: args.report.clone(),
            format: args.format,
        }
    }
}

/// Evaluate an already loaded report.
pub fn evaluate(report: &Report) -> Result<Verdict, DiskDocError> {
    Evaluator::new(report).evaluate()
}

/// Load the configured report and evaluate it.
///
/// # Errors
///
/// Returns `DiskDocError::Io` or `DiskDocError::Parse` when the report
/// cannot be read, and `DiskDocError::UnsupportedDevice` when the device
/// family has no rule-set. Checkpoint failures are not errors; they are
/// listed in the returned `Verdict`.
pub fn run_check(config: &CheckConfig) -> Result<Verdict, DiskDocError> {
    let report = Report::load(&config.report_path)?;
    evaluate(&report)
}
