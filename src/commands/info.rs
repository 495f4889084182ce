//! Device info command
//!
//! Prints the identity block smartctl captured for the device, without
//! making any pass/fail judgement.

use crate::report::{CommandKind, Report};
use crate::DiskDocError;
use std::path::Path;

/// Run the info command
pub fn run(path: &Path) -> Result<Vec<String>, DiskDocError> {
    let report = Report::load(path)?;
    device_info_lines(&report)
}

/// smartctl's plain-text identity lines, empty when not captured
pub fn device_info_lines(report: &Report) -> Result<Vec<String>, DiskDocError> {
    let Some(record) = report.command(CommandKind::SmartInfo) else {
        return Ok(Vec::new());
    };

    Ok(record
        .smartctl_output()?
        .and_then(|output| output.smartctl)
        .map(|meta| meta.output)
        .unwrap_or_default())
}
