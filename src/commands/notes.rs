//! Report notes command

use crate::report::Report;
use crate::DiskDocError;
use std::path::Path;

/// Run the notes command
pub fn run(path: &Path) -> Result<Vec<String>, DiskDocError> {
    let report = Report::load(path)?;
    Ok(vec![report_notes(&report).to_string()])
}

/// The report's notes, or an empty string
pub fn report_notes(report: &Report) -> &str {
    report.notes.as_deref().unwrap_or_default()
}
