//! Output formatting for disk-doc.
//!
//! Provides text and JSON verdict formatters.
//!
//! The text layout is the stable interface other tools parse:
//!
//! ```text
//! <notice lines, if any>
//! Overall Status: FAIL
//!   - <failure>
//!   - <failure>
//! ```

use crate::cli::args::OutputFormat;
use crate::engine::result::Verdict;
use serde_json::json;
use std::fmt::Display;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a verdict into a string without a trailing newline
    fn format(&self, verdict: &Verdict) -> String;
}

/// Plain text formatter
#[derive(Debug, Default)]
pub struct TerminalFormatter;

impl TerminalFormatter {
    pub fn new() -> Self {
        TerminalFormatter
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, verdict: &Verdict) -> String {
        let mut lines: Vec<String> = verdict.notices.clone();

        lines.push(format!("Overall Status: {}", verdict.status));
        for failure in &verdict.failures {
            lines.push(format!("  - {}", failure));
        }

        lines.join("\n")
    }
}

/// JSON formatter
#[derive(Debug)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, verdict: &Verdict) -> String {
        let summary = verdict.summary();
        let failures: Vec<_> = verdict
            .failures
            .iter()
            .map(|failure| {
                json!({
                    "checkpoint": failure.checkpoint,
                    "message": failure.message,
                    "warning": failure.is_warning(),
                })
            })
            .collect();

        let document = json!({
            "status": verdict.status.to_string(),
            "device_type": verdict.device_type.as_str(),
            "exit_code": verdict.exit_code(),
            "smart_status_passed": verdict.smart_status_passed,
            "summary": {
                "violations": summary.violations,
                "warnings": summary.warnings,
                "total": summary.total,
            },
            "failures": failures,
            "notices": verdict.notices,
        });

        if self.pretty {
            format!("{:#}", document)
        } else {
            document.to_string()
        }
    }
}

/// Get a formatter based on the output format
pub fn get_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TerminalFormatter::new()),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}

/// Format a top-level error as the single line printed in place of a verdict
pub fn format_error(err: &impl Display) -> String {
    format!("ERROR: {}", err)
}
