//! Result aggregation.
//!
//! Collects checkpoint failures and notices in evaluation order and turns
//! them into a [`Verdict`].

use crate::checks::DeviceType;
use std::fmt;

/// Prefix marking a failure entry as "could not verify" rather than
/// "verification failed"
pub const WARN_PREFIX: &str = "WARN: ";

/// One failed or unverifiable checkpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Checkpoint identifier (e.g., "SAT-001")
    pub checkpoint: String,
    /// Human-readable failure line
    pub message: String,
}

impl Failure {
    /// A checkpoint whose observed value violated its threshold
    pub fn violation(checkpoint: &str, message: impl Into<String>) -> Self {
        Failure {
            checkpoint: checkpoint.to_string(),
            message: message.into(),
        }
    }

    /// A checkpoint whose input could not be found
    pub fn warning(checkpoint: &str, message: impl AsRef<str>) -> Self {
        Failure {
            checkpoint: checkpoint.to_string(),
            message: format!("{}{}", WARN_PREFIX, message.as_ref()),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.message.starts_with(WARN_PREFIX)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Overall outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictStatus {
    Pass,
    Fail,
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerdictStatus::Pass => write!(f, "PASS"),
            VerdictStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// Result summary statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSummary {
    pub violations: u32,
    pub warnings: u32,
    pub total: u32,
}

/// Verdict for one evaluated report
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub device_type: DeviceType,
    /// Failures in rule order
    pub failures: Vec<Failure>,
    /// Diagnostics that do not affect the verdict
    pub notices: Vec<String>,
    /// The report's own SMART self-assessment, if recorded
    pub smart_status_passed: Option<bool>,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        self.status == VerdictStatus::Pass
    }

    /// Process exit status: the number of failures, saturated at 255.
    pub fn exit_code(&self) -> u8 {
        u8::try_from(self.failures.len()).unwrap_or(u8::MAX)
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary::default();

        for failure in &self.failures {
            summary.total += 1;
            if failure.is_warning() {
                summary.warnings += 1;
            } else {
                summary.violations += 1;
            }
        }

        summary
    }
}

/// Result aggregator for collecting checkpoint output
#[derive(Debug, Default)]
pub struct ResultAggregator {
    failures: Vec<Failure>,
    notices: Vec<String>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_failure(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    /// Add any number of failures; accepts `Option<Failure>` as well.
    pub fn add_failures(&mut self, failures: impl IntoIterator<Item = Failure>) {
        self.failures.extend(failures);
    }

    pub fn add_notice(&mut self, notice: impl Into<String>) {
        self.notices.push(notice.into());
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Create the final verdict
    pub fn into_verdict(self, device_type: DeviceType, smart_status_passed: Option<bool>) -> Verdict {
        let status = if self.has_failures() {
            VerdictStatus::Fail
        } else {
            VerdictStatus::Pass
        };

        Verdict {
            status,
            device_type,
            failures: self.failures,
            notices: self.notices,
            smart_status_passed,
        }
    }
}
