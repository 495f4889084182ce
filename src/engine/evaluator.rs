//! Report evaluation.
//!
//! Evaluation runs in a fixed sequence:
//!
//! 1. Resolve the device type from the full-attributes command, once.
//! 2. Stop with [`DiskDocError::UnsupportedDevice`] unless it is `sat` or
//!    `nvme`. Common checkpoints are not run in that case.
//! 3. Run the family rule-set, then the common rule-set, into one list.
//! 4. Any entry in the list fails the report.
//!
//! Evaluation does not print. Rendering is left to
//! [`crate::cli::output`], so the same verdict can be shown as text or JSON.

use crate::checks::{common, nvme, sat, DeviceType, RuleContext};
use crate::engine::result::{ResultAggregator, Verdict};
use crate::report::Report;
use crate::DiskDocError;
use tracing::debug;

/// Evaluates one report
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    report: &'a Report,
}

impl<'a> Evaluator<'a> {
    pub fn new(report: &'a Report) -> Self {
        Evaluator { report }
    }

    /// Evaluate every applicable checkpoint and build the verdict.
    pub fn evaluate(&self) -> Result<Verdict, DiskDocError> {
        let (device_type, smart_all) = DeviceType::resolve(self.report)?;
        debug!(device_type = %device_type, "resolved device type");

        let ctx = RuleContext::new(self.report, smart_all.as_ref());
        let mut results = ResultAggregator::new();

        match &device_type {
            DeviceType::Sat => sat::run(&ctx, &mut results),
            DeviceType::Nvme => nvme::run(&ctx, &mut results),
            DeviceType::Unsupported(other) => {
                return Err(DiskDocError::UnsupportedDevice(other.clone()));
            }
        }

        common::run(&ctx, &mut results);

        let verdict = results.into_verdict(device_type, self.report.smart_status_passed());
        debug!(
            status = %verdict.status,
            failures = verdict.failures.len(),
            notices = verdict.notices.len(),
            "evaluation complete"
        );
        Ok(verdict)
    }
}
