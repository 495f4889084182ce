//! Common checkpoints (CMN-001, CMN-002).
//!
//! smartctl encodes detected problems in its exit status bits, so a nonzero
//! return code from either SMART command fails the device regardless of
//! family.

use super::RuleContext;
use crate::engine::result::{Failure, ResultAggregator};
use crate::report::{CommandKind, Report};
use crate::{CheckFamily, Checkpoint};
use tracing::debug;

/// Get all common checkpoints
pub fn get_common_checkpoints() -> Vec<Checkpoint> {
    vec![
        Checkpoint {
            id: "CMN-001",
            name: "smartctl-all return code",
            family: CheckFamily::Common,
            description: "Full SMART attribute query exited with status 0",
        },
        Checkpoint {
            id: "CMN-002",
            name: "smartctl-error return code",
            family: CheckFamily::Common,
            description: "Errors-only health, self-test and error log query exited with status 0",
        },
    ]
}

/// Run the common rule-set
pub fn run(ctx: &RuleContext<'_>, results: &mut ResultAggregator) {
    check_return_code("CMN-001", CommandKind::SmartAll, ctx.report, results);
    check_return_code("CMN-002", CommandKind::SmartErrors, ctx.report, results);
}

/// Fail when the command exited nonzero; note it when the code is unknown.
pub fn check_return_code(
    checkpoint: &str,
    kind: CommandKind,
    report: &Report,
    results: &mut ResultAggregator,
) {
    match report.command(kind).and_then(|record| record.return_code) {
        None => {
            results.add_notice(format!(
                "WARN: unable to get the return code of {} command.",
                kind
            ));
        }
        Some(0) => {}
        Some(code) => {
            debug!(checkpoint, command = %kind, code, "nonzero return code");
            results.add_failure(Failure::violation(
                checkpoint,
                format!("{} command return code is not zero.", kind),
            ));
        }
    }
}
