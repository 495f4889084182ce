//! NVMe checkpoints.
//!
//! No checkpoints are defined for NVMe devices yet; the rule-set only
//! records a notice so the verdict shows the gap.

use super::RuleContext;
use crate::engine::result::ResultAggregator;
use crate::Checkpoint;
use tracing::debug;

pub const NOT_IMPLEMENTED_NOTICE: &str = "NVMe checkpoint checks not implemented yet.";

/// Get all NVMe checkpoints
pub fn get_nvme_checkpoints() -> Vec<Checkpoint> {
    Vec::new()
}

/// Run the NVMe rule-set
pub fn run(_ctx: &RuleContext<'_>, results: &mut ResultAggregator) {
    debug!("no NVMe checkpoints registered");
    results.add_notice(NOT_IMPLEMENTED_NOTICE);
}
