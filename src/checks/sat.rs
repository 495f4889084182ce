//! SAT checkpoints (SAT-001, SAT-002).
//!
//! Both read an attribute's raw value and fail when it is above zero. They
//! read from different tables: SAT-001 uses the attribute table captured by
//! the full-attributes command, SAT-002 uses the legacy table at the top
//! level of the report.

use super::RuleContext;
use crate::engine::result::{Failure, ResultAggregator};
use crate::report::AtaSmartAttributes;
use crate::{CheckFamily, Checkpoint};
use tracing::debug;

pub const REALLOCATED_SECTOR_CT: &str = "Reallocated_Sector_Ct";
pub const CURRENT_PENDING_SECTOR: &str = "Current_Pending_Sector";

/// Highest healthy raw value for sector-count attributes
const MAX_HEALTHY_RAW_VALUE: i64 = 0;

/// Get all SAT checkpoints
pub fn get_sat_checkpoints() -> Vec<Checkpoint> {
    vec![
        Checkpoint {
            id: "SAT-001",
            name: REALLOCATED_SECTOR_CT,
            family: CheckFamily::Sat,
            description: "No sectors have been remapped to the spare area",
        },
        Checkpoint {
            id: "SAT-002",
            name: CURRENT_PENDING_SECTOR,
            family: CheckFamily::Sat,
            description: "No unstable sectors are waiting to be remapped",
        },
    ]
}

/// Run the SAT rule-set
pub fn run(ctx: &RuleContext<'_>, results: &mut ResultAggregator) {
    results.add_failures(check_reallocated_sectors(ctx.smart_all_attributes()));
    results.add_failures(check_pending_sectors(ctx.report_attributes()));
}

/// SAT-001: Reallocated_Sector_Ct
pub fn check_reallocated_sectors(table: Option<&AtaSmartAttributes>) -> Option<Failure> {
    check_raw_value("SAT-001", REALLOCATED_SECTOR_CT, table)
}

/// SAT-002: Current_Pending_Sector
pub fn check_pending_sectors(table: Option<&AtaSmartAttributes>) -> Option<Failure> {
    check_raw_value("SAT-002", CURRENT_PENDING_SECTOR, table)
}

fn check_raw_value(
    checkpoint: &str,
    attribute: &str,
    table: Option<&AtaSmartAttributes>,
) -> Option<Failure> {
    let Some(entry) = table.and_then(|t| t.find(attribute)) else {
        debug!(checkpoint, attribute, "attribute not found");
        return Some(Failure::warning(checkpoint, format!("{} not found.", attribute)));
    };

    let Some(value) = entry.raw_value() else {
        debug!(checkpoint, attribute, "attribute has no raw value");
        return Some(Failure::warning(
            checkpoint,
            format!("{} raw value not found.", attribute),
        ));
    };
    debug!(checkpoint, attribute, value, "attribute raw value");

    if value > MAX_HEALTHY_RAW_VALUE {
        Some(Failure::violation(
            checkpoint,
            format!(
                "{} checkpoint failed: Value ({}) is greater than {}.",
                attribute, value, MAX_HEALTHY_RAW_VALUE
            ),
        ))
    } else {
        None
    }
}
