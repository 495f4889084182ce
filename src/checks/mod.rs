//! Checkpoint rule-sets.
//!
//! - SAT: ATA attribute checks read from smartctl's attribute table
//! - NVMe: placeholder, contributes no failures yet
//! - Common: command exit-status checks shared by every device family
//!
//! # Degradation
//!
//! Rules never abort an evaluation:
//! - Attribute missing: warning failure entry (counts toward FAIL)
//! - Command or return code missing: notice only
//! - Threshold exceeded or nonzero exit status: failure entry
//!
//! Only the evaluator decides to stop early, on an unsupported device type.

pub mod common;
pub mod nvme;
pub mod sat;

use crate::report::{AtaSmartAttributes, CommandKind, Report, SmartctlOutput};
use crate::{CheckFamily, Checkpoint, DiskDocError};
use std::fmt;

/// Device type reported when the payload does not name one
pub const UNKNOWN_DEVICE_TYPE: &str = "unknown";

/// Device family that selects the rule-set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeviceType {
    /// SCSI/ATA Translation
    Sat,
    Nvme,
    /// Any other reported type, kept verbatim
    Unsupported(String),
}

impl DeviceType {
    /// Map smartctl's `device.type` string (case-sensitive).
    pub fn parse(value: &str) -> Self {
        match value {
            "sat" => DeviceType::Sat,
            "nvme" => DeviceType::Nvme,
            other => DeviceType::Unsupported(other.to_string()),
        }
    }

    /// Read `device.type` from the full-attributes payload.
    pub fn from_payload(payload: Option<&SmartctlOutput>) -> Self {
        let value = payload
            .and_then(|output| output.device.as_ref())
            .and_then(|device| device.device_type.as_deref())
            .unwrap_or(UNKNOWN_DEVICE_TYPE);
        Self::parse(value)
    }

    /// Resolve the device type of a report.
    ///
    /// Only the full-attributes command is consulted, whichever other
    /// commands the report contains. Its decoded payload is returned along
    /// with the type so rules can read it without decoding again.
    pub fn resolve(report: &Report) -> Result<(Self, Option<SmartctlOutput>), DiskDocError> {
        let payload = match report.command(CommandKind::SmartAll) {
            Some(record) => record.smartctl_output()?,
            None => None,
        };
        Ok((Self::from_payload(payload.as_ref()), payload))
    }

    pub fn as_str(&self) -> &str {
        match self {
            DeviceType::Sat => "sat",
            DeviceType::Nvme => "nvme",
            DeviceType::Unsupported(other) => other,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, DeviceType::Unsupported(_))
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs shared by every rule during one evaluation
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub report: &'a Report,
    /// Decoded payload of the full-attributes command
    pub smart_all: Option<&'a SmartctlOutput>,
}

impl<'a> RuleContext<'a> {
    pub fn new(report: &'a Report, smart_all: Option<&'a SmartctlOutput>) -> Self {
        RuleContext { report, smart_all }
    }

    /// Attribute table captured by the full-attributes command
    pub fn smart_all_attributes(&self) -> Option<&'a AtaSmartAttributes> {
        self.smart_all
            .and_then(|output| output.ata_smart_attributes.as_ref())
    }

    /// Attribute table stored at the top level of the report
    pub fn report_attributes(&self) -> Option<&'a AtaSmartAttributes> {
        self.report.ata_smart_attributes.as_ref()
    }
}

/// Get all registered checkpoints, in evaluation order per family
pub fn get_all_checkpoints() -> Vec<Checkpoint> {
    let mut checkpoints = Vec::new();
    checkpoints.extend(sat::get_sat_checkpoints());
    checkpoints.extend(nvme::get_nvme_checkpoints());
    checkpoints.extend(common::get_common_checkpoints());
    checkpoints
}

/// Get checkpoints for a specific family
pub fn get_checkpoints_by_family(family: CheckFamily) -> Vec<Checkpoint> {
    match family {
        CheckFamily::Sat => sat::get_sat_checkpoints(),
        CheckFamily::Nvme => nvme::get_nvme_checkpoints(),
        CheckFamily::Common => common::get_common_checkpoints(),
    }
}
