//! Captured device report model.
//!
//! A report is the JSON document written by the capture tooling: device
//! identity, a generation timestamp, free-text notes and one record per
//! diagnostic command that was run against the device.
//!
//! # Shape
//!
//! Every level of the document is optional except the `command` key of each
//! record. Missing sections decode to `None` (or an empty list) so callers
//! can tell "not captured" apart from "captured and healthy". Command
//! payloads (`json_output`) are kept as raw JSON and decoded on demand, since
//! each tool emits its own shape and only a few are ever inspected.

pub mod lookup;

use crate::DiskDocError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

pub use lookup::{find_command, lookup, CommandKind};

/// A captured device diagnostic report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_name: Option<String>,
    /// ISO 8601 timestamp of capture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceIdentity>,
    /// Command records in capture order
    #[serde(default)]
    pub commands: Vec<CommandRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smart_status: Option<SmartStatus>,
    /// Legacy attribute table stored at the top level of older reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ata_smart_attributes: Option<AtaSmartAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Device identity as recorded by the capture tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

/// One diagnostic command invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Stable command tag (see [`CommandKind::tag`]); absent in legacy reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Command template, e.g. `sudo smartctl -a --json=o {device}`
    pub command: String,
    /// The literal command line that was executed
    #[serde(default)]
    pub command_line: String,
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_code: Option<i64>,
    /// Wall time in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_used: Option<f64>,
    /// Parsed stdout, present when the command printed valid JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_output: Option<Value>,
}

impl CommandRecord {
    /// Decode the structured payload as `smartctl --json` output.
    ///
    /// Returns `Ok(None)` when the record carries no payload, and an error
    /// when the payload is present but not shaped like smartctl output.
    pub fn smartctl_output(&self) -> Result<Option<SmartctlOutput>, DiskDocError> {
        match &self.json_output {
            None => Ok(None),
            Some(payload) => SmartctlOutput::deserialize(payload)
                .map(Some)
                .map_err(|source| DiskDocError::Payload {
                    command: self.command.clone(),
                    source,
                }),
        }
    }
}

/// The subset of `smartctl --json` output the tool inspects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmartctlOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smartctl: Option<SmartctlMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smart_status: Option<SmartStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ata_smart_attributes: Option<AtaSmartAttributes>,
}

/// smartctl's own metadata block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmartctlMeta {
    /// Plain-text output lines, included with `--json=o`
    #[serde(default)]
    pub output: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    /// Device family as reported by smartctl: `sat`, `nvme`, `scsi`, ...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
}

/// Overall SMART self-assessment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmartStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passed: Option<bool>,
}

/// ATA SMART attribute table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtaSmartAttributes {
    #[serde(default)]
    pub table: Vec<AttributeEntry>,
}

impl AtaSmartAttributes {
    /// First attribute with the given name. Names are unique in practice.
    ///
    /// Entries without a name are skipped; other entries are never
    /// inspected beyond their name.
    pub fn find(&self, name: &str) -> Option<&AttributeEntry> {
        self.table
            .iter()
            .find(|entry| entry.name.as_deref() == Some(name))
    }
}

/// One row of the attribute table. Vendors omit columns freely, so every
/// field is optional and only the matched row is read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<RawValue>,
}

impl AttributeEntry {
    /// The raw counter, if the row carries one
    pub fn raw_value(&self) -> Option<i64> {
        self.raw.as_ref().and_then(|raw| raw.value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl Report {
    /// Read and decode a report file.
    pub fn load(path: &Path) -> Result<Self, DiskDocError> {
        let content = fs::read_to_string(path).map_err(|source| DiskDocError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let report = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            commands = report.commands.len(),
            "loaded device report"
        );
        Ok(report)
    }

    /// Decode a report from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, DiskDocError> {
        serde_json::from_str(content).map_err(|source| DiskDocError::Parse { source })
    }

    /// Resolve a well-known command record.
    pub fn command(&self, kind: CommandKind) -> Option<&CommandRecord> {
        lookup(self, kind)
    }

    /// The report's overall SMART verdict, when it was recorded.
    pub fn smart_status_passed(&self) -> Option<bool> {
        self.smart_status.as_ref().and_then(|status| status.passed)
    }
}
