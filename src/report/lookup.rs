//! Command record lookup.
//!
//! Current capture tooling tags each record with a stable `id`, which makes
//! lookup an exact match. Older reports only carry the command template, so
//! lookups fall back to substring matching on it: the first record (in
//! capture order) whose `command` contains the template wins.

use super::{CommandRecord, Report};
use std::fmt;
use tracing::debug;

/// Diagnostic commands the checkpoints know how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Full SMART information and attributes
    SmartAll,
    /// Errors-only health, self-test log and error log
    SmartErrors,
    /// Device identity
    SmartInfo,
}

impl CommandKind {
    pub const ALL: [CommandKind; 3] = [
        CommandKind::SmartAll,
        CommandKind::SmartErrors,
        CommandKind::SmartInfo,
    ];

    /// Stable identifier stored in a record's `id` field
    pub fn tag(self) -> &'static str {
        match self {
            CommandKind::SmartAll => "smartctl-all",
            CommandKind::SmartErrors => "smartctl-error",
            CommandKind::SmartInfo => "smartctl-info",
        }
    }

    /// Command template used by legacy reports
    pub fn template(self) -> &'static str {
        match self {
            CommandKind::SmartAll => "sudo smartctl -a --json=o {device}",
            CommandKind::SmartErrors => {
                "sudo smartctl -q errorsonly -A -H -l selftest -l error --json=o {device}"
            }
            CommandKind::SmartInfo => "sudo smartctl -i --json=o {device}",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// First record whose `command` contains `pattern`.
pub fn find_command<'a>(report: &'a Report, pattern: &str) -> Option<&'a CommandRecord> {
    report
        .commands
        .iter()
        .find(|record| record.command.contains(pattern))
}

/// Resolve a well-known command: exact tag first, then the legacy template.
pub fn lookup(report: &Report, kind: CommandKind) -> Option<&CommandRecord> {
    let tagged = report
        .commands
        .iter()
        .find(|record| record.id.as_deref() == Some(kind.tag()));
    if tagged.is_some() {
        return tagged;
    }

    let legacy = find_command(report, kind.template());
    match legacy {
        Some(record) => debug!(
            command = %kind,
            matched = %record.command,
            "resolved untagged command by template"
        ),
        None => debug!(command = %kind, "command not present in report"),
    }
    legacy
}
