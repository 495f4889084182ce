//! `disk-doc version` output.
//!
//! The build script records where the binary came from so a verdict can be
//! traced back to the exact rule-set that produced it.

use std::fmt;

/// Provenance of the running binary
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Short git hash, absent outside a checkout
    pub commit: Option<&'static str>,
    pub build_date: Option<&'static str>,
    pub target: &'static str,
    pub rustc_version: Option<&'static str>,
}

impl BuildInfo {
    /// Labelled detail lines, skipping what the build could not record
    fn details(&self) -> Vec<(&'static str, &'static str)> {
        [
            ("Commit", self.commit),
            ("Built", self.build_date),
            ("Target", Some(self.target)),
            ("Rustc", self.rustc_version),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk-doc {}", self.version)?;
        for (label, value) in self.details() {
            write!(f, "\n{}: {}", label, value)?;
        }
        Ok(())
    }
}

/// Build information baked in at compile time
pub fn get_build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("DISK_DOC_GIT_HASH"),
        build_date: option_env!("DISK_DOC_BUILD_DATE"),
        target: option_env!("DISK_DOC_TARGET").unwrap_or(std::env::consts::ARCH),
        rustc_version: option_env!("DISK_DOC_RUSTC_VERSION"),
    }
}
