//! Read-only report tools
//!
//! - `info`: Print the device identity captured in a report
//! - `notes`: Print the report's free-text notes
//! - `filename`: Suggest a descriptive filename for a report
//!
//! Each `run` returns the lines to print so the binary owns stdout.

pub mod filename;
pub mod info;
pub mod notes;
