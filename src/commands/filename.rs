//! Filename suggestion command
//!
//! Builds `device_report_<model>_<serial>_<yymmdd-HHMMSS>.json` from the
//! report's identity and capture time.

use crate::report::Report;
use crate::DiskDocError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use std::path::Path;

const UNKNOWN_MODEL: &str = "unknown_model";
const UNKNOWN_SERIAL: &str = "unknown_serial";
const EPOCH_TIMESTAMP: &str = "1970-01-01T00:00:00";

/// Run the filename command
pub fn run(path: &Path) -> Result<Vec<String>, DiskDocError> {
    let report = Report::load(path)?;
    Ok(vec![format!("Suggested Filename: {}", suggest_filename(&report)?)])
}

/// Suggested filename for a report
pub fn suggest_filename(report: &Report) -> Result<String, DiskDocError> {
    let device = report.device.as_ref();
    let model = device
        .and_then(|d| d.model.as_deref())
        .unwrap_or(UNKNOWN_MODEL);
    let serial = device
        .and_then(|d| d.serial_number.as_deref())
        .unwrap_or(UNKNOWN_SERIAL);

    let generated_on = report.generated_on.as_deref().unwrap_or(EPOCH_TIMESTAMP);
    let timestamp = parse_timestamp(generated_on)?;

    Ok(format!(
        "device_report_{}_{}_{}.json",
        sanitize(model),
        sanitize(serial),
        timestamp.format("%y%m%d-%H%M%S")
    ))
}

/// Replace every character that is not an ASCII letter or digit with '-'
fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// Date-time layouts tried in order; seconds and fractions are optional
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO 8601 timestamp, keeping the wall-clock time as written
fn parse_timestamp(value: &str) -> Result<NaiveDateTime, DiskDocError> {
    if let Some(ts) = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Ok(ts);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.naive_local());
    }
    // Hour only, e.g. "2024-01-02T03"; chrono needs a minute to build a time.
    if let Ok(ts) = NaiveDateTime::parse_from_str(&format!("{}:00", value), "%Y-%m-%dT%H:%M") {
        return Ok(ts);
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|source| DiskDocError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}
