//! Evaluation tests against mock reports.

use crate::mocks::MockReport;
use disk_doc::{evaluate, DeviceType, Report, VerdictStatus};
use disk_doc::DiskDocError;
use serde_json::json;

fn messages(report: &Report) -> Vec<String> {
    evaluate(report)
        .unwrap()
        .failures
        .into_iter()
        .map(|f| f.message)
        .collect()
}

#[test]
fn test_healthy_sat_passes() {
    let verdict = evaluate(&MockReport::healthy_sat().build()).unwrap();

    assert_eq!(verdict.status, VerdictStatus::Pass);
    assert_eq!(verdict.device_type, DeviceType::Sat);
    assert!(verdict.failures.is_empty());
    assert!(verdict.notices.is_empty());
    assert_eq!(verdict.exit_code(), 0);
    assert_eq!(verdict.smart_status_passed, Some(true));
}

#[test]
fn test_reallocated_sectors_fail_with_return_code() {
    let report = MockReport::reallocated_sectors(8).build();
    let verdict = evaluate(&report).unwrap();

    assert_eq!(verdict.status, VerdictStatus::Fail);
    assert_eq!(
        messages(&report),
        vec![
            "Reallocated_Sector_Ct checkpoint failed: Value (8) is greater than 0.".to_string(),
            "smartctl-all command return code is not zero.".to_string(),
        ]
    );
    assert_eq!(verdict.failures[0].checkpoint, "SAT-001");
    assert_eq!(verdict.failures[1].checkpoint, "CMN-001");
    assert_eq!(verdict.exit_code(), 2);
}

#[test]
fn test_pending_sectors_read_from_top_level_table() {
    let mock = MockReport {
        pending_in_command: Some(0),
        pending_top_level: Some(3),
        ..MockReport::healthy_sat()
    };
    assert_eq!(
        messages(&mock.build()),
        vec!["Current_Pending_Sector checkpoint failed: Value (3) is greater than 0.".to_string()]
    );

    // A nonzero count inside the command payload alone is not consulted.
    let mock = MockReport {
        pending_in_command: Some(12),
        pending_top_level: Some(0),
        ..MockReport::healthy_sat()
    };
    assert!(messages(&mock.build()).is_empty());
}

#[test]
fn test_missing_attributes_are_warnings() {
    let mock = MockReport {
        reallocated: None,
        pending_top_level: None,
        ..MockReport::healthy_sat()
    };
    let verdict = evaluate(&mock.build()).unwrap();

    assert_eq!(verdict.status, VerdictStatus::Fail);
    assert_eq!(
        verdict
            .failures
            .iter()
            .map(|f| f.message.as_str())
            .collect::<Vec<_>>(),
        vec![
            "WARN: Reallocated_Sector_Ct not found.",
            "WARN: Current_Pending_Sector not found.",
        ]
    );
    assert!(verdict.failures.iter().all(|f| f.is_warning()));
    assert_eq!(verdict.summary().warnings, 2);
}

#[test]
fn test_nvme_notice_and_common_checks() {
    let verdict = evaluate(&MockReport::healthy_nvme().build()).unwrap();
    assert_eq!(verdict.device_type, DeviceType::Nvme);
    assert_eq!(verdict.status, VerdictStatus::Pass);
    assert_eq!(
        verdict.notices,
        vec!["NVMe checkpoint checks not implemented yet.".to_string()]
    );

    let mock = MockReport {
        smart_error_return_code: Some(4),
        ..MockReport::healthy_nvme()
    };
    assert_eq!(
        messages(&mock.build()),
        vec!["smartctl-error command return code is not zero.".to_string()]
    );
}

#[test]
fn test_unsupported_device_type_is_an_error() {
    let err = evaluate(&MockReport::unsupported(Some("scsi")).build()).unwrap_err();
    assert!(matches!(err, DiskDocError::UnsupportedDevice(ref t) if t == "scsi"));
    assert_eq!(err.to_string(), "Device type 'scsi' not supported.");

    let err = evaluate(&MockReport::unsupported(None).build()).unwrap_err();
    assert_eq!(err.to_string(), "Device type 'unknown' not supported.");
}

#[test]
fn test_device_type_is_case_sensitive() {
    let err = evaluate(&MockReport::unsupported(Some("SAT")).build()).unwrap_err();
    assert_eq!(err.to_string(), "Device type 'SAT' not supported.");
}

#[test]
fn test_missing_smart_all_command_is_unsupported() {
    let mock = MockReport {
        include_smart_all: false,
        ..MockReport::healthy_sat()
    };
    let err = evaluate(&mock.build()).unwrap_err();
    assert!(matches!(err, DiskDocError::UnsupportedDevice(_)));
}

#[test]
fn test_missing_return_codes_are_notices() {
    let mock = MockReport {
        smart_all_return_code: None,
        include_smart_error: false,
        ..MockReport::healthy_sat()
    };
    let verdict = evaluate(&mock.build()).unwrap();

    assert_eq!(verdict.status, VerdictStatus::Pass);
    assert_eq!(
        verdict.notices,
        vec![
            "WARN: unable to get the return code of smartctl-all command.".to_string(),
            "WARN: unable to get the return code of smartctl-error command.".to_string(),
        ]
    );
}

#[test]
fn test_tagged_records_resolve_by_id() {
    let mock = MockReport {
        tagged: true,
        ..MockReport::reallocated_sectors(2)
    };
    let report = mock.build();
    assert!(report.commands.iter().any(|c| c.id.as_deref() == Some("smartctl-all")));

    let verdict = evaluate(&report).unwrap();
    assert_eq!(verdict.device_type, DeviceType::Sat);
    assert_eq!(verdict.exit_code(), 2);
}

#[test]
fn test_first_matching_record_wins() {
    let mut document = MockReport::healthy_sat().to_json();
    let commands = document["commands"].as_array_mut().unwrap();

    // An extended-attributes record ahead of the full-attributes one does
    // not match its template and must not be picked up.
    commands.insert(
        0,
        json!({
            "command": "sudo smartctl -x --json=o {device}",
            "return_code": 4,
            "json_output": {"device": {"type": "scsi"}}
        }),
    );
    // A later duplicate of the full-attributes command is ignored.
    commands.push(json!({
        "command": "sudo smartctl -a --json=o {device}",
        "return_code": 1,
        "json_output": {"device": {"type": "nvme"}}
    }));

    let report: Report = serde_json::from_value(document).unwrap();
    let verdict = evaluate(&report).unwrap();
    assert_eq!(verdict.device_type, DeviceType::Sat);
    assert!(verdict.passed());
}

#[test]
fn test_malformed_payload_is_an_error() {
    let mut document = MockReport::healthy_sat().to_json();
    for command in document["commands"].as_array_mut().unwrap() {
        if command["command"] == "sudo smartctl -a --json=o {device}" {
            command["json_output"]["ata_smart_attributes"]["table"] = json!("not a table");
        }
    }
    let report: Report = serde_json::from_value(document).unwrap();

    assert!(matches!(evaluate(&report), Err(DiskDocError::Payload { .. })));
}

#[test]
fn test_evaluation_is_repeatable() {
    let report = MockReport::reallocated_sectors(1).build();
    assert_eq!(evaluate(&report).unwrap(), evaluate(&report).unwrap());
}

#[test]
fn test_sparse_attribute_rows_do_not_abort() {
    let mut document = MockReport::healthy_sat().to_json();
    for command in document["commands"].as_array_mut().unwrap() {
        if command["command"] == "sudo smartctl -a --json=o {device}" {
            command["json_output"]["ata_smart_attributes"]["table"] = json!([
                {"name": "Raw_Read_Error_Rate"},
                {"name": "Reallocated_Sector_Ct", "raw": {"value": 0}}
            ]);
        }
    }
    let report: Report = serde_json::from_value(document).unwrap();

    let verdict = evaluate(&report).unwrap();
    assert!(verdict.passed());
    assert_eq!(verdict.exit_code(), 0);
}

#[test]
fn test_nvme_with_sparse_attribute_table_passes() {
    let mut document = MockReport::healthy_nvme().to_json();
    for command in document["commands"].as_array_mut().unwrap() {
        if command["command"] == "sudo smartctl -a --json=o {device}" {
            command["json_output"]["ata_smart_attributes"] = json!({"table": [{"name": "X"}]});
        }
    }
    document["ata_smart_attributes"] = json!({"table": [{"name": "X"}]});
    let report: Report = serde_json::from_value(document).unwrap();

    let verdict = evaluate(&report).unwrap();
    assert_eq!(verdict.device_type, DeviceType::Nvme);
    assert!(verdict.passed());
}
