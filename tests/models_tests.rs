// Batch assembly from lookup responses and JSON wire shapes

mod common;

use common::{imei, lookup_device};
use imei_status::models::*;
use serde_json::json;

#[test]
fn lookup_response_deserializes_camel_case() {
    let body = json!({
        "devices": [
            { "imei": "111111111111111", "lastTime": "2024-05-01 12:00:00", "daysOffline": 3,
              "data": [ { "imei": "111111111111111", "csq": 20 } ] }
        ],
        "rawData": [ { "imei": "111111111111111" } ]
    });
    let response: LookupResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.devices.len(), 1);
    assert_eq!(response.devices[0].days_offline, Some(3));
    assert_eq!(response.devices[0].last_time.as_deref(), Some("2024-05-01 12:00:00"));
    assert_eq!(response.raw_data.len(), 1);
}

#[test]
fn missing_collections_default_to_empty() {
    let response: LookupResponse = serde_json::from_str("{}").unwrap();
    assert!(response.devices.is_empty());
    assert!(response.raw_data.is_empty());
}

#[test]
fn from_response_diffs_unresolved_in_submission_order() {
    let requested = vec![imei(3), imei(1), imei(2)];
    let response = LookupResponse {
        devices: vec![lookup_device(&imei(1), Some(0), "2024-05-01 12:00:00")],
        raw_data: vec![],
    };
    let batch = BatchResult::from_response(&requested, response);
    assert_eq!(batch.devices.len(), 1);
    assert_eq!(batch.unresolved, vec![imei(3), imei(2)]);
}

#[test]
fn payload_imei_overrides_top_level_imei() {
    let mut entry = lookup_device(&imei(9), Some(4), "2024-05-01 12:00:00");
    entry.imei = Some("garbage".into());
    let batch = BatchResult::from_response(
        &[imei(9)],
        LookupResponse {
            devices: vec![entry],
            raw_data: vec![],
        },
    );
    assert_eq!(batch.devices[0].imei, imei(9));
    assert!(batch.unresolved.is_empty());
    assert_eq!(
        batch.devices[0].raw_details.as_ref().unwrap()["imei"],
        json!(imei(9))
    );
}

#[test]
fn records_without_days_offline_are_reported_unresolved() {
    let requested = vec![imei(1), imei(2), imei(3)];
    let response = LookupResponse {
        devices: vec![
            lookup_device(&imei(1), Some(7), "2024-05-01 12:00:00"),
            lookup_device(&imei(2), None, "2024-05-01 12:00:00"),
            lookup_device(&imei(3), Some(-1), "2024-05-01 12:00:00"),
        ],
        raw_data: vec![],
    };
    let batch = BatchResult::from_response(&requested, response);
    assert_eq!(batch.devices.len(), 1);
    assert_eq!(batch.unresolved, vec![imei(2), imei(3)]);
    assert_eq!(batch.max_observed_days_offline, 7);
}

#[test]
fn every_requested_imei_is_resolved_or_unresolved_exactly_once() {
    let requested = vec![imei(1), imei(2), imei(3), imei(4)];
    let response = LookupResponse {
        devices: vec![
            lookup_device(&imei(2), Some(1), "2024-05-01 12:00:00"),
            lookup_device(&imei(4), Some(12), "2024-05-01 12:00:00"),
        ],
        raw_data: vec![],
    };
    let batch = BatchResult::from_response(&requested, response);
    for i in &requested {
        let resolved = batch.devices.iter().filter(|d| &d.imei == i).count();
        let unresolved = batch.unresolved.iter().filter(|u| *u == i).count();
        assert_eq!(resolved + unresolved, 1, "imei {i}");
    }
}

#[test]
fn max_observed_is_zero_for_empty_batch() {
    assert_eq!(max_observed_days_offline(&[]), 0);
    assert_eq!(BatchResult::new(vec![], vec![]).max_observed_days_offline, 0);
}

#[test]
fn device_record_serializes_camel_case() {
    let d = DeviceRecord::new(imei(1), Some("2024-05-01 12:00:00".into()), 3, None);
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["imei"], imei(1));
    assert_eq!(json["lastTime"], "2024-05-01 12:00:00");
    assert_eq!(json["daysOffline"], 3);
    assert_eq!(json["movedToObservation"], false);
    assert!(json.get("rawDetails").is_none());
}

#[test]
fn display_bucket_labels() {
    assert_eq!(DisplayBucket::Online.label(), "Online");
    assert_eq!(DisplayBucket::Observation.label(), "Em Observação");
    assert_eq!(
        serde_json::to_string(&DisplayBucket::Observation).unwrap(),
        "\"observation\""
    );
    assert_eq!(
        serde_json::to_string(&DeviceStatus::MovedToObservation).unwrap(),
        "\"movedToObservation\""
    );
}

#[test]
fn duplicated_imeis_appear_once_per_occurrence() {
    let requested = vec![imei(1), imei(2), imei(1), imei(3), imei(3)];
    let response = LookupResponse {
        devices: vec![
            lookup_device(&imei(1), Some(4), "2024-05-01 12:00:00"),
            lookup_device(&imei(2), Some(0), "2024-05-01 12:00:00"),
        ],
        raw_data: vec![],
    };
    let batch = BatchResult::from_response(&requested, response);
    let imeis: Vec<&str> = batch.devices.iter().map(|d| d.imei.as_str()).collect();
    assert_eq!(imeis, vec![imei(1), imei(1), imei(2)]);
    assert!(batch.devices[..2].iter().all(|d| d.days_offline == 4));
    assert_eq!(batch.unresolved, vec![imei(3), imei(3)]);
}

#[test]
fn duplicates_answered_by_the_service_are_not_padded() {
    let requested = vec![imei(1), imei(1)];
    let response = LookupResponse {
        devices: vec![
            lookup_device(&imei(1), Some(4), "2024-05-01 12:00:00"),
            lookup_device(&imei(1), Some(4), "2024-05-01 12:00:00"),
        ],
        raw_data: vec![],
    };
    let batch = BatchResult::from_response(&requested, response);
    assert_eq!(batch.resolved_count(), 2);
    assert!(batch.unresolved.is_empty());
}
