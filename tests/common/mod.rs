// Shared test helpers

use async_trait::async_trait;
use imei_status::error::{BatchError, Result};
use imei_status::lookup_repo::DeviceLookup;
use imei_status::models::*;
use serde_json::{Map, Value, json};
use std::sync::Mutex;

/// 15-digit IMEI built from a number, e.g. 7 -> "000000000000007".
pub fn imei(n: u64) -> String {
    format!("{n:015}")
}

pub fn device(imei: &str, days_offline: u32) -> DeviceRecord {
    DeviceRecord::new(imei, Some("2024-05-01 12:00:00".into()), days_offline, None)
}

/// Batch with one device per entry of `days`, IMEIs 1..=n.
pub fn batch(days: &[u32]) -> BatchResult {
    let devices = days
        .iter()
        .enumerate()
        .map(|(i, d)| device(&imei(i as u64 + 1), *d))
        .collect();
    BatchResult::new(devices, vec![])
}

pub fn lookup_device(imei: &str, days_offline: Option<i64>, last_time: &str) -> LookupDevice {
    LookupDevice {
        imei: Some(imei.to_string()),
        last_time: Some(last_time.to_string()),
        days_offline,
        data: Some(vec![json!({ "imei": imei, "lastTime": last_time })]),
    }
}

/// In-memory lookup service: answers with the known devices that were requested.
#[derive(Default)]
pub struct FakeLookup {
    pub devices: Vec<LookupDevice>,
    pub raw: Vec<Map<String, Value>>,
    pub failure: Option<String>,
    pub requests: Mutex<Vec<Vec<String>>>,
}

impl FakeLookup {
    pub fn with_devices(devices: Vec<LookupDevice>) -> Self {
        Self {
            devices,
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl DeviceLookup for FakeLookup {
    async fn check_devices(&self, imeis: &[String]) -> Result<LookupResponse> {
        self.requests.lock().unwrap().push(imeis.to_vec());
        if let Some(message) = &self.failure {
            return Err(BatchError::LookupFailure(message.clone()));
        }
        let devices = self
            .devices
            .iter()
            .filter(|d| d.imei.as_ref().is_some_and(|i| imeis.contains(i)))
            .cloned()
            .collect();
        let raw_data = self
            .raw
            .iter()
            .filter(|r| {
                r.get("imei")
                    .and_then(Value::as_str)
                    .is_some_and(|i| imeis.iter().any(|x| x == i))
            })
            .cloned()
            .map(Value::Object)
            .collect();
        Ok(LookupResponse { devices, raw_data })
    }
}
