// Batch snapshot: resolved records + unresolved IMEIs for one submission

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::warn;

use super::{DeviceRecord, LookupResponse};

/// Immutable result of one lookup round-trip. Reclassification derives a new value from it.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub devices: Vec<DeviceRecord>,
    /// Requested IMEIs absent from the response (or rejected as malformed), submission order.
    pub unresolved: Vec<String>,
    pub max_observed_days_offline: u32,
}

impl BatchResult {
    pub fn new(devices: Vec<DeviceRecord>, unresolved: Vec<String>) -> Self {
        let max_observed_days_offline = max_observed_days_offline(&devices);
        Self {
            devices,
            unresolved,
            max_observed_days_offline,
        }
    }

    /// Builds the batch from the lookup response and diffs it against the requested IMEIs.
    /// Records without a usable `daysOffline` never reach the classifier; they are reported unresolved.
    ///
    /// Duplicates appear once per requested occurrence: when an IMEI was submitted more times than
    /// the service answered for it, its last record is repeated right after that record until the
    /// counts match. Unresolved duplicates are listed once per occurrence as well.
    pub fn from_response(requested: &[String], response: LookupResponse) -> Self {
        let mut devices = Vec::with_capacity(response.devices.len());
        let mut rejected: Vec<String> = Vec::new();

        for entry in &response.devices {
            let Some(imei) = entry.effective_imei().map(str::to_string) else {
                warn!(operation = "assemble_batch", "lookup entry without IMEI skipped");
                continue;
            };
            let days_offline = match entry.days_offline {
                Some(d) if d >= 0 => u32::try_from(d).unwrap_or(u32::MAX),
                other => {
                    warn!(
                        operation = "assemble_batch",
                        imei = %imei,
                        days_offline = ?other,
                        "record rejected: missing or negative daysOffline"
                    );
                    rejected.push(imei);
                    continue;
                }
            };
            devices.push(DeviceRecord::new(
                imei,
                entry.last_time.clone(),
                days_offline,
                entry.details().cloned(),
            ));
        }

        let devices = pad_duplicates(requested, devices);
        let resolved: HashSet<&str> = devices.iter().map(|d| d.imei.as_str()).collect();
        let mut unresolved: Vec<String> = requested
            .iter()
            .filter(|imei| !resolved.contains(imei.as_str()))
            .cloned()
            .collect();
        for imei in rejected {
            if !resolved.contains(imei.as_str()) && !requested.contains(&imei) {
                unresolved.push(imei);
            }
        }

        Self::new(devices, unresolved)
    }

    pub fn resolved_count(&self) -> usize {
        self.devices.len()
    }
}

fn pad_duplicates(requested: &[String], devices: Vec<DeviceRecord>) -> Vec<DeviceRecord> {
    let mut wanted: HashMap<&str, usize> = HashMap::new();
    for imei in requested {
        *wanted.entry(imei.as_str()).or_default() += 1;
    }
    let mut returned: HashMap<&str, usize> = HashMap::new();
    for d in &devices {
        *returned.entry(d.imei.as_str()).or_default() += 1;
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut out = Vec::with_capacity(devices.len().max(requested.len()));
    for d in &devices {
        let imei = d.imei.as_str();
        let seen_now = seen.entry(imei).or_default();
        *seen_now += 1;
        out.push(d.clone());
        let total = returned.get(imei).copied().unwrap_or(0);
        let want = wanted.get(imei).copied().unwrap_or(0);
        if *seen_now == total && want > total {
            out.extend(std::iter::repeat_n(d.clone(), want - total));
        }
    }
    out
}

/// Upper bound for the threshold control: max days offline over resolved devices, 0 when empty.
pub fn max_observed_days_offline(devices: &[DeviceRecord]) -> u32 {
    devices.iter().map(|d| d.days_offline).max().unwrap_or(0)
}
