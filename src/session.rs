// Active batch: fetched snapshot + threshold, and the submit / detail pipelines.

use tracing::{info, instrument};

use crate::aggregation;
use crate::classifier::{classify, reclassify};
use crate::details;
use crate::error::{BatchError, Result};
use crate::lookup_repo::DeviceLookup;
use crate::models::{
    BatchResult, BatchStats, BatchView, DeviceDetail, DeviceRow, DisplayBucket, ExportReport,
};
use crate::report;
use crate::timezone::{self, Zones};
use crate::validator;

/// One submitted batch with its active threshold. Threshold changes produce a new session;
/// the fetched payload is never modified, only the per-record latches move forward.
#[derive(Debug, Clone)]
pub struct BatchSession {
    batch: BatchResult,
    threshold: u32,
}

impl BatchSession {
    /// Starts with every device visible (threshold = max observed days offline).
    pub fn new(batch: BatchResult) -> Self {
        let threshold = batch.max_observed_days_offline;
        Self {
            batch: reclassify(&batch, threshold),
            threshold,
        }
    }

    pub fn batch(&self) -> &BatchResult {
        &self.batch
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn max_threshold(&self) -> u32 {
        self.batch.max_observed_days_offline
    }

    pub fn with_threshold(&self, threshold: u32) -> Result<Self> {
        let max = self.max_threshold();
        if threshold > max {
            return Err(BatchError::ThresholdOutOfRange { threshold, max });
        }
        Ok(Self {
            batch: reclassify(&self.batch, threshold),
            threshold,
        })
    }

    pub fn stats(&self) -> BatchStats {
        aggregation::aggregate(&self.batch.devices, self.threshold)
    }

    pub fn view(&self, zones: &Zones) -> BatchView {
        let mut online = Vec::new();
        let mut observation = Vec::new();
        let mut offline = Vec::new();
        for device in &self.batch.devices {
            let bucket = classify(device, self.threshold);
            let row = DeviceRow {
                imei: device.imei.clone(),
                last_time: device.last_seen.clone(),
                local_time: timezone::format_in(zones.local, device.last_seen.as_deref()),
                secondary_time: timezone::format_in(zones.secondary, device.last_seen.as_deref()),
                days_offline: device.days_offline,
                bucket,
                moved_to_observation: device.moved_to_observation(),
            };
            match bucket {
                DisplayBucket::Online => online.push(row),
                DisplayBucket::Observation => observation.push(row),
                DisplayBucket::Offline => offline.push(row),
            }
        }
        BatchView {
            max_threshold: self.max_threshold(),
            total_devices: self.batch.resolved_count(),
            stats: self.stats(),
            online,
            observation,
            offline,
            not_found: self.batch.unresolved.clone(),
        }
    }

    pub fn export(&self, zones: &Zones) -> ExportReport {
        report::project(&self.batch, self.threshold, zones)
    }
}

/// Validates raw input, runs the lookup, and assembles a fresh session.
#[instrument(skip(lookup, input), fields(operation = "submit_batch"))]
pub async fn submit_batch(
    lookup: &dyn DeviceLookup,
    input: &str,
    max_batch_size: usize,
) -> Result<BatchSession> {
    let imeis = validator::parse_imeis(input)?;
    if imeis.len() > max_batch_size {
        return Err(BatchError::BatchTooLarge {
            size: imeis.len(),
            max: max_batch_size,
        });
    }

    let response = lookup.check_devices(&imeis).await?;
    let batch = BatchResult::from_response(&imeis, response);
    info!(
        requested = imeis.len(),
        resolved = batch.resolved_count(),
        not_found = batch.unresolved.len(),
        max_days_offline = batch.max_observed_days_offline,
        "batch processed"
    );
    Ok(BatchSession::new(batch))
}

/// Single-IMEI lookup returning the raw payload, grouped for display.
#[instrument(skip(lookup), fields(operation = "fetch_detail"))]
pub async fn fetch_detail(lookup: &dyn DeviceLookup, imei: &str) -> Result<DeviceDetail> {
    let imei = validator::parse_single(imei)?;
    let response = lookup.check_devices(std::slice::from_ref(&imei)).await?;
    let raw = response
        .raw_data
        .into_iter()
        .next()
        .and_then(|v| match v {
            serde_json::Value::Object(map) => Some(map),
            _ => None,
        })
        .ok_or_else(|| BatchError::DetailNotFound(imei.clone()))?;
    Ok(details::build_detail(&imei, raw))
}
