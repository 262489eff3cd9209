// Status classification and threshold reclassification.
//
// Rules (first match wins):
//   days == 0          -> Online
//   days in {1, 2}     -> Observation (still settling, threshold ignored)
//   latch set          -> Observation
//   days > threshold   -> Observation (reclassify sets the latch)
//   otherwise          -> Offline

use tracing::debug;

use crate::models::{BatchResult, DeviceRecord, DisplayBucket};

/// Gaps of at most this many days are always "under observation".
pub const SETTLING_DAYS: u32 = 2;

/// Bucket for a days-offline value given the latch state and the active threshold.
pub fn classify_days(days_offline: u32, moved_to_observation: bool, threshold: u32) -> DisplayBucket {
    if days_offline == 0 {
        DisplayBucket::Online
    } else if days_offline <= SETTLING_DAYS || moved_to_observation || days_offline > threshold {
        DisplayBucket::Observation
    } else {
        DisplayBucket::Offline
    }
}

pub fn classify(device: &DeviceRecord, threshold: u32) -> DisplayBucket {
    classify_days(device.days_offline, device.moved_to_observation(), threshold)
}

/// Latches every device staler than `threshold`. Latches are never cleared, so raising the
/// threshold again leaves previously moved devices in observation.
/// Returns a new batch; `raw_details` are carried over untouched.
pub fn reclassify(batch: &BatchResult, threshold: u32) -> BatchResult {
    let mut next = batch.clone();
    let mut newly_latched = 0usize;
    for device in &mut next.devices {
        if device.days_offline > threshold && !device.moved_to_observation() {
            device.latch();
            newly_latched += 1;
        }
    }
    debug!(
        operation = "reclassify",
        threshold,
        newly_latched,
        "threshold applied"
    );
    next
}
