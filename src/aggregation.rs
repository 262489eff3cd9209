// Pure reductions over a classified batch: status counts, histogram, trend.

use std::collections::BTreeMap;

use crate::classifier::classify;
use crate::models::{BatchStats, DeviceRecord, HistogramBin, StatusCounts, TrendPoint};

/// (label, lower, inclusive upper). The last bin is open-ended and starts above 60,
/// so a device offline exactly 60 days lands in "31-60 dias".
const HISTOGRAM_BINS: [(&str, u32, Option<u32>); 7] = [
    ("0 dias", 0, Some(0)),
    ("1-2 dias", 1, Some(2)),
    ("3-7 dias", 3, Some(7)),
    ("8-15 dias", 8, Some(15)),
    ("16-30 dias", 16, Some(30)),
    ("31-60 dias", 31, Some(60)),
    ("60+ dias", 60, None),
];

/// Counts per displayed bucket over every resolved device. Latched devices count as observation.
pub fn status_counts(devices: &[DeviceRecord], threshold: u32) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for d in devices {
        counts.add(classify(d, threshold));
    }
    counts
}

/// Days-offline histogram. A bin is emitted only when its lower bound is within the threshold;
/// counts are taken over the whole batch.
pub fn histogram(devices: &[DeviceRecord], threshold: u32) -> Vec<HistogramBin> {
    HISTOGRAM_BINS
        .iter()
        .filter(|(_, lower, _)| *lower <= threshold)
        .map(|&(range, lower, upper)| {
            let count = devices
                .iter()
                .filter(|d| match upper {
                    Some(upper) => d.days_offline >= lower && d.days_offline <= upper,
                    None => d.days_offline > lower,
                })
                .count();
            HistogramBin {
                range,
                lower,
                upper,
                count,
            }
        })
        .collect()
}

/// Frequency of each distinct days-offline value within the threshold, ascending.
pub fn trend(devices: &[DeviceRecord], threshold: u32) -> Vec<TrendPoint> {
    let mut by_days: BTreeMap<u32, usize> = BTreeMap::new();
    for d in devices.iter().filter(|d| d.days_offline <= threshold) {
        *by_days.entry(d.days_offline).or_default() += 1;
    }
    by_days
        .into_iter()
        .map(|(days_offline, count)| TrendPoint {
            days_offline,
            count,
        })
        .collect()
}

pub fn aggregate(devices: &[DeviceRecord], threshold: u32) -> BatchStats {
    BatchStats {
        threshold,
        status_counts: status_counts(devices, threshold),
        histogram: histogram(devices, threshold),
        trend: trend(devices, threshold),
    }
}
