// Aggregated batch statistics: status counts, offline-duration histogram, trend series.

use serde::Serialize;

use super::DisplayBucket;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub online: usize,
    pub observation: usize,
    pub offline: usize,
}

impl StatusCounts {
    pub fn add(&mut self, bucket: DisplayBucket) {
        match bucket {
            DisplayBucket::Online => self.online += 1,
            DisplayBucket::Observation => self.observation += 1,
            DisplayBucket::Offline => self.offline += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.online + self.observation + self.offline
    }
}

/// One days-offline range; `upper` is inclusive, `None` for the open-ended last bin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    pub range: &'static str,
    pub lower: u32,
    pub upper: Option<u32>,
    pub count: usize,
}

/// Number of devices sharing one exact days-offline value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub days_offline: u32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStats {
    pub threshold: u32,
    pub status_counts: StatusCounts,
    pub histogram: Vec<HistogramBin>,
    pub trend: Vec<TrendPoint>,
}
