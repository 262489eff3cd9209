// Resolved device record and its display bucket

use serde::Serialize;
use serde_json::{Map, Value};

/// Classification override carried on a record; serializes to camelCase JSON (e.g. "movedToObservation").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceStatus {
    Normal,
    MovedToObservation,
}

/// Displayed connectivity bucket for a resolved device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayBucket {
    Online,
    Observation,
    Offline,
}

impl DisplayBucket {
    /// Operator-facing label (Portuguese, as on the report tabs).
    pub fn label(self) -> &'static str {
        match self {
            DisplayBucket::Online => "Online",
            DisplayBucket::Observation => "Em Observação",
            DisplayBucket::Offline => "Offline",
        }
    }
}

/// One IMEI the lookup service resolved.
///
/// The observation latch is private: it only ever goes from unset to set, and only
/// through [`crate::classifier::reclassify`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    pub imei: String,
    #[serde(rename = "lastTime")]
    pub last_seen: Option<String>,
    pub days_offline: u32,
    moved_to_observation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_details: Option<Map<String, Value>>,
}

impl DeviceRecord {
    pub fn new(
        imei: impl Into<String>,
        last_seen: Option<String>,
        days_offline: u32,
        raw_details: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            imei: imei.into(),
            last_seen,
            days_offline,
            moved_to_observation: false,
            raw_details,
        }
    }

    pub fn moved_to_observation(&self) -> bool {
        self.moved_to_observation
    }

    pub fn status(&self) -> DeviceStatus {
        if self.moved_to_observation {
            DeviceStatus::MovedToObservation
        } else {
            DeviceStatus::Normal
        }
    }

    /// Sets the one-way observation latch. There is no way to clear it.
    pub(crate) fn latch(&mut self) {
        self.moved_to_observation = true;
    }
}
