// Lookup service wire types (POST /api/check-devices)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body: one validated IMEI per entry, submission order preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRequest {
    pub imeis: Vec<String>,
}

/// One resolved device as reported by the lookup service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupDevice {
    #[serde(default)]
    pub imei: Option<String>,
    #[serde(default)]
    pub last_time: Option<String>,
    /// Signed on the wire so negative values can be rejected instead of failing the whole body.
    #[serde(default)]
    pub days_offline: Option<i64>,
    /// Raw vendor payload; the first element carries the diagnostic fields.
    #[serde(default)]
    pub data: Option<Vec<Value>>,
}

impl LookupDevice {
    /// First raw payload entry, when it is a JSON object.
    pub fn details(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()?.first()?.as_object()
    }

    /// IMEI from the raw payload when present, else the top-level field.
    pub fn effective_imei(&self) -> Option<&str> {
        self.details()
            .and_then(|d| d.get("imei"))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .or(self.imei.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    #[serde(default)]
    pub devices: Vec<LookupDevice>,
    /// Unprojected payloads, used by the single-IMEI detail lookup.
    #[serde(default)]
    pub raw_data: Vec<Value>,
}

/// Error body returned by the lookup service on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupErrorBody {
    pub error: String,
}
