// Wire shapes returned to the operator UI

use serde::Serialize;
use serde_json::{Map, Value};

use super::{BatchStats, BatteryInfo, DisplayBucket, SelfCheckEntry};

/// Device row for the online / observation / offline tabs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRow {
    pub imei: String,
    pub last_time: Option<String>,
    pub local_time: String,
    pub secondary_time: String,
    pub days_offline: u32,
    pub bucket: DisplayBucket,
    pub moved_to_observation: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchView {
    pub max_threshold: u32,
    pub total_devices: usize,
    #[serde(flatten)]
    pub stats: BatchStats,
    pub online: Vec<DeviceRow>,
    pub observation: Vec<DeviceRow>,
    pub offline: Vec<DeviceRow>,
    pub not_found: Vec<String>,
}

/// Semantic category of a raw diagnostic field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DetailCategory {
    Identification,
    Status,
    Time,
    Network,
    Configuration,
    Logs,
    Gps,
    Alerts,
    Diagnostics,
    Other,
}

impl DetailCategory {
    pub const ALL: [DetailCategory; 10] = [
        DetailCategory::Identification,
        DetailCategory::Status,
        DetailCategory::Time,
        DetailCategory::Network,
        DetailCategory::Configuration,
        DetailCategory::Logs,
        DetailCategory::Gps,
        DetailCategory::Alerts,
        DetailCategory::Diagnostics,
        DetailCategory::Other,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DetailCategory::Identification => "Identificação",
            DetailCategory::Status => "Status do Equipamento",
            DetailCategory::Time => "Informações de Tempo",
            DetailCategory::Network => "Informações de Rede",
            DetailCategory::Configuration => "Configurações",
            DetailCategory::Logs => "Logs",
            DetailCategory::Gps => "GPS",
            DetailCategory::Alerts => "Alertas",
            DetailCategory::Diagnostics => "Diagnóstico",
            DetailCategory::Other => "Outros",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailField {
    pub key: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailGroup {
    pub category: DetailCategory,
    pub title: &'static str,
    pub fields: Vec<DetailField>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetail {
    pub imei: String,
    pub groups: Vec<DetailGroup>,
    pub self_check: Vec<SelfCheckEntry>,
    pub battery: Option<BatteryInfo>,
    pub raw: Map<String, Value>,
}
