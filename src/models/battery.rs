// Battery telemetry parsed from the device self-check string

use serde::Serialize;

/// Raw match of `vBat=<mV>mV(<pct>%)`; the percentage is only present when the device reported it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryReading {
    pub voltage_volts: f64,
    pub percentage: Option<u8>,
}

/// Reading with the percentage resolved (reported, or derived from voltage).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryInfo {
    pub voltage_volts: f64,
    pub percentage: u8,
    /// True when `percentage` came from the voltage table rather than the device.
    pub derived: bool,
}

/// One `label: content` item of a `;`-separated self-check string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfCheckEntry {
    pub label: String,
    pub value: String,
}
