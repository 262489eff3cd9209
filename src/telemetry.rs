//! Battery telemetry from the device self-check string.
//!
//! The self-check parameter is a `;`-separated list of `label: content` items, e.g.
//! `Ver: 1.2; vBat=3775mV(40%); GSM: OK`. Battery voltage is reported in millivolts, with the
//! charge percentage appended only by some firmware versions.

use serde_json::{Map, Value};

use crate::models::{BatteryInfo, BatteryReading, SelfCheckEntry};

/// Field names under which devices report the self-check string.
pub const SELF_CHECK_KEYS: [&str; 3] = ["selfCheckParam", "SelfCheckParam", "Self Check Param"];

/// Field names holding a bare battery value (volts).
pub const BATTERY_KEYS: [&str; 2] = ["bat", "battery"];

const VBAT_PREFIX: &str = "vBat=";

/// Voltage table for lithium cells: (min volts, percentage), checked in descending order.
const VOLTAGE_TABLE: [(f64, u8); 5] = [(4.2, 100), (4.0, 80), (3.8, 60), (3.6, 40), (3.4, 20)];

/// Finds the first `vBat=<digits>mV` occurrence, with an optional `(<digits>%)` suffix.
/// The percentage is left unset when the device did not report it.
pub fn extract_battery(text: &str) -> Option<BatteryReading> {
    for (idx, _) in text.match_indices(VBAT_PREFIX) {
        let rest = &text[idx + VBAT_PREFIX.len()..];
        let Some((millivolts, after)) = leading_number(rest) else {
            continue;
        };
        let Some(after) = after.strip_prefix("mV") else {
            continue;
        };
        let percentage = after
            .strip_prefix('(')
            .and_then(leading_number)
            .and_then(|(pct, tail)| tail.starts_with("%)").then_some(pct))
            .map(|pct| pct.min(100) as u8);
        return Some(BatteryReading {
            voltage_volts: millivolts as f64 / 1000.0,
            percentage,
        });
    }
    None
}

/// [`extract_battery`] over an arbitrary JSON value; non-strings yield `None`.
pub fn extract_battery_value(value: &Value) -> Option<BatteryReading> {
    value.as_str().and_then(extract_battery)
}

pub fn percentage_from_voltage(voltage_volts: f64) -> u8 {
    VOLTAGE_TABLE
        .iter()
        .find(|(min, _)| voltage_volts >= *min)
        .map(|&(_, pct)| pct)
        .unwrap_or(0)
}

/// Fills in the percentage from the voltage table when the device did not report one.
pub fn resolve(reading: BatteryReading) -> BatteryInfo {
    match reading.percentage {
        Some(percentage) => BatteryInfo {
            voltage_volts: reading.voltage_volts,
            percentage,
            derived: false,
        },
        None => BatteryInfo {
            voltage_volts: reading.voltage_volts,
            percentage: percentage_from_voltage(reading.voltage_volts),
            derived: true,
        },
    }
}

/// Splits a self-check string into `label: content` entries (split at the first `:`).
pub fn parse_self_check(text: &str) -> Vec<SelfCheckEntry> {
    text.split(';')
        .filter_map(|item| {
            let (label, value) = item.split_once(':').unwrap_or((item, ""));
            let (label, value) = (label.trim(), value.trim());
            if label.is_empty() && value.is_empty() {
                return None;
            }
            Some(SelfCheckEntry {
                label: label.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}

pub fn find_self_check(details: &Map<String, Value>) -> Option<&str> {
    SELF_CHECK_KEYS
        .iter()
        .find_map(|k| details.get(*k).and_then(Value::as_str))
}

/// Battery for the detail view: self-check string first, then a numeric `bat`/`battery` field.
pub fn battery_from_details(details: &Map<String, Value>) -> Option<BatteryInfo> {
    if let Some(reading) = find_self_check(details).and_then(extract_battery) {
        return Some(resolve(reading));
    }
    BATTERY_KEYS
        .iter()
        .find_map(|k| details.get(*k).and_then(Value::as_f64))
        .map(|voltage_volts| {
            resolve(BatteryReading {
                voltage_volts,
                percentage: None,
            })
        })
}

fn leading_number(s: &str) -> Option<(u64, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let n = s[..end].parse().ok()?;
    Some((n, &s[end..]))
}
