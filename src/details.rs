// Device detail view: raw diagnostic fields grouped by category, plus battery and self-check.

use serde_json::{Map, Value};

use crate::models::{DetailCategory, DetailField, DetailGroup, DeviceDetail};
use crate::telemetry;

/// Field name -> category. Exact match; names not listed fall into `Other`.
const FIELD_CATEGORIES: &[(&str, DetailCategory)] = &[
    ("imei", DetailCategory::Identification),
    ("iccid", DetailCategory::Identification),
    ("version", DetailCategory::Identification),
    ("mcu", DetailCategory::Identification),
    ("status", DetailCategory::Status),
    ("mode", DetailCategory::Status),
    ("csq", DetailCategory::Status),
    ("bat", DetailCategory::Status),
    ("power", DetailCategory::Status),
    ("voltage", DetailCategory::Status),
    ("temperature", DetailCategory::Status),
    ("firstTime", DetailCategory::Time),
    ("lastTime", DetailCategory::Time),
    ("todayLogin", DetailCategory::Time),
    ("offLineDays", DetailCategory::Time),
    ("daysOffline", DetailCategory::Time),
    ("server", DetailCategory::Network),
    ("getIp", DetailCategory::Network),
    ("config", DetailCategory::Configuration),
    ("settings", DetailCategory::Configuration),
    ("parameters", DetailCategory::Configuration),
    ("selfCheckParam", DetailCategory::Configuration),
    ("log", DetailCategory::Logs),
    ("logs", DetailCategory::Logs),
    ("history", DetailCategory::Logs),
    ("events", DetailCategory::Logs),
    ("gps", DetailCategory::Gps),
    ("latitude", DetailCategory::Gps),
    ("longitude", DetailCategory::Gps),
    ("location", DetailCategory::Gps),
    ("position", DetailCategory::Gps),
    ("alarm", DetailCategory::Alerts),
    ("alert", DetailCategory::Alerts),
    ("warning", DetailCategory::Alerts),
    ("error", DetailCategory::Alerts),
    ("diagnostic", DetailCategory::Diagnostics),
    ("health", DetailCategory::Diagnostics),
    ("check", DetailCategory::Diagnostics),
    ("test", DetailCategory::Diagnostics),
];

pub fn categorize(key: &str) -> DetailCategory {
    FIELD_CATEGORIES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, category)| category)
        .unwrap_or(DetailCategory::Other)
}

/// "selfCheckParam" -> "Self Check Param", "GPSData" -> "GPS Data".
pub fn format_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                out.push(' ');
            }
        }
        if i == 0 {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Bool(true) => "Sim".to_string(),
        Value::Bool(false) => "Não".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Groups fields by category in `DetailCategory::ALL` order, keeping payload order within a group.
/// Empty groups are omitted.
pub fn group_fields(raw: &Map<String, Value>) -> Vec<DetailGroup> {
    DetailCategory::ALL
        .iter()
        .filter_map(|&category| {
            let fields: Vec<DetailField> = raw
                .iter()
                .filter(|(key, _)| categorize(key) == category)
                .map(|(key, value)| DetailField {
                    key: key.clone(),
                    label: format_key(key),
                    value: format_value(value),
                })
                .collect();
            (!fields.is_empty()).then(|| DetailGroup {
                category,
                title: category.title(),
                fields,
            })
        })
        .collect()
}

pub fn build_detail(imei: &str, raw: Map<String, Value>) -> DeviceDetail {
    let self_check = telemetry::find_self_check(&raw)
        .map(telemetry::parse_self_check)
        .unwrap_or_default();
    DeviceDetail {
        imei: imei.to_string(),
        groups: group_fields(&raw),
        self_check,
        battery: telemetry::battery_from_details(&raw),
        raw,
    }
}
