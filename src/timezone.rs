// Render lookup timestamps (UTC) in operator time zones.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses RFC 3339, or a zone-less timestamp taken as UTC.
pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
        .map(|naive| naive.and_utc())
}

/// `YYYY-MM-DD HH:MM:SS` in `tz`; empty string when missing or unparseable.
pub fn format_in(tz: Tz, raw: Option<&str>) -> String {
    raw.and_then(parse_utc)
        .map(|dt| dt.with_timezone(&tz).format(DISPLAY_FORMAT).to_string())
        .unwrap_or_default()
}

/// Operator time zones used for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zones {
    pub local: Tz,
    pub secondary: Tz,
}

impl Default for Zones {
    fn default() -> Self {
        Self {
            local: chrono_tz::America::Sao_Paulo,
            secondary: chrono_tz::Asia::Shanghai,
        }
    }
}
