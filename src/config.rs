use std::str::FromStr;

use chrono_tz::Tz;
use serde::Deserialize;

use crate::timezone::Zones;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub lookup: LookupConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    /// Lookup service root; the client appends /api/check-devices.
    pub base_url: String,
    pub timeout_secs: u64,
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

fn default_max_batch_size() -> usize {
    5000
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// IANA zone for the "Horário Brasília" column.
    #[serde(default = "default_local_timezone")]
    pub local_timezone: String,
    /// IANA zone for the secondary time column on the device tables.
    #[serde(default = "default_secondary_timezone")]
    pub secondary_timezone: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            local_timezone: default_local_timezone(),
            secondary_timezone: default_secondary_timezone(),
        }
    }
}

fn default_local_timezone() -> String {
    "America/Sao_Paulo".into()
}

fn default_secondary_timezone() -> String {
    "Asia/Shanghai".into()
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        let mut config = Self::load_from_str(&s)?;
        if let Ok(url) = std::env::var("LOOKUP_BASE_URL") {
            config.lookup.base_url = url;
            config.validate()?;
        }
        Ok(config)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Time zones for rendering; names were checked by `validate`.
    pub fn zones(&self) -> anyhow::Result<Zones> {
        Ok(Zones {
            local: parse_tz(&self.report.local_timezone)?,
            secondary: parse_tz(&self.report.secondary_timezone)?,
        })
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            self.lookup.base_url.starts_with("http://")
                || self.lookup.base_url.starts_with("https://"),
            "lookup.base_url must be an http(s) URL, got {:?}",
            self.lookup.base_url
        );
        anyhow::ensure!(
            self.lookup.timeout_secs > 0,
            "lookup.timeout_secs must be > 0, got {}",
            self.lookup.timeout_secs
        );
        anyhow::ensure!(
            self.lookup.max_batch_size > 0,
            "lookup.max_batch_size must be > 0, got {}",
            self.lookup.max_batch_size
        );
        anyhow::ensure!(
            Tz::from_str(&self.report.local_timezone).is_ok(),
            "report.local_timezone is not a known time zone: {}",
            self.report.local_timezone
        );
        anyhow::ensure!(
            Tz::from_str(&self.report.secondary_timezone).is_ok(),
            "report.secondary_timezone is not a known time zone: {}",
            self.report.secondary_timezone
        );
        Ok(())
    }
}

fn parse_tz(name: &str) -> anyhow::Result<Tz> {
    Tz::from_str(name).map_err(|e| anyhow::anyhow!("time zone {name}: {e}"))
}
