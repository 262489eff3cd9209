// Device lookup service client (POST {base_url}/api/check-devices).
// One request/response per batch; no retries here.

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::config::LookupConfig;
use crate::error::{BatchError, Result};
use crate::models::{LookupErrorBody, LookupRequest, LookupResponse};
use crate::progress;
use crate::version;

const CHECK_DEVICES_PATH: &str = "/api/check-devices";
const MAX_PREALLOC_BYTES: u64 = 1 << 20;

/// Source of device last-seen data. The HTTP implementation is [`LookupRepo`].
#[async_trait]
pub trait DeviceLookup: Send + Sync {
    async fn check_devices(&self, imeis: &[String]) -> Result<LookupResponse>;
}

pub struct LookupRepo {
    client: reqwest::Client,
    endpoint: String,
}

impl LookupRepo {
    pub fn new(config: &LookupConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(version::user_agent())
            .build()?;
        let endpoint = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            CHECK_DEVICES_PATH
        );
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DeviceLookup for LookupRepo {
    #[instrument(
        skip(self, imeis),
        fields(repo = "lookup", operation = "check_devices", imei_count = imeis.len())
    )]
    async fn check_devices(&self, imeis: &[String]) -> Result<LookupResponse> {
        let body = serde_json::to_vec(&LookupRequest {
            imeis: imeis.to_vec(),
        })
        .map_err(|e| BatchError::LookupFailure(format!("encode request: {e}")))?;
        let body_len = body.len() as u64;

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        debug!(bytes = body_len, "request sent");

        let status = response.status();
        let total = response.content_length().unwrap_or(0);
        let mut buf: Vec<u8> = Vec::with_capacity(total.min(MAX_PREALLOC_BYTES) as usize);
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            buf.extend_from_slice(&chunk?);
            if let Some(p) = progress::download_progress(buf.len() as u64, total, imeis.len()) {
                debug!(
                    progress = p.percent,
                    remaining_imeis = p.remaining_imeis,
                    "receiving lookup response"
                );
            }
        }

        if !status.is_success() {
            let message = serde_json::from_slice::<LookupErrorBody>(&buf)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("HTTP status: {status}"));
            warn!(status = %status, error = %message, "lookup service returned an error");
            return Err(BatchError::LookupFailure(message));
        }

        serde_json::from_slice(&buf)
            .map_err(|e| BatchError::LookupFailure(format!("invalid response body: {e}")))
    }
}
