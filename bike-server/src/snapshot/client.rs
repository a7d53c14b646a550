//! Station snapshot feed HTTP client.

use chrono::Utc;

use crate::domain::Snapshot;

use super::convert::convert_snapshot;
use super::error::SnapshotError;
use super::types::StationRecord;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the snapshot feed client.
#[derive(Debug, Clone)]
pub struct SnapshotClientConfig {
    /// Base URL of the feed; `/stations` is appended.
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SnapshotClientConfig {
    /// Create a new config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the station snapshot feed.
#[derive(Debug, Clone)]
pub struct SnapshotClient {
    http: reqwest::Client,
    base_url: String,
}

impl SnapshotClient {
    /// Create a new snapshot client.
    pub fn new(config: SnapshotClientConfig) -> Result<Self, SnapshotError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the current snapshot from the feed.
    ///
    /// Invalid records are dropped individually during conversion; an
    /// empty feed yields an empty snapshot, not an error.
    pub async fn fetch(&self) -> Result<Snapshot, SnapshotError> {
        let url = format!("{}/stations", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SnapshotError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let records: Vec<StationRecord> =
            serde_json::from_str(&body).map_err(|e| SnapshotError::Json {
                message: e.to_string(),
            })?;

        Ok(Snapshot::new(convert_snapshot(&records), Utc::now()))
    }
}
