//! Route estimator HTTP client.
//!
//! Provides async route estimation between two stations. Uses a semaphore
//! to limit concurrent requests so a planning pass with many pairs cannot
//! overwhelm the routing backend.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::domain::{LatLon, RouteEstimate, Station};
use crate::planner::{EstimateError, RouteEstimator};

use super::error::RouteError;
use super::types::{RouteEndpoint, RouteRequest, RouteResponse};

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the route estimator client.
#[derive(Debug, Clone)]
pub struct RouteClientConfig {
    /// Base URL of the estimator; `/estimate_route` is appended.
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RouteClientConfig {
    /// Create a new config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Route estimator API client.
#[derive(Debug, Clone)]
pub struct RouteClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl RouteClient {
    /// Create a new route client with the given configuration.
    pub fn new(config: RouteClientConfig) -> Result<Self, RouteError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Estimate a transfer route from `src` (donor) to `dst` (target).
    pub async fn estimate(&self, src: &Station, dst: &Station) -> Result<RouteEstimate, RouteError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| RouteError::Api {
                status: 0,
                message: "semaphore closed".to_string(),
            })?;

        let url = format!("{}/estimate_route", self.base_url);

        let request = RouteRequest {
            src: RouteEndpoint::from_station(src),
            dst: RouteEndpoint::from_station(dst),
        };

        let response = self.http.post(&url).json(&request).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RouteError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: RouteResponse = serde_json::from_str(&body).map_err(|e| RouteError::Json {
            message: format!("{e} (body: {})", body.chars().take(500).collect::<String>()),
        })?;

        convert_response(parsed)
    }
}

impl RouteEstimator for RouteClient {
    async fn estimate_route(
        &self,
        src: &Station,
        dst: &Station,
    ) -> Result<RouteEstimate, EstimateError> {
        self.estimate(src, dst)
            .await
            .map_err(|e| EstimateError::new(e.to_string()))
    }
}

/// Convert a wire response into a domain estimate.
///
/// The wire geometry is `[lon, lat]`; the swap to `(lat, lon)` happens
/// here and nowhere else.
pub(crate) fn convert_response(response: RouteResponse) -> Result<RouteEstimate, RouteError> {
    if response.geometry.coordinates.is_empty() {
        return Err(RouteError::Malformed {
            reason: "empty coordinate list",
        });
    }

    if !response.duration_min.is_finite() || response.duration_min < 0.0 {
        return Err(RouteError::Malformed {
            reason: "non-finite or negative duration",
        });
    }

    let mut geometry = Vec::with_capacity(response.geometry.coordinates.len());
    for [lon, lat] in response.geometry.coordinates {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(RouteError::Malformed {
                reason: "non-finite coordinate",
            });
        }
        geometry.push(LatLon::new(lat, lon));
    }

    Ok(RouteEstimate {
        geometry,
        duration_min: response.duration_min,
    })
}
