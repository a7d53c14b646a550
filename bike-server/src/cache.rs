//! Caching layer for route estimates.
//!
//! The same (donor, target) pair recurs across consecutive planning
//! passes while the underlying road route changes far more slowly than
//! stock levels do. Estimates are cached keyed by the pair's station
//! identities; the TTL bounds staleness. Failures are never cached, so a
//! flaky backend is retried on the next pass.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{RouteEstimate, Station, StationName};
use crate::planner::{EstimateError, RouteEstimator};

/// Cache key: (donor identity, target identity).
type PairKey = (StationName, StationName);

/// Configuration for the route-estimate cache.
#[derive(Debug, Clone)]
pub struct RouteCacheConfig {
    /// TTL for cached estimates.
    pub ttl: Duration,

    /// Maximum number of cached pairs.
    pub max_capacity: u64,
}

impl Default for RouteCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 10_000,
        }
    }
}

/// A route estimator that caches successful estimates.
///
/// Wraps any [`RouteEstimator`]; the cache is concurrency-safe, so one
/// instance can serve overlapping planning passes.
pub struct CachedRouteEstimator<R> {
    inner: R,
    cache: MokaCache<PairKey, RouteEstimate>,
}

impl<R: RouteEstimator> CachedRouteEstimator<R> {
    /// Create a new cached estimator.
    pub fn new(inner: R, config: &RouteCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, cache }
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached estimates.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl<R: RouteEstimator> RouteEstimator for CachedRouteEstimator<R> {
    async fn estimate_route(
        &self,
        src: &Station,
        dst: &Station,
    ) -> Result<RouteEstimate, EstimateError> {
        let key = (src.name.clone(), dst.name.clone());

        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let estimate = self.inner.estimate_route(src, dst).await?;
        self.cache.insert(key, estimate.clone()).await;

        Ok(estimate)
    }
}
