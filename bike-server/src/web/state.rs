//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedRouteEstimator;
use crate::planner::PlanConfig;
use crate::routing::RouteClient;
use crate::snapshot::SnapshotSource;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station snapshot source (live feed or captured file)
    pub snapshot: Arc<SnapshotSource>,

    /// Cached route estimator
    pub estimator: Arc<CachedRouteEstimator<RouteClient>>,

    /// Planner defaults; requests may override thresholds and k
    pub config: Arc<PlanConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        snapshot: SnapshotSource,
        estimator: CachedRouteEstimator<RouteClient>,
        config: PlanConfig,
    ) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            estimator: Arc::new(estimator),
            config: Arc::new(config),
        }
    }
}
