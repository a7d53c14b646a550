//! Route estimate attached to a donor suggestion.

use super::geo::LatLon;

/// A path and travel-time estimate from a donor station to a target.
///
/// Supplied entirely by the external route estimator; the planner treats
/// it as opaque data to attach to a suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEstimate {
    /// Path geometry from donor to target, in `(lat, lon)` order.
    pub geometry: Vec<LatLon>,

    /// Estimated travel time in minutes.
    pub duration_min: f64,
}
