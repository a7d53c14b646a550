//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Snapshot, Station, StockTier};
use crate::planner::{
    LowStockSummary, RankedDonor, RedistributionPlan, RedistributionSuggestion, RouteWarning,
};

/// A station as served to the presentation layer.
#[derive(Debug, Serialize)]
pub struct StationView {
    /// Station name (identity)
    pub station_name: String,

    /// Latitude in degrees
    pub lat: f64,

    /// Longitude in degrees
    pub lon: f64,

    /// Bikes currently available
    pub free_bikes: u32,

    /// Free docking slots
    pub empty_slots: u32,

    /// Total docks, when known
    pub capacity: Option<u32>,

    /// Historical average occupancy ratio, when known
    pub avg_occupancy: Option<f64>,

    /// Stock tier for marker colouring
    pub tier: StockTier,
}

impl StationView {
    /// Build a view from a domain station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            station_name: station.name.as_str().to_string(),
            lat: station.position.lat,
            lon: station.position.lon,
            free_bikes: station.free_bikes,
            empty_slots: station.empty_slots,
            capacity: station.capacity,
            avg_occupancy: station.avg_occupancy,
            tier: station.tier(),
        }
    }
}

/// Response for `GET /api/stations`.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// When the snapshot was captured (RFC 3339)
    pub fetched_at: String,

    /// All stations in feed order
    pub stations: Vec<StationView>,
}

impl StationsResponse {
    /// Build the response from a snapshot.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            fetched_at: snapshot.fetched_at().to_rfc3339(),
            stations: snapshot
                .stations()
                .iter()
                .map(|s| StationView::from_station(s))
                .collect(),
        }
    }
}

/// Query parameters accepted by the planning endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PlanQuery {
    /// Override the low-stock threshold
    pub low_threshold: Option<u32>,

    /// Override the donor threshold
    pub donor_threshold: Option<u32>,

    /// Override the donor shortlist size
    pub k: Option<usize>,
}

/// A suggested donor for one target station.
#[derive(Debug, Serialize)]
pub struct DonorResult {
    /// Donor station name
    pub donor_name: String,

    /// Great-circle distance to the target in kilometres
    pub distance_km: f64,

    /// Estimated travel time in minutes; absent when estimation failed
    /// for this pair
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<f64>,

    /// Route geometry as `[lat, lon]` pairs; absent with `duration_min`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Vec<[f64; 2]>>,
}

impl DonorResult {
    /// Build a result from a ranked donor.
    pub fn from_donor(donor: &RankedDonor) -> Self {
        Self {
            donor_name: donor.station.name.as_str().to_string(),
            distance_km: donor.distance_km,
            duration_min: donor.route.as_ref().map(|r| r.duration_min),
            geometry: donor
                .route
                .as_ref()
                .map(|r| r.geometry.iter().map(|p| [p.lat, p.lon]).collect()),
        }
    }
}

/// One redistribution suggestion.
#[derive(Debug, Serialize)]
pub struct SuggestionResult {
    /// The low-stock station being resupplied
    pub target_station: StationView,

    /// Ranked donors, nearest first
    pub suggested_donors: Vec<DonorResult>,
}

impl SuggestionResult {
    /// Build a result from a suggestion.
    pub fn from_suggestion(suggestion: &RedistributionSuggestion) -> Self {
        Self {
            target_station: StationView::from_station(&suggestion.target),
            suggested_donors: suggestion
                .donors
                .iter()
                .map(DonorResult::from_donor)
                .collect(),
        }
    }
}

/// A per-pair route estimation failure.
#[derive(Debug, Serialize)]
pub struct WarningResult {
    pub target: String,
    pub donor: String,
    pub message: String,
}

impl WarningResult {
    fn from_warning(warning: &RouteWarning) -> Self {
        Self {
            target: warning.target.as_str().to_string(),
            donor: warning.donor.as_str().to_string(),
            message: warning.message.clone(),
        }
    }
}

/// Response for `GET /api/redistribution` and `POST /api/resupply`.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// One suggestion per low-stock station with at least one donor
    pub suggestions: Vec<SuggestionResult>,

    /// Route estimation failures; the affected donors are listed
    /// without duration or geometry
    pub warnings: Vec<WarningResult>,
}

impl PlanResponse {
    /// Build the response from a plan.
    pub fn from_plan(plan: &RedistributionPlan) -> Self {
        Self {
            suggestions: plan
                .suggestions
                .iter()
                .map(SuggestionResult::from_suggestion)
                .collect(),
            warnings: plan.warnings.iter().map(WarningResult::from_warning).collect(),
        }
    }
}

/// A donor in the route-free low-stock listing.
#[derive(Debug, Serialize)]
pub struct LowDonorResult {
    pub donor_name: String,
    pub distance_km: f64,
}

/// One entry of `GET /api/low`.
#[derive(Debug, Serialize)]
pub struct LowStockResult {
    /// The low-stock station
    pub target_station: StationView,

    /// Shortlisted donors; empty when nobody can help
    pub suggested_donors: Vec<LowDonorResult>,
}

/// Response for `GET /api/low`.
#[derive(Debug, Serialize)]
pub struct LowStockResponse {
    pub entries: Vec<LowStockResult>,
}

impl LowStockResponse {
    /// Build the response from a summary.
    pub fn from_summary(summary: &LowStockSummary) -> Self {
        Self {
            entries: summary
                .entries
                .iter()
                .map(|entry| LowStockResult {
                    target_station: StationView::from_station(&entry.target),
                    suggested_donors: entry
                        .donors
                        .iter()
                        .map(|c| LowDonorResult {
                            donor_name: c.station.name.as_str().to_string(),
                            distance_km: c.distance_km,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Request body for `POST /api/resupply`.
#[derive(Debug, Deserialize)]
pub struct ResupplyRequest {
    /// Name of the station the operator wants resupplied
    pub station_name: String,
}

/// Error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
