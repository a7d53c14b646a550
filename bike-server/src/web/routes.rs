//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::error;

use crate::domain::StationName;
use crate::planner::{PlanConfig, PlanError, RedistributionPlanner};
use crate::snapshot::SnapshotError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(stations))
        .route("/api/low", get(low_stock))
        .route("/api/redistribution", get(redistribution))
        .route("/api/resupply", post(resupply))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Merge per-request overrides into the configured defaults.
fn request_config(base: &PlanConfig, query: &PlanQuery) -> PlanConfig {
    let mut config = base.clone();

    if let Some(low) = query.low_threshold {
        config.low_threshold = low;
    }
    if let Some(donor) = query.donor_threshold {
        config.donor_threshold = donor;
    }
    if let Some(k) = query.k {
        config.shortlist_size = k;
    }

    config
}

/// Current snapshot with stock tiers.
async fn stations(State(state): State<AppState>) -> Result<Json<StationsResponse>, AppError> {
    let snapshot = state.snapshot.fetch().await?;
    Ok(Json(StationsResponse::from_snapshot(&snapshot)))
}

/// Low-stock stations with route-free donor shortlists.
///
/// Stations with no eligible donor are included with an empty shortlist.
async fn low_stock(
    State(state): State<AppState>,
    Query(query): Query<PlanQuery>,
) -> Result<Json<LowStockResponse>, AppError> {
    let config = request_config(&state.config, &query);
    let snapshot = state.snapshot.fetch().await?;

    let planner = RedistributionPlanner::new(state.estimator.as_ref(), &config);
    let summary = planner.low_stock_summary(&snapshot)?;

    Ok(Json(LowStockResponse::from_summary(&summary)))
}

/// Full redistribution plan with route estimates.
async fn redistribution(
    State(state): State<AppState>,
    Query(query): Query<PlanQuery>,
) -> Result<Json<PlanResponse>, AppError> {
    let config = request_config(&state.config, &query);
    let snapshot = state.snapshot.fetch().await?;

    let planner = RedistributionPlanner::new(state.estimator.as_ref(), &config);
    let plan = planner.plan(&snapshot).await?;

    Ok(Json(PlanResponse::from_plan(&plan)))
}

/// Operator-triggered manual resupply of one station.
async fn resupply(
    State(state): State<AppState>,
    Json(request): Json<ResupplyRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let name = StationName::parse(&request.station_name).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let snapshot = state.snapshot.fetch().await?;

    let planner = RedistributionPlanner::new(state.estimator.as_ref(), &state.config);
    let plan = planner.plan_for(&name, &snapshot).await?;

    Ok(Json(PlanResponse::from_plan(&plan)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Upstream { message: String },
}

impl From<SnapshotError> for AppError {
    fn from(e: SnapshotError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidThresholds { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
            PlanError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
        };

        error!(status = %status, error = %message, "request failed");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
