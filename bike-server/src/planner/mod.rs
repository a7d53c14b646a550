//! Redistribution planning.
//!
//! This module implements the core decision logic that answers: "which
//! stations are running low on bikes, and which nearby stations should
//! donate to them?"
//!
//! A plan is assembled in four steps: partition the snapshot into low and
//! donor stations, rank donors per target by great-circle distance, fetch
//! route estimates for the matched pairs, and collect the suggestions in
//! snapshot order.

mod config;
mod estimate;
mod matcher;
mod partition;
mod plan;

pub use config::PlanConfig;
pub use estimate::{EstimateError, RouteEstimator};
pub use matcher::{DonorCandidate, match_donors};
pub use partition::{Partition, partition};
pub use plan::{
    LowStockEntry, LowStockSummary, PlanError, RankedDonor, RedistributionPlan,
    RedistributionPlanner, RedistributionSuggestion, RouteWarning,
};
