//! Redistribution plan assembly.
//!
//! Planning is stateless and re-entrant: each call reads an immutable
//! snapshot and produces a fresh plan, so concurrent invocations need no
//! coordination. Route estimates for the matched pairs are independent
//! network round trips and are fanned out with bounded concurrency; the
//! fan-in collects every outcome (or its timeout) before the plan is
//! assembled. Cancellation is cooperative: dropping the returned future
//! abandons any outstanding estimation calls.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::{RouteEstimate, Snapshot, Station, StationName};

use super::config::PlanConfig;
use super::estimate::RouteEstimator;
use super::matcher::{DonorCandidate, match_donors};
use super::partition::partition;

/// Error from redistribution planning.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// Thresholds would let a station be low and donor at once
    #[error("invalid thresholds: low {low} must be below donor {donor}")]
    InvalidThresholds { low: u32, donor: u32 },

    /// The requested station is not in the snapshot
    #[error("unknown station: {0}")]
    UnknownStation(StationName),
}

/// A ranked donor with its route estimate, when one could be obtained.
#[derive(Debug, Clone)]
pub struct RankedDonor {
    pub station: Arc<Station>,

    /// Great-circle distance from the target, in kilometres.
    pub distance_km: f64,

    /// `None` when estimation failed or timed out for this pair; the
    /// corresponding warning is on the plan.
    pub route: Option<RouteEstimate>,
}

/// Donor suggestions for one low-stock target, nearest first.
#[derive(Debug, Clone)]
pub struct RedistributionSuggestion {
    pub target: Arc<Station>,
    pub donors: Vec<RankedDonor>,
}

/// A route-estimation failure for a single (donor, target) pair.
#[derive(Debug, Clone)]
pub struct RouteWarning {
    pub target: StationName,
    pub donor: StationName,
    pub message: String,
}

/// The assembled plan: one suggestion per low-stock station with at
/// least one eligible donor, in snapshot order.
#[derive(Debug, Clone, Default)]
pub struct RedistributionPlan {
    pub suggestions: Vec<RedistributionSuggestion>,

    /// Per-pair route failures. Never fatal to the plan.
    pub warnings: Vec<RouteWarning>,
}

/// One entry of the route-free low-stock listing.
#[derive(Debug, Clone)]
pub struct LowStockEntry {
    pub target: Arc<Station>,

    /// May be empty: the listing keeps stations with no eligible donor.
    pub donors: Vec<DonorCandidate>,
}

/// The route-free low-stock listing.
///
/// Unlike [`RedistributionPlan`], stations with no eligible donor are
/// included, so the display can say "low, and nobody can help" instead
/// of silently hiding them.
#[derive(Debug, Clone, Default)]
pub struct LowStockSummary {
    pub entries: Vec<LowStockEntry>,
}

/// Redistribution planner.
pub struct RedistributionPlanner<'a, R: RouteEstimator> {
    estimator: &'a R,
    config: &'a PlanConfig,
}

impl<'a, R: RouteEstimator> RedistributionPlanner<'a, R> {
    /// Create a new planner.
    pub fn new(estimator: &'a R, config: &'a PlanConfig) -> Self {
        Self { estimator, config }
    }

    /// Plan redistribution for every low-stock station in the snapshot.
    ///
    /// Targets whose donor shortlist is empty are omitted; an empty
    /// snapshot yields an empty plan.
    pub async fn plan(&self, snapshot: &Snapshot) -> Result<RedistributionPlan, PlanError> {
        self.config.validate()?;

        let parts = partition(
            snapshot.stations(),
            self.config.low_threshold,
            self.config.donor_threshold,
        );

        self.plan_targets(&parts.low, &parts.donors, self.config.shortlist_size)
            .await
    }

    /// Plan a manual resupply of one pre-selected station.
    ///
    /// Equivalent to [`plan`](Self::plan) restricted to a single target
    /// with a shortlist of one: the single nearest donor that would
    /// actually execute the transfer.
    pub async fn plan_for(
        &self,
        target: &StationName,
        snapshot: &Snapshot,
    ) -> Result<RedistributionPlan, PlanError> {
        self.config.validate()?;

        let station = snapshot
            .find(target)
            .cloned()
            .ok_or_else(|| PlanError::UnknownStation(target.clone()))?;

        let parts = partition(
            snapshot.stations(),
            self.config.low_threshold,
            self.config.donor_threshold,
        );

        self.plan_targets(&[station], &parts.donors, 1).await
    }

    /// The route-free low-stock listing.
    ///
    /// No estimator calls are made, and targets with no eligible donor
    /// are kept with an empty shortlist.
    pub fn low_stock_summary(&self, snapshot: &Snapshot) -> Result<LowStockSummary, PlanError> {
        self.config.validate()?;

        let parts = partition(
            snapshot.stations(),
            self.config.low_threshold,
            self.config.donor_threshold,
        );

        let entries = parts
            .low
            .iter()
            .map(|target| LowStockEntry {
                target: Arc::clone(target),
                donors: match_donors(target, &parts.donors, self.config.shortlist_size, true),
            })
            .collect();

        Ok(LowStockSummary { entries })
    }

    /// Shortlist donors per target, then fan out route estimates.
    async fn plan_targets(
        &self,
        targets: &[Arc<Station>],
        donors: &[Arc<Station>],
        k: usize,
    ) -> Result<RedistributionPlan, PlanError> {
        // Targets with no eligible donor are omitted from the detailed plan
        let mut shortlists: Vec<(Arc<Station>, Vec<DonorCandidate>)> = Vec::new();
        for target in targets {
            let shortlist = match_donors(target, donors, k, true);
            if shortlist.is_empty() {
                continue;
            }
            shortlists.push((Arc::clone(target), shortlist));
        }

        // One route estimate per (target, donor) pair, fanned out in
        // batches of max_concurrent_routes
        let pairs: Vec<(usize, usize)> = shortlists
            .iter()
            .enumerate()
            .flat_map(|(ti, (_, shortlist))| (0..shortlist.len()).map(move |di| (ti, di)))
            .collect();

        let mut estimates: Vec<Vec<Option<RouteEstimate>>> = shortlists
            .iter()
            .map(|(_, shortlist)| vec![None; shortlist.len()])
            .collect();
        let mut warnings = Vec::new();

        let per_call_timeout = self.config.route_timeout();

        for batch in pairs.chunks(self.config.max_concurrent_routes.max(1)) {
            let calls: Vec<_> = batch
                .iter()
                .map(|&(ti, di)| {
                    let (target, shortlist) = &shortlists[ti];
                    let donor = &shortlist[di].station;
                    async move {
                        let outcome = tokio::time::timeout(
                            per_call_timeout,
                            self.estimator.estimate_route(donor, target),
                        )
                        .await;
                        (ti, di, outcome)
                    }
                })
                .collect();

            for (ti, di, outcome) in join_all(calls).await {
                let (target, shortlist) = &shortlists[ti];
                let donor = &shortlist[di].station;

                match outcome {
                    Ok(Ok(estimate)) => estimates[ti][di] = Some(estimate),
                    Ok(Err(e)) => {
                        warn!(
                            target_station = %target.name,
                            donor = %donor.name,
                            error = %e,
                            "route estimation failed"
                        );
                        warnings.push(RouteWarning {
                            target: target.name.clone(),
                            donor: donor.name.clone(),
                            message: e.to_string(),
                        });
                    }
                    Err(_) => {
                        warn!(
                            target_station = %target.name,
                            donor = %donor.name,
                            "route estimation timed out"
                        );
                        warnings.push(RouteWarning {
                            target: target.name.clone(),
                            donor: donor.name.clone(),
                            message: "route estimation timed out".to_string(),
                        });
                    }
                }
            }
        }

        let suggestions: Vec<RedistributionSuggestion> = shortlists
            .into_iter()
            .zip(estimates)
            .map(|((target, shortlist), routes)| {
                let donors = shortlist
                    .into_iter()
                    .zip(routes)
                    .map(|(candidate, route)| RankedDonor {
                        station: candidate.station,
                        distance_km: candidate.distance_km,
                        route,
                    })
                    .collect();

                RedistributionSuggestion { target, donors }
            })
            .collect();

        debug!(
            suggestions = suggestions.len(),
            warnings = warnings.len(),
            "plan assembled"
        );

        Ok(RedistributionPlan {
            suggestions,
            warnings,
        })
    }
}
