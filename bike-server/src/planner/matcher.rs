//! Donor ranking for a single target station.

use std::sync::Arc;

use crate::domain::Station;

/// A donor station paired with its distance to a specific target.
///
/// Ephemeral: created fresh for every match.
#[derive(Debug, Clone)]
pub struct DonorCandidate {
    pub station: Arc<Station>,

    /// Great-circle distance from the target, in kilometres.
    pub distance_km: f64,
}

/// Rank donors for `target`, nearest first, truncated to `k`.
///
/// The sort is stable: donors at equal distance keep their relative order
/// in the input sequence. With `exclude_self`, a donor sharing the
/// target's name is skipped.
///
/// There is no capacity bookkeeping: a donor matched here is offered in
/// full to every other target in the same planning pass. Callers that
/// need exclusive assignment must account for it themselves.
pub fn match_donors(
    target: &Station,
    donors: &[Arc<Station>],
    k: usize,
    exclude_self: bool,
) -> Vec<DonorCandidate> {
    let mut candidates: Vec<DonorCandidate> = donors
        .iter()
        .filter(|d| !(exclude_self && d.name == target.name))
        .map(|d| DonorCandidate {
            station: Arc::clone(d),
            distance_km: target.position.distance_km(&d.position),
        })
        .collect();

    candidates.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    candidates.truncate(k);
    candidates
}
