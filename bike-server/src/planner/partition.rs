//! Snapshot partitioning into low-stock and donor stations.

use std::sync::Arc;

use crate::domain::Station;

/// The low-stock and donor subsets of a snapshot.
///
/// Both preserve the snapshot's station order. Stations strictly between
/// the thresholds participate in neither role.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    /// Stations at or below the low threshold.
    pub low: Vec<Arc<Station>>,

    /// Stations at or above the donor threshold.
    pub donors: Vec<Arc<Station>>,
}

/// Split stations by stock level.
///
/// Stable filters: each subset keeps the input order. The subsets are
/// disjoint as long as `low_threshold < donor_threshold`, which
/// `PlanConfig::validate` enforces before planning.
pub fn partition(
    stations: &[Arc<Station>],
    low_threshold: u32,
    donor_threshold: u32,
) -> Partition {
    let low = stations
        .iter()
        .filter(|s| s.free_bikes <= low_threshold)
        .cloned()
        .collect();

    let donors = stations
        .iter()
        .filter(|s| s.free_bikes >= donor_threshold)
        .cloned()
        .collect();

    Partition { low, donors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LatLon, StationName};

    fn station(name: &str, free_bikes: u32) -> Arc<Station> {
        Arc::new(Station::new(
            StationName::parse(name).unwrap(),
            LatLon::new(0.0, 0.0),
            free_bikes,
            0,
            None,
            None,
        ))
    }

    #[test]
    fn thresholds_are_inclusive() {
        let stations = vec![station("at-low", 5), station("at-donor", 10)];
        let parts = partition(&stations, 5, 10);

        assert_eq!(parts.low.len(), 1);
        assert_eq!(parts.low[0].name.as_str(), "at-low");
        assert_eq!(parts.donors.len(), 1);
        assert_eq!(parts.donors[0].name.as_str(), "at-donor");
    }

    #[test]
    fn middle_stations_in_neither() {
        let stations = vec![station("A", 7), station("B", 9), station("C", 6)];
        let parts = partition(&stations, 5, 10);

        assert!(parts.low.is_empty());
        assert!(parts.donors.is_empty());
    }

    #[test]
    fn preserves_snapshot_order() {
        let stations = vec![
            station("low-1", 2),
            station("donor-1", 12),
            station("low-2", 0),
            station("donor-2", 20),
            station("low-3", 5),
        ];
        let parts = partition(&stations, 5, 10);

        let low_names: Vec<_> = parts.low.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(low_names, ["low-1", "low-2", "low-3"]);

        let donor_names: Vec<_> = parts.donors.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(donor_names, ["donor-1", "donor-2"]);
    }

    #[test]
    fn empty_input() {
        let parts = partition(&[], 5, 10);
        assert!(parts.low.is_empty());
        assert!(parts.donors.is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{LatLon, StationName};
    use proptest::prelude::*;

    fn stations(counts: &[u32]) -> Vec<Arc<Station>> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &free)| {
                Arc::new(Station::new(
                    StationName::parse(&format!("s{i}")).unwrap(),
                    LatLon::new(0.0, 0.0),
                    free,
                    0,
                    None,
                    None,
                ))
            })
            .collect()
    }

    proptest! {
        /// No station is ever both low and donor when low < donor
        #[test]
        fn disjoint(counts in proptest::collection::vec(0u32..30, 0..40), low in 0u32..10, extra in 1u32..10) {
            let donor = low + extra;
            let input = stations(&counts);
            let parts = partition(&input, low, donor);

            for l in &parts.low {
                prop_assert!(!parts.donors.iter().any(|d| d.name == l.name));
            }
        }

        /// Both subsets are subsequences of the input
        #[test]
        fn stable(counts in proptest::collection::vec(0u32..30, 0..40), low in 0u32..10, extra in 1u32..10) {
            let donor = low + extra;
            let input = stations(&counts);
            let parts = partition(&input, low, donor);

            let input_names: Vec<_> = input.iter().map(|s| s.name.as_str().to_string()).collect();
            for subset in [&parts.low, &parts.donors] {
                let mut pos = 0;
                for s in subset.iter() {
                    let found = input_names[pos..]
                        .iter()
                        .position(|n| n == s.name.as_str());
                    prop_assert!(found.is_some(), "subset is not a subsequence of the input");
                    pos += found.unwrap() + 1;
                }
            }
        }
    }
}
