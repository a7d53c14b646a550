//! A point-in-time view of every station in the network.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::station::{Station, StationName};

/// An immutable snapshot of station stock levels.
///
/// A refreshed snapshot entirely replaces the prior one; planning reads a
/// snapshot without mutating it, so concurrent plans over the same or
/// different snapshots need no coordination.
#[derive(Debug, Clone)]
pub struct Snapshot {
    stations: Vec<Arc<Station>>,
    fetched_at: DateTime<Utc>,
}

impl Snapshot {
    /// Create a snapshot from validated stations.
    pub fn new(stations: Vec<Arc<Station>>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            stations,
            fetched_at,
        }
    }

    /// The stations, in feed order.
    pub fn stations(&self) -> &[Arc<Station>] {
        &self.stations
    }

    /// When this snapshot was captured.
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the snapshot has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Find a station by name.
    pub fn find(&self, name: &StationName) -> Option<&Arc<Station>> {
        self.stations.iter().find(|s| &s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LatLon;

    fn station(name: &str) -> Arc<Station> {
        Arc::new(Station::new(
            StationName::parse(name).unwrap(),
            LatLon::new(0.0, 0.0),
            4,
            6,
            Some(10),
            None,
        ))
    }

    #[test]
    fn find_by_name() {
        let snapshot = Snapshot::new(vec![station("A"), station("B")], Utc::now());

        assert_eq!(snapshot.len(), 2);
        assert!(!snapshot.is_empty());
        assert!(snapshot.find(&StationName::parse("B").unwrap()).is_some());
        assert!(snapshot.find(&StationName::parse("C").unwrap()).is_none());
    }

    #[test]
    fn empty_snapshot() {
        let snapshot = Snapshot::new(vec![], Utc::now());
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }
}
