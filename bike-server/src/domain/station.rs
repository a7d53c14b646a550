//! Station identity and snapshot record types.

use std::fmt;

use super::geo::LatLon;
use super::tier::StockTier;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// A validated bike-share station name.
///
/// Station names are the identity of a station within a snapshot. This
/// type guarantees the name is non-empty after trimming, so identity
/// comparisons are meaningful.
///
/// # Examples
///
/// ```
/// use bike_server::domain::StationName;
///
/// let name = StationName::parse("Parque Kennedy").unwrap();
/// assert_eq!(name.as_str(), "Parque Kennedy");
///
/// // Whitespace is trimmed
/// assert_eq!(StationName::parse("  Ovalo  ").unwrap().as_str(), "Ovalo");
///
/// // Empty names are rejected
/// assert!(StationName::parse("").is_err());
/// assert!(StationName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationName(String);

impl StationName {
    /// Parse a station name from a string.
    ///
    /// Leading and trailing whitespace is trimmed; the result must be
    /// non-empty.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationName {
                reason: "must not be empty",
            });
        }

        Ok(StationName(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bike-share station as observed in one snapshot.
///
/// Stations are immutable records: no component mutates a `Station` in
/// place, and a refreshed snapshot entirely replaces the prior one.
/// `capacity` and `avg_occupancy` are genuinely optional in the feed and
/// their absence is data to render, never a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Identity, unique within a snapshot.
    pub name: StationName,

    /// Geographic position.
    pub position: LatLon,

    /// Bikes currently available.
    pub free_bikes: u32,

    /// Free docking slots.
    pub empty_slots: u32,

    /// Total docks, when the feed reports it. Normally
    /// `free_bikes + empty_slots`.
    pub capacity: Option<u32>,

    /// Historical average occupancy ratio in [0, 1], when known.
    pub avg_occupancy: Option<f64>,
}

impl Station {
    /// Create a station record.
    ///
    /// A NaN occupancy ratio is normalised to `None` so that downstream
    /// code only ever sees a usable number or an explicit absence.
    pub fn new(
        name: StationName,
        position: LatLon,
        free_bikes: u32,
        empty_slots: u32,
        capacity: Option<u32>,
        avg_occupancy: Option<f64>,
    ) -> Self {
        let avg_occupancy = avg_occupancy.filter(|o| !o.is_nan());

        Self {
            name,
            position,
            free_bikes,
            empty_slots,
            capacity,
            avg_occupancy,
        }
    }

    /// Stock tier derived from the average occupancy.
    ///
    /// Presentation colouring only; the planner decides low/donor status
    /// from raw `free_bikes` counts.
    pub fn tier(&self) -> StockTier {
        StockTier::classify(self.avg_occupancy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    #[test]
    fn parse_valid_names() {
        assert!(StationName::parse("Parque Kennedy").is_ok());
        assert!(StationName::parse("28 de Julio").is_ok());
        assert!(StationName::parse("X").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(StationName::parse("").is_err());
        assert!(StationName::parse("   ").is_err());
        assert!(StationName::parse("\t\n").is_err());
    }

    #[test]
    fn trims_whitespace() {
        let n = StationName::parse("  Ovalo Gutierrez ").unwrap();
        assert_eq!(n.as_str(), "Ovalo Gutierrez");
    }

    #[test]
    fn display_and_debug() {
        let n = name("Larcomar");
        assert_eq!(format!("{}", n), "Larcomar");
        assert_eq!(format!("{:?}", n), "StationName(Larcomar)");
    }

    #[test]
    fn equality_and_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(name("Larcomar"));
        assert!(set.contains(&name("Larcomar")));
        assert!(!set.contains(&name("Ovalo")));
    }

    #[test]
    fn nan_occupancy_normalised_to_none() {
        let s = Station::new(
            name("A"),
            LatLon::new(0.0, 0.0),
            4,
            6,
            Some(10),
            Some(f64::NAN),
        );
        assert_eq!(s.avg_occupancy, None);
        assert_eq!(s.tier(), StockTier::Unknown);
    }

    #[test]
    fn tier_follows_occupancy() {
        let s = Station::new(
            name("A"),
            LatLon::new(0.0, 0.0),
            4,
            6,
            Some(10),
            Some(0.85),
        );
        assert_eq!(s.tier(), StockTier::Critical);
    }

    #[test]
    fn missing_capacity_is_preserved() {
        let s = Station::new(name("A"), LatLon::new(0.0, 0.0), 4, 6, None, None);
        assert_eq!(s.capacity, None);
        assert_eq!(s.tier(), StockTier::Unknown);
    }
}
