//! Planner configuration.

use std::time::Duration;

use super::plan::PlanError;

/// Configuration parameters for redistribution planning.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Stations with at most this many free bikes are low on stock.
    pub low_threshold: u32,

    /// Stations with at least this many free bikes can donate.
    /// Must be strictly above `low_threshold`.
    pub donor_threshold: u32,

    /// How many donors to rank per target (the display shortlist).
    pub shortlist_size: usize,

    /// Maximum concurrent route-estimation calls per planning pass.
    pub max_concurrent_routes: usize,

    /// Timeout for a single route-estimation call (seconds).
    /// A timed-out pair degrades like any other estimation failure.
    pub route_timeout_secs: u64,
}

impl PlanConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        low_threshold: u32,
        donor_threshold: u32,
        shortlist_size: usize,
        max_concurrent_routes: usize,
        route_timeout_secs: u64,
    ) -> Self {
        Self {
            low_threshold,
            donor_threshold,
            shortlist_size,
            max_concurrent_routes,
            route_timeout_secs,
        }
    }

    /// Returns the per-call route timeout as a Duration.
    pub fn route_timeout(&self) -> Duration {
        Duration::from_secs(self.route_timeout_secs)
    }

    /// Check the threshold invariant.
    ///
    /// A station must never qualify as low and donor at once, which
    /// requires `low_threshold < donor_threshold`.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.low_threshold >= self.donor_threshold {
            return Err(PlanError::InvalidThresholds {
                low: self.low_threshold,
                donor: self.donor_threshold,
            });
        }

        Ok(())
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            low_threshold: 5,
            donor_threshold: 10,
            shortlist_size: 3,
            max_concurrent_routes: 4,
            route_timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlanConfig::default();

        assert_eq!(config.low_threshold, 5);
        assert_eq!(config.donor_threshold, 10);
        assert_eq!(config.shortlist_size, 3);
        assert_eq!(config.max_concurrent_routes, 4);
        assert_eq!(config.route_timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_config() {
        let config = PlanConfig::new(3, 8, 5, 2, 15);

        assert_eq!(config.low_threshold, 3);
        assert_eq!(config.donor_threshold, 8);
        assert_eq!(config.shortlist_size, 5);
        assert_eq!(config.max_concurrent_routes, 2);
        assert_eq!(config.route_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn overlapping_thresholds_rejected() {
        let config = PlanConfig::new(10, 10, 3, 4, 10);
        assert!(matches!(
            config.validate(),
            Err(PlanError::InvalidThresholds { low: 10, donor: 10 })
        ));

        let config = PlanConfig::new(12, 10, 3, 4, 10);
        assert!(config.validate().is_err());
    }
}
