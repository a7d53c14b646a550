//! Stock-level classification.

use serde::Serialize;

/// Discrete stock tier derived from a station's average occupancy.
///
/// Consumed by the presentation layer for marker colouring. Low/donor
/// status in the planner is computed from raw `free_bikes` counts, not
/// from this tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockTier {
    /// No usable occupancy figure.
    Unknown,
    /// Occupancy in [0, 0.3).
    Low,
    /// Occupancy in [0.3, 0.6).
    Medium,
    /// Occupancy in [0.6, 0.8).
    High,
    /// Occupancy at or above 0.8.
    Critical,
}

impl StockTier {
    /// Classify an occupancy ratio.
    ///
    /// Total: `None` and NaN map to `Unknown`, every other value falls in
    /// exactly one bucket. The buckets are half-open, so 0.3, 0.6 and 0.8
    /// each belong to the higher tier.
    pub fn classify(occupancy: Option<f64>) -> StockTier {
        match occupancy {
            None => StockTier::Unknown,
            Some(o) if o.is_nan() => StockTier::Unknown,
            Some(o) if o < 0.3 => StockTier::Low,
            Some(o) if o < 0.6 => StockTier::Medium,
            Some(o) if o < 0.8 => StockTier::High,
            Some(_) => StockTier::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_is_unknown() {
        assert_eq!(StockTier::classify(None), StockTier::Unknown);
        assert_eq!(StockTier::classify(Some(f64::NAN)), StockTier::Unknown);
    }

    #[test]
    fn buckets() {
        assert_eq!(StockTier::classify(Some(0.0)), StockTier::Low);
        assert_eq!(StockTier::classify(Some(0.29)), StockTier::Low);
        assert_eq!(StockTier::classify(Some(0.45)), StockTier::Medium);
        assert_eq!(StockTier::classify(Some(0.7)), StockTier::High);
        assert_eq!(StockTier::classify(Some(0.95)), StockTier::Critical);
        assert_eq!(StockTier::classify(Some(1.0)), StockTier::Critical);
    }

    #[test]
    fn boundaries_belong_to_higher_tier() {
        assert_eq!(StockTier::classify(Some(0.3)), StockTier::Medium);
        assert_eq!(StockTier::classify(Some(0.6)), StockTier::High);
        assert_eq!(StockTier::classify(Some(0.8)), StockTier::Critical);
    }

    #[test]
    fn out_of_range_values_still_classify() {
        // The intervals are read as written: anything below 0.3 is Low,
        // anything at or above 0.8 is Critical
        assert_eq!(StockTier::classify(Some(-0.5)), StockTier::Low);
        assert_eq!(StockTier::classify(Some(3.0)), StockTier::Critical);
        assert_eq!(StockTier::classify(Some(f64::INFINITY)), StockTier::Critical);
        assert_eq!(StockTier::classify(Some(f64::NEG_INFINITY)), StockTier::Low);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&StockTier::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(
            serde_json::to_string(&StockTier::Unknown).unwrap(),
            "\"unknown\""
        );
    }
}
