//! Route estimation abstraction used by the planner.

use crate::domain::{RouteEstimate, Station};

/// Error from a route estimation call.
///
/// The planner never aborts on one of these; the failing pair degrades
/// into a suggestion without geometry or duration, and the message is
/// surfaced as a per-pair warning on the plan.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct EstimateError {
    message: String,
}

impl EstimateError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Trait for estimating a transfer route between two stations.
///
/// This abstraction allows the planner to be tested with mock data.
/// Calls for different pairs are independent and may be issued
/// concurrently by the planner's fan-out.
pub trait RouteEstimator {
    /// Estimate a route from `src` (donor) to `dst` (target).
    async fn estimate_route(
        &self,
        src: &Station,
        dst: &Station,
    ) -> Result<RouteEstimate, EstimateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EstimateError::new("routing backend unreachable");
        assert_eq!(err.to_string(), "routing backend unreachable");
    }
}
