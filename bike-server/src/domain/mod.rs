//! Domain types for the redistribution planner.
//!
//! This module contains the core domain model: validated station records,
//! coordinates with great-circle distance, stock-level classification and
//! the route estimate attached to donor suggestions. Types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod geo;
mod route;
mod snapshot;
mod station;
mod tier;

pub use geo::LatLon;
pub use route::RouteEstimate;
pub use snapshot::Snapshot;
pub use station::{InvalidStationName, Station, StationName};
pub use tier::StockTier;
