//! Route estimator client.
//!
//! This module provides an HTTP client for the external routing service
//! that turns a (donor, target) station pair into a path geometry and a
//! travel duration.
//!
//! Key characteristics of the wire protocol:
//! - Geometry coordinates arrive in **`[longitude, latitude]`** order;
//!   domain geometry is `(lat, lon)`. The swap happens exactly once, at
//!   ingestion in this module.
//! - Estimation calls for different pairs are independent; the client
//!   bounds in-flight requests with a semaphore so a planning pass cannot
//!   overwhelm the routing backend.

mod client;
mod error;
mod types;

pub use client::{RouteClient, RouteClientConfig};
pub use error::RouteError;
pub use types::{GeometryDto, RouteEndpoint, RouteRequest, RouteResponse};
