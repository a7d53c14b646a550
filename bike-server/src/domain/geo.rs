//! Geographic coordinates and great-circle distance.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A position in degrees latitude/longitude.
///
/// Also the element type of route geometry. Geometry held in domain types
/// is always in `(lat, lon)` order; the `[lon, lat]` wire order used by the
/// routing service is swapped once at ingestion and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    /// Create a position from degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in kilometres.
    ///
    /// Haversine formula. Symmetric, zero for identical coordinates, never
    /// fails for finite inputs.
    pub fn distance_km(&self, other: &LatLon) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let d_phi = (other.lat - self.lat).to_radians();
        let d_lambda = (other.lon - self.lon).to_radians();

        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = LatLon> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| LatLon::new(lat, lon))
    }

    proptest! {
        /// distance(A, B) == distance(B, A)
        #[test]
        fn symmetry(a in coordinate(), b in coordinate()) {
            prop_assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-9);
        }

        /// Distances are never negative
        #[test]
        fn non_negative(a in coordinate(), b in coordinate()) {
            prop_assert!(a.distance_km(&b) >= 0.0);
        }

        /// distance(A, A) == 0
        #[test]
        fn identity(a in coordinate()) {
            prop_assert_eq!(a.distance_km(&a), 0.0);
        }
    }
}
