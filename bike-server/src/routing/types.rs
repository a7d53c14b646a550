//! Route estimator wire DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::Station;

/// Request body for `POST /estimate_route`.
#[derive(Debug, Clone, Serialize)]
pub struct RouteRequest {
    /// The donor station the transfer starts from.
    pub src: RouteEndpoint,

    /// The low-stock station the transfer ends at.
    pub dst: RouteEndpoint,
}

/// One endpoint of a route request.
#[derive(Debug, Clone, Serialize)]
pub struct RouteEndpoint {
    pub station_name: String,
    pub lat: f64,
    pub lon: f64,
}

impl RouteEndpoint {
    /// Build an endpoint from a station record.
    pub fn from_station(station: &Station) -> Self {
        Self {
            station_name: station.name.as_str().to_string(),
            lat: station.position.lat,
            lon: station.position.lon,
        }
    }
}

/// Response from the route estimator.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    pub geometry: GeometryDto,
    pub duration_min: f64,
}

/// GeoJSON-style geometry: coordinates in `[lon, lat]` order.
#[derive(Debug, Clone, Deserialize)]
pub struct GeometryDto {
    pub coordinates: Vec<[f64; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LatLon, StationName};

    #[test]
    fn endpoint_from_station() {
        let station = Station::new(
            StationName::parse("Larcomar").unwrap(),
            LatLon::new(-12.1318, -77.0306),
            15,
            1,
            Some(16),
            None,
        );

        let endpoint = RouteEndpoint::from_station(&station);
        assert_eq!(endpoint.station_name, "Larcomar");
        assert_eq!(endpoint.lat, -12.1318);
        assert_eq!(endpoint.lon, -77.0306);
    }

    #[test]
    fn request_serializes_src_dst() {
        let station = Station::new(
            StationName::parse("A").unwrap(),
            LatLon::new(1.0, 2.0),
            15,
            1,
            None,
            None,
        );
        let request = RouteRequest {
            src: RouteEndpoint::from_station(&station),
            dst: RouteEndpoint::from_station(&station),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["src"]["station_name"], "A");
        assert_eq!(value["dst"]["lat"], 1.0);
    }

    #[test]
    fn response_parses_geojson_coordinates() {
        let json = r#"{
            "geometry": {"coordinates": [[-77.03, -12.12], [-77.04, -12.11]]},
            "duration_min": 8.5
        }"#;

        let response: RouteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.geometry.coordinates.len(), 2);
        assert_eq!(response.geometry.coordinates[0], [-77.03, -12.12]);
        assert_eq!(response.duration_min, 8.5);
    }
}
