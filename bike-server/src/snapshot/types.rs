//! Station feed wire DTOs.
//!
//! These types map directly to the JSON the feed serves. Fields are
//! `Option` because real feeds omit values or send null; which absences
//! are fatal for a record is decided in `convert`, not here.

use serde::{Deserialize, Deserializer};

/// One station record as served by `GET /stations`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationRecord {
    /// Station name; the station's identity within a snapshot.
    pub station_name: Option<String>,

    /// Latitude in degrees.
    pub lat: Option<f64>,

    /// Longitude in degrees.
    pub lon: Option<f64>,

    /// Bikes currently available.
    pub free_bikes: Option<u32>,

    /// Free docking slots.
    pub empty_slots: Option<u32>,

    /// Total docks.
    pub capacity: Option<u32>,

    /// Historical average occupancy ratio. Feeds have been observed to
    /// send strings or other junk here; anything non-numeric reads as
    /// absent rather than failing the record.
    #[serde(default, deserialize_with = "lenient_ratio")]
    pub avg_occupancy: Option<f64>,
}

/// Deserialize a ratio that may arrive as a number, null, or junk.
fn lenient_ratio<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_record() {
        let json = r#"{
            "station_name": "Parque Kennedy",
            "lat": -12.1219,
            "lon": -77.0297,
            "free_bikes": 7,
            "empty_slots": 5,
            "capacity": 12,
            "avg_occupancy": 0.58
        }"#;

        let record: StationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.station_name.as_deref(), Some("Parque Kennedy"));
        assert_eq!(record.free_bikes, Some(7));
        assert_eq!(record.avg_occupancy, Some(0.58));
    }

    #[test]
    fn missing_fields_are_none() {
        let record: StationRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.station_name, None);
        assert_eq!(record.lat, None);
        assert_eq!(record.avg_occupancy, None);
    }

    #[test]
    fn non_numeric_occupancy_reads_as_absent() {
        let record: StationRecord =
            serde_json::from_str(r#"{"avg_occupancy": "N/D"}"#).unwrap();
        assert_eq!(record.avg_occupancy, None);

        let record: StationRecord =
            serde_json::from_str(r#"{"avg_occupancy": null}"#).unwrap();
        assert_eq!(record.avg_occupancy, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{"station_name": "A", "temp_c": 21.5, "wind_speed": 3.2}"#;
        let record: StationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.station_name.as_deref(), Some("A"));
    }
}
