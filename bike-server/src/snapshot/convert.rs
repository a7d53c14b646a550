//! Conversion from raw feed records to validated domain stations.
//!
//! Rejection is per-record: a station missing its identity or coordinates
//! is unusable and dropped with a warning, while every other gap degrades
//! to an explicit absence on the domain type.

use std::sync::Arc;

use tracing::warn;

use crate::domain::{LatLon, Station, StationName};

use super::types::StationRecord;

/// Why a single feed record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// No station_name field
    #[error("missing station_name")]
    MissingName,

    /// station_name present but empty
    #[error("empty station_name")]
    InvalidName,

    /// lat/lon missing or non-finite
    #[error("missing or non-finite lat/lon")]
    InvalidPosition,

    /// No free_bikes count
    #[error("missing free_bikes")]
    MissingFreeBikes,
}

/// Validate a single feed record into a domain station.
pub fn convert_record(record: &StationRecord) -> Result<Station, RecordError> {
    let name = record
        .station_name
        .as_deref()
        .ok_or(RecordError::MissingName)?;
    let name = StationName::parse(name).map_err(|_| RecordError::InvalidName)?;

    let position = match (record.lat, record.lon) {
        (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => LatLon::new(lat, lon),
        _ => return Err(RecordError::InvalidPosition),
    };

    let free_bikes = record.free_bikes.ok_or(RecordError::MissingFreeBikes)?;

    // Feeds that omit empty_slots usually report capacity; reconstruct the
    // count from it, clamped at zero
    let empty_slots = record
        .empty_slots
        .unwrap_or_else(|| record.capacity.map_or(0, |cap| cap.saturating_sub(free_bikes)));

    Ok(Station::new(
        name,
        position,
        free_bikes,
        empty_slots,
        record.capacity,
        record.avg_occupancy,
    ))
}

/// Convert a whole feed response, dropping invalid records individually.
pub fn convert_snapshot(records: &[StationRecord]) -> Vec<Arc<Station>> {
    let mut stations = Vec::with_capacity(records.len());

    for record in records {
        match convert_record(record) {
            Ok(station) => stations.push(Arc::new(station)),
            Err(e) => warn!(
                station = record.station_name.as_deref().unwrap_or("<unnamed>"),
                error = %e,
                "dropping invalid station record"
            ),
        }
    }

    stations
}
