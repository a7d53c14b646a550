//! Mock snapshot client for development without a live feed.
//!
//! Loads a captured `GET /stations` response from a JSON file and serves
//! it as if it were live.

use std::path::PathBuf;

use chrono::Utc;

use crate::domain::Snapshot;

use super::convert::convert_snapshot;
use super::error::SnapshotError;
use super::types::StationRecord;

/// Snapshot client that reads station records from a file.
#[derive(Debug, Clone)]
pub struct MockSnapshotClient {
    path: PathBuf,
}

impl MockSnapshotClient {
    /// Create a mock client serving the given JSON file.
    ///
    /// The file holds the same JSON array the live feed serves.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the captured snapshot.
    ///
    /// Mimics `SnapshotClient::fetch`; `fetched_at` is the load time, not
    /// the capture time.
    pub async fn fetch(&self) -> Result<Snapshot, SnapshotError> {
        let json = std::fs::read_to_string(&self.path).map_err(|e| SnapshotError::File {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let records: Vec<StationRecord> =
            serde_json::from_str(&json).map_err(|e| SnapshotError::Json {
                message: e.to_string(),
            })?;

        Ok(Snapshot::new(convert_snapshot(&records), Utc::now()))
    }
}
