//! Station snapshot feed.
//!
//! The feed supplies the current list of stations with live stock levels.
//! This module only pulls: polling cadence is the caller's concern. Raw
//! records are validated per-record at ingestion, so one malformed station
//! never discards the rest of the snapshot.

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{SnapshotClient, SnapshotClientConfig};
pub use convert::{RecordError, convert_record, convert_snapshot};
pub use error::SnapshotError;
pub use mock::MockSnapshotClient;
pub use types::StationRecord;

use crate::domain::Snapshot;

/// A snapshot source: the live feed, or a captured file for development.
#[derive(Debug, Clone)]
pub enum SnapshotSource {
    Live(SnapshotClient),
    Mock(MockSnapshotClient),
}

impl SnapshotSource {
    /// Fetch the current snapshot.
    pub async fn fetch(&self) -> Result<Snapshot, SnapshotError> {
        match self {
            SnapshotSource::Live(client) => client.fetch().await,
            SnapshotSource::Mock(client) => client.fetch().await,
        }
    }
}
