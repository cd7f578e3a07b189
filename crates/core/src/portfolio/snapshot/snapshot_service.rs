use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error};

use super::snapshot_model::{ChartPoint, NewSnapshot, Snapshot, SnapshotTotals};
use super::snapshot_traits::{SnapshotRepositoryTrait, SnapshotServiceTrait};
use super::trend::{chart_points, filter_by_range, TimeRange};
use crate::constants::{SNAPSHOT_CREATE_FAILED, SNAPSHOT_FETCH_FAILED};
use crate::errors::{Error, Result};

/// Records net worth snapshots and serves the trend over them.
pub struct SnapshotService {
    repository: Arc<dyn SnapshotRepositoryTrait>,
}

impl SnapshotService {
    pub fn new(repository: Arc<dyn SnapshotRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn range_of(&self, user_id: &str, range: TimeRange) -> Result<Vec<Snapshot>> {
        let snapshots = self.repository.list_snapshots(user_id).map_err(|e| {
            error!("Error fetching snapshots for user {}: {}", user_id, e);
            Error::Repository(SNAPSHOT_FETCH_FAILED.to_string())
        })?;
        Ok(filter_by_range(
            snapshots,
            range,
            Utc::now().naive_utc(),
        ))
    }
}

#[async_trait]
impl SnapshotServiceTrait for SnapshotService {
    async fn record(&self, user_id: &str, totals: SnapshotTotals) -> Result<Snapshot> {
        let snapshot = self
            .repository
            .create_snapshot(NewSnapshot {
                user_id: user_id.to_string(),
                totals,
            })
            .await
            .map_err(|e| {
                error!("Error creating snapshot for user {}: {}", user_id, e);
                Error::Repository(SNAPSHOT_CREATE_FAILED.to_string())
            })?;
        debug!("Recorded snapshot {} for user {}", snapshot.id, user_id);
        Ok(snapshot)
    }

    async fn take_snapshot(&self, user_id: &str) -> Result<Snapshot> {
        let snapshot = self
            .repository
            .capture_snapshot(user_id)
            .await
            .map_err(|e| match e {
                // Totals that do not fit are the user's data, not a storage fault
                Error::Validation(_) => e,
                e => {
                    error!("Error creating snapshot for user {}: {}", user_id, e);
                    Error::Repository(SNAPSHOT_CREATE_FAILED.to_string())
                }
            })?;
        debug!(
            "Captured snapshot {} for user {}: net worth {}",
            snapshot.id, user_id, snapshot.networth
        );
        Ok(snapshot)
    }

    fn list_snapshots(&self, user_id: &str, range: TimeRange) -> Result<Vec<Snapshot>> {
        self.range_of(user_id, range)
    }

    fn chart(&self, user_id: &str, range: TimeRange) -> Result<Vec<ChartPoint>> {
        let snapshots = self.range_of(user_id, range)?;
        Ok(chart_points(&snapshots))
    }
}
