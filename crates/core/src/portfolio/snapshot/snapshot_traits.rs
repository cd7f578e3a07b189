use async_trait::async_trait;

use super::snapshot_model::{ChartPoint, NewSnapshot, Snapshot, SnapshotTotals};
use super::trend::TimeRange;
use crate::errors::Result;

/// Trait for snapshot repository operations
#[async_trait]
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// All snapshots of a user, newest first.
    fn list_snapshots(&self, user_id: &str) -> Result<Vec<Snapshot>>;

    /// Appends one row with the given totals.
    async fn create_snapshot(&self, new_snapshot: NewSnapshot) -> Result<Snapshot>;

    /// Reads the user's current records, aggregates them and appends the
    /// result, all inside one transaction.
    async fn capture_snapshot(&self, user_id: &str) -> Result<Snapshot>;
}

/// Trait for snapshot service operations
#[async_trait]
pub trait SnapshotServiceTrait: Send + Sync {
    async fn record(&self, user_id: &str, totals: SnapshotTotals) -> Result<Snapshot>;

    async fn take_snapshot(&self, user_id: &str) -> Result<Snapshot>;

    fn list_snapshots(&self, user_id: &str, range: TimeRange) -> Result<Vec<Snapshot>>;

    /// Chart points for the range, oldest first.
    fn chart(&self, user_id: &str, range: TimeRange) -> Result<Vec<ChartPoint>>;
}
