//! SQLite storage implementation for net worth snapshots.

mod model;
mod repository;

pub use model::SnapshotDB;
pub use repository::SnapshotRepository;
