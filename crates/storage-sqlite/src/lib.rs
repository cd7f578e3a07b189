//! SQLite storage implementation for the net worth tracker.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `networth-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for records and snapshots
//! - Database-specific model types (with Diesel derives)
//!
//! This is the only crate in the workspace where Diesel appears.

pub mod db;
pub mod errors;
pub mod records;
pub mod schema;
pub mod snapshots;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use records::RecordRepository;
pub use snapshots::SnapshotRepository;

// Re-export from networth-core for convenience
pub use networth_core::errors::{DatabaseError, Error, Result};
