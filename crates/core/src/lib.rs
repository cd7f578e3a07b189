//! Net Worth Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the net worth tracker:
//! asset and liability records, the aggregation that turns them into
//! totals, and the snapshot history used for trend charts.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod records;
pub mod utils;

// Re-export common types from records and portfolio modules
pub use portfolio::*;
pub use records::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
