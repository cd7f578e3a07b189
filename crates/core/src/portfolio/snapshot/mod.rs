//! Snapshot module - point-in-time net worth records and the trend over them.

mod snapshot_model;
mod snapshot_service;
mod snapshot_traits;
mod trend;

pub use snapshot_model::*;
pub use snapshot_service::*;
pub use snapshot_traits::*;
pub use trend::*;
