//! Portfolio module - aggregation over records and the snapshot history.

pub mod allocation;
pub mod net_worth;
pub mod snapshot;
