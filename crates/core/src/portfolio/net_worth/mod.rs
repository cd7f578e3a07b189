//! Net worth calculation module.
//!
//! Sums asset and liability records into totals, derives net worth and
//! produces display strings for the dashboard.

mod net_worth_calculator;
mod net_worth_model;
mod net_worth_service;
mod net_worth_traits;

pub use net_worth_calculator::*;
pub use net_worth_model::*;
pub use net_worth_service::*;
pub use net_worth_traits::*;
