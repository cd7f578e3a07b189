//! Net worth service traits.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::net_worth_model::NetWorthSummary;
use crate::errors::Result;

/// Trait defining the contract for net worth service operations.
pub trait NetWorthServiceTrait: Send + Sync {
    /// Current totals for a user.
    ///
    /// Net Worth = Total Assets - Total Liabilities
    fn get_net_worth(&self, user_id: &str) -> Result<NetWorthSummary>;

    /// Percentage of asset value held in each category.
    fn get_allocation(&self, user_id: &str) -> Result<BTreeMap<String, Decimal>>;
}
