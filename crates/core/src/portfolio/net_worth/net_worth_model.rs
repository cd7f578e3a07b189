//! Net worth domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance sheet totals with display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSummary {
    /// Sum of all asset values
    pub total_assets: Decimal,
    /// Sum of all liability values (positive magnitude)
    pub total_liabilities: Decimal,
    /// total_assets - total_liabilities
    pub net_worth: Decimal,
    pub formatted_assets: String,
    pub formatted_liabilities: String,
    pub formatted_net_worth: String,
}
