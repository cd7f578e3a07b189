use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::portfolio::net_worth::net_worth;

/// A user's balance sheet totals at one point in time. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: String,
    pub user_id: String,
    pub assets: Decimal,
    pub liabilities: Decimal,
    pub networth: Decimal,
    pub created_at: NaiveDateTime,
}

/// The three figures a snapshot stores.
///
/// `record` persists these as given; nothing re-checks that `networth`
/// equals `assets - liabilities`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotTotals {
    pub assets: Decimal,
    pub liabilities: Decimal,
    pub networth: Decimal,
}

impl SnapshotTotals {
    /// Totals with the net worth derived from the other two figures.
    pub fn from_totals(assets: Decimal, liabilities: Decimal) -> Result<Self> {
        Ok(Self {
            assets,
            liabilities,
            networth: net_worth(assets, liabilities)?,
        })
    }
}

/// Input model for appending a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSnapshot {
    pub user_id: String,
    pub totals: SnapshotTotals,
}

/// One point of the net worth trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Short month label, e.g. `Oct 2026`
    pub date: String,
    pub value: Decimal,
}
