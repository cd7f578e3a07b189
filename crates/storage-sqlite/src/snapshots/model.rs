//! Database models for net worth snapshots.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use networth_core::snapshot::{NewSnapshot, Snapshot};
use networth_core::utils::decimal_utils::coerce_decimal;
use networth_core::Result;

/// Database model for one snapshot row. Amounts are stored as text.
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::net_worth_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SnapshotDB {
    pub id: String,
    pub user_id: String,
    pub assets: String,
    pub liabilities: String,
    pub networth: String,
    pub created_at: NaiveDateTime,
}

impl SnapshotDB {
    pub fn from_new(id: String, new_snapshot: NewSnapshot, now: NaiveDateTime) -> Self {
        let totals = new_snapshot.totals;
        Self {
            id,
            user_id: new_snapshot.user_id,
            assets: totals.assets.to_string(),
            liabilities: totals.liabilities.to_string(),
            networth: totals.networth.to_string(),
            created_at: now,
        }
    }
}

impl TryFrom<SnapshotDB> for Snapshot {
    type Error = networth_core::Error;

    fn try_from(db: SnapshotDB) -> Result<Self> {
        Ok(Self {
            assets: coerce_decimal(&db.assets)?,
            liabilities: coerce_decimal(&db.liabilities)?,
            networth: coerce_decimal(&db.networth)?,
            id: db.id,
            user_id: db.user_id,
            created_at: db.created_at,
        })
    }
}
