//! Database models for balance records.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use networth_core::records::{BalanceRecord, NewBalanceRecord, RecordKind};
use networth_core::utils::decimal_utils::coerce_decimal;
use networth_core::Result;

/// Database model for one asset or liability row
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::balance_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BalanceRecordDB {
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub name: String,
    pub category: String,
    pub value: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Editable columns of a balance record
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::balance_records)]
#[diesel(treat_none_as_null = true)]
pub struct BalanceRecordUpdateDB {
    pub name: String,
    pub category: String,
    pub value: String,
    pub description: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl BalanceRecordDB {
    pub fn from_new(id: String, new_record: NewBalanceRecord, now: NaiveDateTime) -> Self {
        Self {
            id,
            user_id: new_record.user_id,
            kind: new_record.kind.as_str().to_string(),
            name: new_record.input.name,
            category: new_record.input.category,
            value: new_record.input.value.to_string(),
            description: new_record.input.description,
            created_at: now,
            updated_at: now,
        }
    }
}

// Conversion to domain model. The stored value text goes through decimal
// coercion, so a malformed row is an error rather than a silent zero.
impl TryFrom<BalanceRecordDB> for BalanceRecord {
    type Error = networth_core::Error;

    fn try_from(db: BalanceRecordDB) -> Result<Self> {
        Ok(Self {
            value: coerce_decimal(&db.value)?,
            kind: db.kind.parse::<RecordKind>()?,
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            category: db.category,
            description: db.description,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}
