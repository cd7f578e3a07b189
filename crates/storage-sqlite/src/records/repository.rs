use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use uuid::Uuid;

use networth_core::records::{
    BalanceRecord, BalanceRecordUpdate, NewBalanceRecord, RecordKind, RecordRepositoryTrait,
};
use networth_core::Result;

use super::model::{BalanceRecordDB, BalanceRecordUpdateDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::balance_records;

/// Loads one user's records of one kind, newest first.
///
/// Takes a bare connection so the snapshot capture can call it inside the
/// writer's transaction.
pub(crate) fn load_records(
    conn: &mut SqliteConnection,
    owner: &str,
    record_kind: RecordKind,
) -> Result<Vec<BalanceRecord>> {
    balance_records::table
        .filter(balance_records::user_id.eq(owner))
        .filter(balance_records::kind.eq(record_kind.as_str()))
        .order((balance_records::created_at.desc(), balance_records::id.desc()))
        .select(BalanceRecordDB::as_select())
        .load::<BalanceRecordDB>(conn)
        .map_err(StorageError::from)?
        .into_iter()
        .map(BalanceRecord::try_from)
        .collect()
}

pub struct RecordRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl RecordRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        RecordRepository { pool, writer }
    }
}

#[async_trait]
impl RecordRepositoryTrait for RecordRepository {
    fn list(&self, owner: &str, record_kind: RecordKind) -> Result<Vec<BalanceRecord>> {
        let mut conn = get_connection(&self.pool)?;
        load_records(&mut conn, owner, record_kind)
    }

    fn get_by_id(
        &self,
        owner: &str,
        record_kind: RecordKind,
        record_id: &str,
    ) -> Result<BalanceRecord> {
        let mut conn = get_connection(&self.pool)?;
        let row = balance_records::table
            .filter(balance_records::id.eq(record_id))
            .filter(balance_records::user_id.eq(owner))
            .filter(balance_records::kind.eq(record_kind.as_str()))
            .select(BalanceRecordDB::as_select())
            .first::<BalanceRecordDB>(&mut conn)
            .map_err(StorageError::from)?;
        BalanceRecord::try_from(row)
    }

    async fn create(&self, new_record: NewBalanceRecord) -> Result<BalanceRecord> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<BalanceRecord> {
                let row = BalanceRecordDB::from_new(
                    Uuid::now_v7().to_string(),
                    new_record,
                    Utc::now().naive_utc(),
                );

                let inserted = diesel::insert_into(balance_records::table)
                    .values(&row)
                    .returning(BalanceRecordDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                BalanceRecord::try_from(inserted)
            })
            .await
    }

    async fn update(&self, record_update: BalanceRecordUpdate) -> Result<BalanceRecord> {
        let changes = BalanceRecordUpdateDB {
            name: record_update.input.name,
            category: record_update.input.category,
            value: record_update.input.value.to_string(),
            description: record_update.input.description,
            updated_at: Utc::now().naive_utc(),
        };
        let record_id = record_update.id;
        let owner = record_update.user_id;
        let record_kind = record_update.kind;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<BalanceRecord> {
                // No matching row surfaces as Diesel's NotFound
                let updated = diesel::update(
                    balance_records::table
                        .filter(balance_records::id.eq(&record_id))
                        .filter(balance_records::user_id.eq(&owner))
                        .filter(balance_records::kind.eq(record_kind.as_str())),
                )
                .set(&changes)
                .returning(BalanceRecordDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                BalanceRecord::try_from(updated)
            })
            .await
    }

    async fn delete(&self, owner: &str, record_kind: RecordKind, record_id: &str) -> Result<usize> {
        let owner = owner.to_string();
        let record_id = record_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    balance_records::table
                        .filter(balance_records::id.eq(record_id))
                        .filter(balance_records::user_id.eq(owner))
                        .filter(balance_records::kind.eq(record_kind.as_str())),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
