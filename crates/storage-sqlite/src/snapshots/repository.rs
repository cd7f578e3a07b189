use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::debug;
use uuid::Uuid;

use networth_core::net_worth::total_of;
use networth_core::records::RecordKind;
use networth_core::snapshot::{NewSnapshot, Snapshot, SnapshotRepositoryTrait, SnapshotTotals};
use networth_core::Result;

use super::model::SnapshotDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::records::load_records;
use crate::schema::net_worth_snapshots;

fn insert_snapshot(conn: &mut SqliteConnection, new_snapshot: NewSnapshot) -> Result<Snapshot> {
    let row = SnapshotDB::from_new(
        Uuid::now_v7().to_string(),
        new_snapshot,
        Utc::now().naive_utc(),
    );
    let inserted = diesel::insert_into(net_worth_snapshots::table)
        .values(&row)
        .returning(SnapshotDB::as_returning())
        .get_result(conn)
        .map_err(StorageError::from)?;
    Snapshot::try_from(inserted)
}

pub struct SnapshotRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl SnapshotRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        SnapshotRepository { pool, writer }
    }
}

#[async_trait]
impl SnapshotRepositoryTrait for SnapshotRepository {
    fn list_snapshots(&self, owner: &str) -> Result<Vec<Snapshot>> {
        let mut conn = get_connection(&self.pool)?;
        net_worth_snapshots::table
            .filter(net_worth_snapshots::user_id.eq(owner))
            .order((
                net_worth_snapshots::created_at.desc(),
                net_worth_snapshots::id.desc(),
            ))
            .select(SnapshotDB::as_select())
            .load::<SnapshotDB>(&mut conn)
            .map_err(StorageError::from)?
            .into_iter()
            .map(Snapshot::try_from)
            .collect()
    }

    async fn create_snapshot(&self, new_snapshot: NewSnapshot) -> Result<Snapshot> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| insert_snapshot(conn, new_snapshot))
            .await
    }

    async fn capture_snapshot(&self, owner: &str) -> Result<Snapshot> {
        let owner = owner.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Snapshot> {
                // Reads and insert share the writer's IMMEDIATE transaction
                let assets_now = load_records(conn, &owner, RecordKind::Asset)?;
                let liabilities_now = load_records(conn, &owner, RecordKind::Liability)?;
                let totals = SnapshotTotals::from_totals(
                    total_of(&assets_now)?,
                    total_of(&liabilities_now)?,
                )?;
                debug!(
                    "Capturing snapshot for user {} from {} assets and {} liabilities",
                    owner,
                    assets_now.len(),
                    liabilities_now.len()
                );

                insert_snapshot(
                    conn,
                    NewSnapshot {
                        user_id: owner,
                        totals,
                    },
                )
            })
            .await
    }
}
