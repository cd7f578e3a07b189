//! Unit tests for record service.

use super::*;
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockRecordRepository {
    records: Mutex<Vec<BalanceRecord>>,
    calls: AtomicUsize,
    fail: bool,
}

impl MockRecordRepository {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Database(DatabaseError::QueryFailed(
                "no such table: balance_records".to_string(),
            )));
        }
        Ok(())
    }
}

fn ts() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

#[async_trait]
impl RecordRepositoryTrait for MockRecordRepository {
    fn list(&self, user_id: &str, kind: RecordKind) -> Result<Vec<BalanceRecord>> {
        self.enter()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id && r.kind == kind)
            .cloned()
            .collect())
    }

    fn get_by_id(&self, user_id: &str, kind: RecordKind, record_id: &str) -> Result<BalanceRecord> {
        self.enter()?;
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user_id == user_id && r.kind == kind && r.id == record_id)
            .cloned()
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(record_id.to_string())))
    }

    async fn create(&self, new_record: NewBalanceRecord) -> Result<BalanceRecord> {
        self.enter()?;
        let mut records = self.records.lock().unwrap();
        let record = BalanceRecord {
            id: format!("rec-{}", records.len() + 1),
            user_id: new_record.user_id,
            kind: new_record.kind,
            name: new_record.input.name,
            category: new_record.input.category,
            value: new_record.input.value,
            description: new_record.input.description,
            created_at: ts(),
            updated_at: ts(),
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, record_update: BalanceRecordUpdate) -> Result<BalanceRecord> {
        self.enter()?;
        let mut records = self.records.lock().unwrap();
        let existing = records
            .iter_mut()
            .find(|r| {
                r.user_id == record_update.user_id
                    && r.kind == record_update.kind
                    && r.id == record_update.id
            })
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(record_update.id.clone())))?;
        existing.name = record_update.input.name;
        existing.category = record_update.input.category;
        existing.value = record_update.input.value;
        existing.description = record_update.input.description;
        Ok(existing.clone())
    }

    async fn delete(&self, user_id: &str, kind: RecordKind, record_id: &str) -> Result<usize> {
        self.enter()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| !(r.user_id == user_id && r.kind == kind && r.id == record_id));
        Ok(before - records.len())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn form(name: &str, category: &str, value: &str) -> RecordForm {
    RecordForm {
        name: name.to_string(),
        category: category.to_string(),
        value: value.to_string(),
        description: None,
    }
}

fn setup() -> (Arc<MockRecordRepository>, RecordService) {
    let repo = Arc::new(MockRecordRepository::default());
    let svc = RecordService::new(repo.clone());
    (repo, svc)
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_create_then_fetch_round_trip() {
    let (_repo, svc) = setup();

    let created = svc
        .create_record("u1", RecordKind::Asset, form("Car", "Vehicle", "15000.50"))
        .await
        .unwrap();
    let fetched = svc.get_record("u1", RecordKind::Asset, &created.id).unwrap();

    assert_eq!(fetched.value, dec!(15000.50));
    assert_eq!(fetched.name, "Car");
    assert_eq!(fetched.kind, RecordKind::Asset);
}

#[tokio::test]
async fn test_invalid_value_never_reaches_repository() {
    let (repo, svc) = setup();

    for bad in ["-5", "abc"] {
        let err = svc
            .create_record("u1", RecordKind::Asset, form("Car", "Vehicle", bad))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::Fields(_))));

        let err = svc
            .update_record("u1", RecordKind::Liability, "rec-1", form("Loan", "Debt", bad))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::Fields(_))));
    }

    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let (_repo, svc) = setup();
    let created = svc
        .create_record("u1", RecordKind::Liability, form("Loan", "Debt", "400"))
        .await
        .unwrap();

    let updated = svc
        .update_record(
            "u1",
            RecordKind::Liability,
            &created.id,
            form("Student loan", "Education", "350.25"),
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Student loan");
    assert_eq!(updated.category, "Education");
    assert_eq!(updated.value, dec!(350.25));
}

#[tokio::test]
async fn test_records_are_scoped_by_user_and_kind() {
    let (_repo, svc) = setup();
    let created = svc
        .create_record("u1", RecordKind::Asset, form("Cash", "Cash", "10"))
        .await
        .unwrap();

    assert!(svc
        .get_record("u2", RecordKind::Asset, &created.id)
        .unwrap_err()
        .is_not_found());
    assert!(svc
        .get_record("u1", RecordKind::Liability, &created.id)
        .unwrap_err()
        .is_not_found());
    assert!(svc.list_records("u1", RecordKind::Liability).unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_is_not_found() {
    let (_repo, svc) = setup();
    let created = svc
        .create_record("u1", RecordKind::Asset, form("Cash", "Cash", "10"))
        .await
        .unwrap();

    svc.delete_record("u1", RecordKind::Asset, &created.id)
        .await
        .unwrap();
    let err = svc
        .delete_record("u1", RecordKind::Asset, &created.id)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_persistence_errors_become_generic_messages() {
    let svc = RecordService::new(Arc::new(MockRecordRepository::failing()));

    let cases = [
        (
            svc.list_records("u1", RecordKind::Asset).unwrap_err(),
            "Failed to fetch assets",
        ),
        (
            svc.list_records("u1", RecordKind::Liability).unwrap_err(),
            "Failed to fetch liabilities",
        ),
        (
            svc.create_record("u1", RecordKind::Asset, form("Car", "Vehicle", "1"))
                .await
                .unwrap_err(),
            "Failed to create asset",
        ),
        (
            svc.update_record("u1", RecordKind::Liability, "x", form("Loan", "Debt", "1"))
                .await
                .unwrap_err(),
            "Failed to update liability",
        ),
        (
            svc.delete_record("u1", RecordKind::Asset, "x")
                .await
                .unwrap_err(),
            "Failed to delete asset",
        ),
    ];

    for (err, expected) in cases {
        match err {
            Error::Repository(msg) => assert_eq!(msg, expected),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
