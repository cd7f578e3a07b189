use async_trait::async_trait;

use super::records_model::{
    BalanceRecord, BalanceRecordUpdate, NewBalanceRecord, RecordForm, RecordKind,
};
use crate::errors::Result;

/// Trait for balance record repository operations
#[async_trait]
pub trait RecordRepositoryTrait: Send + Sync {
    /// Records of one kind owned by `user_id`, newest first.
    fn list(&self, user_id: &str, kind: RecordKind) -> Result<Vec<BalanceRecord>>;
    fn get_by_id(&self, user_id: &str, kind: RecordKind, record_id: &str) -> Result<BalanceRecord>;
    async fn create(&self, new_record: NewBalanceRecord) -> Result<BalanceRecord>;
    async fn update(&self, record_update: BalanceRecordUpdate) -> Result<BalanceRecord>;
    async fn delete(&self, user_id: &str, kind: RecordKind, record_id: &str) -> Result<usize>;
}

/// Trait for balance record service operations
#[async_trait]
pub trait RecordServiceTrait: Send + Sync {
    fn list_records(&self, user_id: &str, kind: RecordKind) -> Result<Vec<BalanceRecord>>;
    fn get_record(&self, user_id: &str, kind: RecordKind, record_id: &str)
        -> Result<BalanceRecord>;
    async fn create_record(
        &self,
        user_id: &str,
        kind: RecordKind,
        form: RecordForm,
    ) -> Result<BalanceRecord>;
    async fn update_record(
        &self,
        user_id: &str,
        kind: RecordKind,
        record_id: &str,
        form: RecordForm,
    ) -> Result<BalanceRecord>;
    async fn delete_record(&self, user_id: &str, kind: RecordKind, record_id: &str) -> Result<()>;
}
