use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};

use super::records_model::{
    BalanceRecord, BalanceRecordUpdate, NewBalanceRecord, RecordForm, RecordKind,
};
use super::records_traits::{RecordRepositoryTrait, RecordServiceTrait};
use super::records_validation::validate_record_form;
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing assets and liabilities.
pub struct RecordService {
    repository: Arc<dyn RecordRepositoryTrait>,
}

impl RecordService {
    pub fn new(repository: Arc<dyn RecordRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Collapses storage failures into a generic message after logging them.
    /// Not-found and validation errors keep their identity.
    fn generic_failure(err: Error, action: &str, subject: &str) -> Error {
        match err {
            Error::Validation(_) => err,
            e if e.is_not_found() => e,
            e => {
                error!("Error {} {}: {}", action, subject, e);
                Error::Repository(format!("Failed to {} {}", action, subject))
            }
        }
    }
}

#[async_trait]
impl RecordServiceTrait for RecordService {
    fn list_records(&self, user_id: &str, kind: RecordKind) -> Result<Vec<BalanceRecord>> {
        self.repository
            .list(user_id, kind)
            .map_err(|e| Self::generic_failure(e, "fetch", kind.plural()))
    }

    fn get_record(
        &self,
        user_id: &str,
        kind: RecordKind,
        record_id: &str,
    ) -> Result<BalanceRecord> {
        self.repository
            .get_by_id(user_id, kind, record_id)
            .map_err(|e| Self::generic_failure(e, "fetch", kind.noun()))
    }

    async fn create_record(
        &self,
        user_id: &str,
        kind: RecordKind,
        form: RecordForm,
    ) -> Result<BalanceRecord> {
        let input = validate_record_form(&form)?;
        let created = self
            .repository
            .create(NewBalanceRecord {
                user_id: user_id.to_string(),
                kind,
                input,
            })
            .await
            .map_err(|e| Self::generic_failure(e, "create", kind.noun()))?;
        debug!("Created {} {} for user {}", kind.noun(), created.id, user_id);
        Ok(created)
    }

    async fn update_record(
        &self,
        user_id: &str,
        kind: RecordKind,
        record_id: &str,
        form: RecordForm,
    ) -> Result<BalanceRecord> {
        let input = validate_record_form(&form)?;
        self.repository
            .update(BalanceRecordUpdate {
                id: record_id.to_string(),
                user_id: user_id.to_string(),
                kind,
                input,
            })
            .await
            .map_err(|e| Self::generic_failure(e, "update", kind.noun()))
    }

    async fn delete_record(&self, user_id: &str, kind: RecordKind, record_id: &str) -> Result<()> {
        let deleted = self
            .repository
            .delete(user_id, kind, record_id)
            .await
            .map_err(|e| Self::generic_failure(e, "delete", kind.noun()))?;
        if deleted == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "{} {}",
                kind.noun(),
                record_id
            ))));
        }
        debug!("Deleted {} {} for user {}", kind.noun(), record_id, user_id);
        Ok(())
    }
}
