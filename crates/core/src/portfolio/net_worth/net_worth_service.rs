//! Net worth calculation service implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use super::net_worth_calculator::summarize;
use super::net_worth_model::NetWorthSummary;
use super::net_worth_traits::NetWorthServiceTrait;
use crate::errors::Result;
use crate::portfolio::allocation::allocation;
use crate::records::{RecordKind, RecordServiceTrait};

/// Service for calculating net worth from the current records.
pub struct NetWorthService {
    record_service: Arc<dyn RecordServiceTrait>,
}

impl NetWorthService {
    pub fn new(record_service: Arc<dyn RecordServiceTrait>) -> Self {
        Self { record_service }
    }
}

impl NetWorthServiceTrait for NetWorthService {
    fn get_net_worth(&self, user_id: &str) -> Result<NetWorthSummary> {
        let assets = self.record_service.list_records(user_id, RecordKind::Asset)?;
        let liabilities = self
            .record_service
            .list_records(user_id, RecordKind::Liability)?;

        let summary = summarize(&assets, &liabilities)?;
        debug!(
            "Net worth for user {}: {} assets, {} liabilities, net {}",
            user_id,
            assets.len(),
            liabilities.len(),
            summary.net_worth
        );
        Ok(summary)
    }

    fn get_allocation(&self, user_id: &str) -> Result<BTreeMap<String, Decimal>> {
        let assets = self.record_service.list_records(user_id, RecordKind::Asset)?;
        allocation(&assets)
    }
}
