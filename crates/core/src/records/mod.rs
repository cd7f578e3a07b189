//! Records module - assets and liabilities, their validation, services and traits.

mod records_model;
mod records_service;
mod records_traits;
mod records_validation;

pub use records_model::{
    BalanceRecord, BalanceRecordUpdate, NewBalanceRecord, RecordForm, RecordInput, RecordKind,
};
pub use records_service::RecordService;
pub use records_traits::{RecordRepositoryTrait, RecordServiceTrait};
pub use records_validation::validate_record_form;

#[cfg(test)]
mod records_service_tests;
