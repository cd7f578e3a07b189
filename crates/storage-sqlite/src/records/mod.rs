//! SQLite storage implementation for assets and liabilities.

mod model;
mod repository;

pub use model::{BalanceRecordDB, BalanceRecordUpdateDB};
pub use repository::RecordRepository;

pub(crate) use repository::load_records;
