//! Asset and liability record models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};
use crate::portfolio::net_worth::Valued;

/// Which side of the balance sheet a record sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordKind {
    Asset,
    Liability,
}

impl RecordKind {
    /// Storage representation of the kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Asset => "ASSET",
            RecordKind::Liability => "LIABILITY",
        }
    }

    /// Lower-case noun used in user facing messages.
    pub const fn noun(&self) -> &'static str {
        match self {
            RecordKind::Asset => "asset",
            RecordKind::Liability => "liability",
        }
    }

    /// Plural noun used in user facing messages.
    pub const fn plural(&self) -> &'static str {
        match self {
            RecordKind::Asset => "assets",
            RecordKind::Liability => "liabilities",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASSET" => Ok(RecordKind::Asset),
            "LIABILITY" => Ok(RecordKind::Liability),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown record kind '{}'",
                other
            )))),
        }
    }
}

/// Domain model for an asset or a liability owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRecord {
    pub id: String,
    pub user_id: String,
    pub kind: RecordKind,
    pub name: String,
    pub category: String,
    /// Non-negative magnitude. Liabilities are stored positive and
    /// subtracted during aggregation.
    pub value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Valued for BalanceRecord {
    fn value(&self) -> Decimal {
        self.value
    }
}

/// Raw form submission for creating or updating a record.
///
/// `value` arrives as text and is only turned into a number by validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub value: String,
    pub description: Option<String>,
}

/// Record fields after validation. This is the only input repositories accept.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordInput {
    pub name: String,
    pub category: String,
    pub value: Decimal,
    pub description: Option<String>,
}

/// Input model for inserting a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBalanceRecord {
    pub user_id: String,
    pub kind: RecordKind,
    pub input: RecordInput,
}

/// Input model for replacing the editable fields of an existing record.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceRecordUpdate {
    pub id: String,
    pub user_id: String,
    pub kind: RecordKind,
    pub input: RecordInput,
}
