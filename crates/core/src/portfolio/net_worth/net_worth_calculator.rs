//! Pure aggregation functions over monetary records.

use rust_decimal::Decimal;

use super::net_worth_model::NetWorthSummary;
use crate::constants::TOTAL_OUT_OF_RANGE;
use crate::errors::{Error, Result, ValidationError};
use crate::utils::currency::format_currency;

/// Anything that carries a monetary value.
pub trait Valued {
    fn value(&self) -> Decimal;
}

impl Valued for Decimal {
    fn value(&self) -> Decimal {
        *self
    }
}

pub(crate) fn out_of_range() -> Error {
    Error::Validation(ValidationError::InvalidInput(TOTAL_OUT_OF_RANGE.to_string()))
}

/// Sum of the values of `records`. Empty input yields zero.
///
/// Fails instead of overflowing when the sum leaves the `Decimal` range.
pub fn total_of<T: Valued>(records: &[T]) -> Result<Decimal> {
    records.iter().try_fold(Decimal::ZERO, |acc, record| {
        acc.checked_add(record.value()).ok_or_else(out_of_range)
    })
}

/// Net worth is total assets minus total liabilities. It may be negative.
pub fn net_worth(total_assets: Decimal, total_liabilities: Decimal) -> Result<Decimal> {
    total_assets
        .checked_sub(total_liabilities)
        .ok_or_else(out_of_range)
}

/// Totals for a user's balance sheet together with their display strings.
pub fn summarize<A: Valued, L: Valued>(assets: &[A], liabilities: &[L]) -> Result<NetWorthSummary> {
    let total_assets = total_of(assets)?;
    let total_liabilities = total_of(liabilities)?;
    let net_worth = net_worth(total_assets, total_liabilities)?;

    Ok(NetWorthSummary {
        total_assets,
        total_liabilities,
        net_worth,
        formatted_assets: format_currency(total_assets),
        formatted_liabilities: format_currency(total_liabilities),
        formatted_net_worth: format_currency(net_worth),
    })
}
