use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Result;
use crate::portfolio::net_worth::{out_of_range, total_of, Valued};
use crate::records::BalanceRecord;

/// Percentage of total asset value held in each category.
///
/// Categories are compared case-sensitively. When the total is zero there is
/// nothing to divide and the result is empty. Percentages are not rounded.
pub fn allocation(assets: &[BalanceRecord]) -> Result<BTreeMap<String, Decimal>> {
    let total = total_of(assets)?;
    if total.is_zero() {
        return Ok(BTreeMap::new());
    }

    let mut by_category: BTreeMap<String, Decimal> = BTreeMap::new();
    for asset in assets {
        let slot = by_category.entry(asset.category.clone()).or_default();
        *slot = slot.checked_add(asset.value()).ok_or_else(out_of_range)?;
    }

    by_category
        .into_iter()
        .map(|(category, value)| {
            value
                .checked_div(total)
                .and_then(|share| share.checked_mul(dec!(100)))
                .map(|percent| (category, percent))
                .ok_or_else(out_of_range)
        })
        .collect()
}
