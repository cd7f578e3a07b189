//! Currency formatting for display.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Formats an amount as US dollars, e.g. `$1,234.56` or `-$600.00`.
///
/// Rounds half away from zero to two decimal places.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let mut abs = rounded.abs();
    abs.rescale(DISPLAY_DECIMAL_PRECISION);
    let digits = abs.to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{}${}.{}", sign, group_thousands(whole), fraction)
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
