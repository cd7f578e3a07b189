//! Value coercion between persisted text and `Decimal`.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::{Result, ValidationError};

/// Parses a decimal written in plain (`1234.50`) or scientific (`1.2345e3`)
/// notation. Returns `None` for anything else, including empty input and
/// `_` digit separators.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    if raw.is_empty() || raw.contains('_') {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Normalizes a persisted decimal-like value into a `Decimal`.
///
/// Values are stored as TEXT, so anything that is not a number here means
/// the row was written by something other than this application.
pub fn coerce_decimal(raw: &str) -> Result<Decimal> {
    parse_decimal(raw.trim()).ok_or_else(|| {
        ValidationError::InvalidInput(format!("'{}' is not a decimal value", raw)).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_plain_and_scientific_notation() {
        assert_eq!(parse_decimal("15000.50"), Some(dec!(15000.50)));
        assert_eq!(parse_decimal("1.5e3"), Some(dec!(1500)));
        assert_eq!(parse_decimal("-5"), Some(dec!(-5)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("12abc"), None);
        assert_eq!(parse_decimal("NaN"), None);
    }

    #[test]
    fn rejects_digit_separators() {
        assert_eq!(parse_decimal("1_000"), None);
        assert_eq!(parse_decimal("1_0e2"), None);
        assert_eq!(parse_decimal("1000"), Some(dec!(1000)));
    }

    #[test]
    fn coerce_trims_and_reports_bad_rows() {
        assert_eq!(coerce_decimal(" 400 ").unwrap(), dec!(400));
        assert!(coerce_decimal("four hundred").is_err());
    }
}
