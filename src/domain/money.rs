use crate::error::{FragmentError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Currency written into the amount group when none was chosen.
pub const DEFAULT_CURRENCY: &str = "GBP";

/// Converts a decimal amount into whole minor currency units (pence for GBP).
///
/// The amount is multiplied by 100 and rounded to the nearest integer, halves
/// away from zero. The result carries no decimal point.
pub fn to_minor_units(amount: Decimal) -> Result<String> {
    let scaled = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(|| FragmentError::InvalidAmount {
            input: amount.to_string(),
            reason: "amount is too large".to_string(),
        })?;
    let rounded = scaled
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    Ok(rounded.to_string())
}

/// Parses decimal text such as `"12.50"` into an amount.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    Decimal::from_str(input.trim()).map_err(|e| FragmentError::InvalidAmount {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minor_units_rounds_to_nearest() {
        assert_eq!(to_minor_units(dec!(12.345)).unwrap(), "1235");
        assert_eq!(to_minor_units(dec!(12.344)).unwrap(), "1234");
        assert_eq!(to_minor_units(dec!(0.005)).unwrap(), "1");
    }

    #[test]
    fn test_minor_units_whole_amounts() {
        assert_eq!(to_minor_units(dec!(10)).unwrap(), "1000");
        assert_eq!(to_minor_units(dec!(10.00)).unwrap(), "1000");
        assert_eq!(to_minor_units(dec!(0)).unwrap(), "0");
    }

    #[test]
    fn test_minor_units_negative_amounts() {
        assert_eq!(to_minor_units(dec!(-1.5)).unwrap(), "-150");
        assert_eq!(to_minor_units(dec!(-0.004)).unwrap(), "0");
    }

    #[test]
    fn test_minor_units_overflow() {
        assert!(matches!(
            to_minor_units(Decimal::MAX),
            Err(FragmentError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 19.99 ").unwrap(), dec!(19.99));
        assert!(matches!(
            parse_amount("not_a_number"),
            Err(FragmentError::InvalidAmount { .. })
        ));
        assert!(parse_amount("").is_err());
    }
}
