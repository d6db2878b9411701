//! Currency normalization boundary
//!
//! The single place where operator-entered display currency becomes
//! minor-unit integers. Draft offer configs hold `Decimal` amounts
//! exactly as typed; rows hold `i64` minor units. Nothing outside this
//! module multiplies or divides by 100.

use rust_decimal::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("amount must be non-negative, got {0}")]
    Negative(Decimal),

    #[error("amount out of range: {0}")]
    OutOfRange(Decimal),
}

/// Convert a display-currency amount to minor units, exactly once.
///
/// Sub-cent precision rounds half-up (half away from zero).
pub fn to_minor_units(amount: Decimal) -> Result<i64, MoneyError> {
    if amount.is_sign_negative() {
        return Err(MoneyError::Negative(amount));
    }
    let cents = (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    cents.to_i64().ok_or(MoneyError::OutOfRange(amount))
}

/// Convert minor units back to a display-currency amount (exact)
pub fn from_minor_units(minor: i64) -> Decimal {
    Decimal::new(minor, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_to_minor_units_multiplies_by_100_exactly_once() {
        assert_eq!(to_minor_units(dec("9.00")).unwrap(), 900);
        assert_eq!(to_minor_units(dec("5.50")).unwrap(), 550);
        assert_eq!(to_minor_units(dec("0")).unwrap(), 0);
    }

    #[test]
    fn test_to_minor_units_rounds_half_up() {
        assert_eq!(to_minor_units(dec("9.995")).unwrap(), 1000);
        assert_eq!(to_minor_units(dec("9.994")).unwrap(), 999);
    }

    #[test]
    fn test_to_minor_units_rejects_negative() {
        assert_eq!(
            to_minor_units(dec("-1.00")),
            Err(MoneyError::Negative(dec("-1.00")))
        );
    }

    #[test]
    fn test_round_trip_is_exact() {
        for minor in [0i64, 1, 99, 900, 1100, 1300, 123456789] {
            assert_eq!(to_minor_units(from_minor_units(minor)).unwrap(), minor);
        }
    }
}
