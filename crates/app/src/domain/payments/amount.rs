//! Payment amounts.

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde_json::{Number, Value};
use thiserror::Error;

/// An amount in minor currency units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaymentAmount(i64);

impl PaymentAmount {
    /// Convert a price in major units, rounding half away from zero.
    ///
    /// # Errors
    ///
    /// Returns an error when the price is not strictly positive or does not fit.
    pub fn from_major(price: Decimal) -> Result<Self, PriceError> {
        if price <= Decimal::ZERO {
            return Err(PriceError::NotPositive);
        }

        let minor = price
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or(PriceError::OutOfRange)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or(PriceError::OutOfRange)?;

        if minor == 0 {
            return Err(PriceError::NotPositive);
        }

        Ok(Self(minor))
    }

    /// Convert an untrusted JSON price. Only JSON numbers are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error for missing, non-numeric, non-positive or oversized
    /// prices.
    pub fn from_json(price: &Value) -> Result<Self, PriceError> {
        match price {
            Value::Null => Err(PriceError::Missing),
            Value::Number(number) => Self::from_major(decimal_from_number(number)?),
            _ => Err(PriceError::NotANumber),
        }
    }

    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.0
    }
}

impl Display for PaymentAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

fn decimal_from_number(number: &Number) -> Result<Decimal, PriceError> {
    let text = number.to_string();

    text.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_error| {
            if number.as_f64().is_some_and(|value| value <= 0.0) {
                PriceError::NotPositive
            } else {
                PriceError::OutOfRange
            }
        })
}

/// Reasons a price is refused before any processor call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price is required")]
    Missing,

    #[error("price must be a number")]
    NotANumber,

    #[error("price must be greater than zero")]
    NotPositive,

    #[error("price is too large")]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn converts_to_minor_units() -> TestResult {
        assert_eq!(PaymentAmount::from_major(dec!(49.99))?.minor_units(), 4999);
        assert_eq!(PaymentAmount::from_major(dec!(115.94))?.minor_units(), 11594);
        assert_eq!(PaymentAmount::from_major(dec!(3))?.minor_units(), 300);

        Ok(())
    }

    #[test]
    fn rounds_half_away_from_zero() -> TestResult {
        assert_eq!(PaymentAmount::from_major(dec!(0.125))?.minor_units(), 13);
        assert_eq!(PaymentAmount::from_major(dec!(10.004))?.minor_units(), 1000);

        Ok(())
    }

    #[test]
    fn json_number_is_converted_exactly() -> TestResult {
        assert_eq!(PaymentAmount::from_json(&json!(49.99))?.minor_units(), 4999);
        assert_eq!(PaymentAmount::from_json(&json!(20))?.minor_units(), 2000);

        Ok(())
    }

    #[test]
    fn rejects_non_positive_prices() {
        assert_eq!(PaymentAmount::from_json(&json!(0)), Err(PriceError::NotPositive));
        assert_eq!(PaymentAmount::from_json(&json!(-5.5)), Err(PriceError::NotPositive));
        assert_eq!(PaymentAmount::from_json(&json!(0.001)), Err(PriceError::NotPositive));
    }

    #[test]
    fn rejects_non_numeric_prices() {
        assert_eq!(PaymentAmount::from_json(&json!("49.99")), Err(PriceError::NotANumber));
        assert_eq!(PaymentAmount::from_json(&json!(true)), Err(PriceError::NotANumber));
        assert_eq!(PaymentAmount::from_json(&Value::Null), Err(PriceError::Missing));
    }

    #[test]
    fn rejects_prices_that_do_not_fit() {
        assert_eq!(PaymentAmount::from_json(&json!(1e300)), Err(PriceError::OutOfRange));
    }
}
