use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A non-negative monetary amount with two decimal places.
///
/// Amounts are exact decimals; nothing goes through binary floating point.
/// The JSON form is a plain number in major units with two decimals
/// (`12.50`), which is what the order creation call expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    Invalid(String),
    #[error("Negative amount: {0}")]
    Negative(String),
}

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    /// Upper bound that arithmetic saturates at.
    pub const MAX: Money = Money(Decimal::MAX);

    pub fn from_cents(cents: u64) -> Self {
        Self(Decimal::from_i128_with_scale(i128::from(cents), 2))
    }

    /// Whole currency units, e.g. `Money::from_units(5)` is `5.00`.
    pub fn from_units(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Rounds to the cent, half away from zero.
    pub fn from_decimal(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount.to_string()));
        }
        Ok(Self(amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)))
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Price of `quantity` items at this unit price.
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.checked_mul(Decimal::from(quantity)).unwrap_or(Decimal::MAX))
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.checked_add(other.0).unwrap_or(Decimal::MAX))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        self.saturating_add(rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let amount = Decimal::from_str(raw).map_err(|_| MoneyError::Invalid(raw.to_string()))?;
        Money::from_decimal(amount)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut amount = self.0;
        amount.rescale(2);
        rust_decimal::serde::arbitrary_precision::serialize(&amount, serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::arbitrary_precision::deserialize(deserializer)?;
        Money::from_decimal(amount).map_err(serde::de::Error::custom)
    }
}
