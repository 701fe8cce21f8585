//! Money value object for currency amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::domain::shared::DomainError;
use crate::domain::shared::value_objects::Quantity;

/// A monetary amount.
///
/// Represented as a Decimal for precise calculations. All rounding is to
/// 2 decimal places using round-half-to-even (banker's rounding), the
/// `Decimal::round_dp` default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new Money value from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money value from cents (integer).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Round to exactly 2 decimal places (round-half-to-even).
    ///
    /// Also rescales, so the serialized form always carries two decimals
    /// ("6.50", never "6.5").
    #[must_use]
    pub fn round2(&self) -> Self {
        let mut rounded = self.0.round_dp(2);
        rounded.rescale(2);
        Self(rounded)
    }

    /// Check that this amount is valid as a price.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the amount is negative.
    pub fn validate_as_price(&self) -> Result<(), DomainError> {
        if self.is_negative() {
            return Err(DomainError::validation(
                "price",
                "price cannot be negative",
            ));
        }
        Ok(())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Mul<Quantity> for Money {
    type Output = Self;

    fn mul(self, rhs: Quantity) -> Self::Output {
        Self(self.0 * Decimal::from(rhs.amount()))
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}
