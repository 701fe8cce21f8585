//! Quantity value object for ordered item counts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// A whole-unit quantity of a menu item within an order line.
///
/// Orders carry at least one unit per line; zero is representable but
/// rejected by [`Quantity::validate_for_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Create a new quantity.
    #[must_use]
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    /// Get the inner amount.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.0
    }

    /// Check that this quantity is valid for an order line.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the quantity is zero.
    pub fn validate_for_order(&self) -> Result<(), DomainError> {
        if self.0 == 0 {
            return Err(DomainError::validation(
                "quantity",
                "quantity must be at least 1",
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
