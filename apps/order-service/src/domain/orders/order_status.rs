//! Order status in the preparation/service lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;

/// Order status from placement through payment.
///
/// A flat enumeration with no transition table: a status update may set any
/// member of this set regardless of the current value, mirroring the source
/// system's permissive lifecycle. Wire form is the lowercase name,
/// case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order received from the table.
    Placed,
    /// Kitchen is working on it.
    Preparing,
    /// Ready for pickup/service.
    Ready,
    /// Delivered to the table.
    Served,
    /// Settled; set together with the `paid` flag.
    Paid,
    /// Order was cancelled.
    Cancelled,
}

impl OrderStatus {
    /// All valid statuses, in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::Placed,
        Self::Preparing,
        Self::Ready,
        Self::Served,
        Self::Paid,
        Self::Cancelled,
    ];

    /// Get the lowercase wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Placed => "placed",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Served => "served",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    /// Case-sensitive exact match against the valid set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placed" => Ok(Self::Placed),
            "preparing" => Ok(Self::Preparing),
            "ready" => Ok(Self::Ready),
            "served" => Ok(Self::Served),
            "paid" => Ok(Self::Paid),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(DomainError::validation(
                "status",
                format!(
                    "invalid status '{other}', expected one of: placed, preparing, ready, served, paid, cancelled"
                ),
            )),
        }
    }
}
