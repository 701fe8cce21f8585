//! Shared value objects.

mod identifiers;
mod money;
mod quantity;
mod timestamp;

pub use identifiers::{MenuItemId, OrderId};
pub use money::Money;
pub use quantity::Quantity;
pub use timestamp::Timestamp;
