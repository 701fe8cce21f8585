//! Order Lifecycle Bounded Context
//!
//! The core of the system: the order aggregate with its immutable price
//! snapshots and computed totals, the lifecycle status set, and the
//! persistence port.

pub mod order;
pub mod order_status;
pub mod repository;

pub use order::{Order, OrderLineItem, PlaceOrderCommand};
pub use order_status::OrderStatus;
pub use repository::{OrderFilter, OrderRepository};
