//! Order DTOs for API boundaries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::orders::{Order, OrderLineItem, OrderStatus};
use crate::domain::shared::Timestamp;

/// One line of an order as exposed at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineDto {
    /// Referenced menu item id (opaque string).
    pub menu_item_id: String,
    /// Name snapshot.
    pub name: String,
    /// Unit price snapshot.
    pub unit_price: Decimal,
    /// Ordered quantity.
    pub quantity: u32,
    /// Line total.
    pub line_total: Decimal,
}

impl OrderLineDto {
    /// Build a DTO from a line item.
    #[must_use]
    pub fn from_line(line: &OrderLineItem) -> Self {
        Self {
            menu_item_id: line.menu_item_id.to_string(),
            name: line.name.clone(),
            unit_price: line.unit_price.round2().amount(),
            quantity: line.quantity.amount(),
            line_total: line.line_total.round2().amount(),
        }
    }
}

/// Order as exposed at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDto {
    /// Opaque order id.
    pub id: String,
    /// Table number or identifier.
    pub table_number: String,
    /// Line items in placement order.
    pub items: Vec<OrderLineDto>,
    /// Sum of line totals.
    pub sub_total: Decimal,
    /// Tax amount (currently always 0.00).
    pub tax: Decimal,
    /// Grand total.
    pub total: Decimal,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Whether the order has been paid.
    pub paid: bool,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: Timestamp,
}

impl OrderDto {
    /// Build a DTO from the aggregate.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            table_number: order.table_number().to_string(),
            items: order.items().iter().map(OrderLineDto::from_line).collect(),
            sub_total: order.sub_total().round2().amount(),
            tax: order.tax().round2().amount(),
            total: order.total().round2().amount(),
            status: order.status(),
            paid: order.paid(),
            notes: order.notes().map(ToString::to_string),
            created_at: order.created_at(),
        }
    }
}

/// One requested line in a placement request, before price lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestedLineDto {
    /// Menu item to order (opaque id).
    pub menu_item_id: String,
    /// Requested quantity (at least 1).
    pub quantity: u32,
}

/// Request to place an order against a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderDto {
    /// Table number or identifier.
    pub table_number: String,
    /// Requested items (must be non-empty).
    pub items: Vec<RequestedLineDto>,
    /// Free-form notes for the kitchen.
    pub notes: Option<String>,
}

/// Billing collection view: the unpaid orders and their aggregate total.
///
/// The list and the scalar travel together by contract; callers that only
/// need the number still receive the orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingOverviewDto {
    /// All unpaid orders, newest first.
    pub orders: Vec<OrderDto>,
    /// Sum of `total` over exactly those orders, rounded to 2 decimals.
    pub total_to_collect: Decimal,
}
