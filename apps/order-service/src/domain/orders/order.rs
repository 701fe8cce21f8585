//! Order Aggregate Root
//!
//! A table order owns an immutable sequence of line-item price snapshots
//! and moves through the preparation/service lifecycle until it is paid or
//! cancelled.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::order_status::OrderStatus;
use crate::domain::menu::MenuItem;
use crate::domain::shared::{DomainError, MenuItemId, Money, OrderId, Quantity, Timestamp};

/// One ordered quantity of a single menu item, with its price snapshot.
///
/// Created once at placement by copying the referenced menu item's current
/// name and price; never updated afterwards, even if the source item
/// changes. The menu item id is a weak reference for lookup only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Referenced menu item id.
    pub menu_item_id: MenuItemId,
    /// Name snapshot.
    pub name: String,
    /// Unit price snapshot.
    pub unit_price: Money,
    /// Ordered quantity (at least 1).
    pub quantity: Quantity,
    /// `unit_price` × `quantity`.
    pub line_total: Money,
}

impl OrderLineItem {
    /// Capture a snapshot of a menu item at this instant.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the quantity is zero.
    pub fn snapshot(item: &MenuItem, quantity: Quantity) -> Result<Self, DomainError> {
        quantity.validate_for_order()?;

        Ok(Self {
            menu_item_id: item.id().clone(),
            name: item.name().to_string(),
            unit_price: item.price(),
            quantity,
            line_total: item.price() * quantity,
        })
    }
}

/// Command to place a new order.
#[derive(Debug, Clone)]
pub struct PlaceOrderCommand {
    /// Table number or identifier.
    pub table_number: String,
    /// Snapshotted line items (must be non-empty).
    pub lines: Vec<OrderLineItem>,
    /// Free-form notes for the kitchen.
    pub notes: Option<String>,
}

/// Order Aggregate Root.
///
/// Totals are computed once at placement and never recomputed:
/// `sub_total = Σ line_total` and `total = round2(sub_total + tax)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    table_number: String,
    items: Vec<OrderLineItem>,
    sub_total: Money,
    tax: Money,
    total: Money,
    status: OrderStatus,
    paid: bool,
    notes: Option<String>,
    created_at: Timestamp,
}

impl Order {
    /// Tax rate applied to the sub-total. Currently zero; the `tax` field
    /// stays in the model so a future rate change is a one-line edit.
    pub const TAX_RATE: Decimal = Decimal::ZERO;

    /// Place a new order from snapshotted lines.
    ///
    /// Starts life as `placed` and unpaid, with a generated id and a
    /// creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `lines` is empty.
    pub fn place(cmd: PlaceOrderCommand) -> Result<Self, DomainError> {
        if cmd.lines.is_empty() {
            return Err(DomainError::validation("items", "no items provided"));
        }

        let sub_total = cmd
            .lines
            .iter()
            .fold(Money::ZERO, |acc, line| acc + line.line_total)
            .round2();
        let tax = (sub_total * Self::TAX_RATE).round2();
        let total = (sub_total + tax).round2();

        Ok(Self {
            id: OrderId::generate(),
            table_number: cmd.table_number,
            items: cmd.lines,
            sub_total,
            tax,
            total,
            status: OrderStatus::Placed,
            paid: false,
            notes: cmd.notes,
            created_at: Timestamp::now(),
        })
    }

    /// Set the lifecycle status.
    ///
    /// Any valid status may be set from any other; the lifecycle is
    /// deliberately permissive (no transition table).
    pub const fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Mark the order paid: flips the `paid` flag and sets `status` to
    /// `paid` together, regardless of the prior status.
    pub const fn mark_paid(&mut self) {
        self.paid = true;
        self.status = OrderStatus::Paid;
    }

    /// Get the order id.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Get the table number.
    #[must_use]
    pub fn table_number(&self) -> &str {
        &self.table_number
    }

    /// Get the line items.
    #[must_use]
    pub fn items(&self) -> &[OrderLineItem] {
        &self.items
    }

    /// Get the sub-total.
    #[must_use]
    pub const fn sub_total(&self) -> Money {
        self.sub_total
    }

    /// Get the tax amount.
    #[must_use]
    pub const fn tax(&self) -> Money {
        self.tax
    }

    /// Get the grand total.
    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }

    /// Get the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Whether the order has been paid.
    #[must_use]
    pub const fn paid(&self) -> bool {
        self.paid
    }

    /// Get the notes.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
