//! Order Repository Trait
//!
//! Defines the persistence abstraction for orders. Implemented by adapters
//! in the infrastructure layer. Updates are per-document with last-writer
//! -wins semantics; no optimistic-concurrency check exists at this layer.

use async_trait::async_trait;

use super::order::Order;
use super::order_status::OrderStatus;
use crate::domain::shared::{DomainError, OrderId};

/// Conjunctive filter over orders. Empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    /// Match this lifecycle status.
    pub status: Option<OrderStatus>,
    /// Match this table number.
    pub table_number: Option<String>,
    /// Match this paid flag.
    pub paid: Option<bool>,
}

impl OrderFilter {
    /// Returns true if the order satisfies every present criterion.
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        self.status.is_none_or(|s| order.status() == s)
            && self
                .table_number
                .as_deref()
                .is_none_or(|t| order.table_number() == t)
            && self.paid.is_none_or(|p| order.paid() == p)
    }
}

/// Repository trait for order persistence.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Save an order (insert or replace).
    ///
    /// # Errors
    ///
    /// Returns an infrastructure error if persistence fails.
    async fn save(&self, order: &Order) -> Result<(), DomainError>;

    /// Find an order by id.
    ///
    /// # Errors
    ///
    /// Returns an infrastructure error if the query fails.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// Find all orders matching the filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns an infrastructure error if the query fails.
    async fn find(&self, filter: &OrderFilter) -> Result<Vec<Order>, DomainError>;

    /// Find all unpaid orders (`paid = false`), newest first.
    ///
    /// # Errors
    ///
    /// Returns an infrastructure error if the query fails.
    async fn find_unpaid(&self) -> Result<Vec<Order>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::{MenuItem, NewMenuItem};
    use crate::domain::orders::order::{OrderLineItem, PlaceOrderCommand};
    use crate::domain::shared::{Money, Quantity};
    use rust_decimal_macros::dec;

    fn order_for_table(table: &str) -> Order {
        let item = MenuItem::create(NewMenuItem {
            name: "Espresso".to_string(),
            description: None,
            price: Money::new(dec!(3.00)),
            category: None,
            is_available: true,
        })
        .unwrap();
        Order::place(PlaceOrderCommand {
            table_number: table.to_string(),
            lines: vec![OrderLineItem::snapshot(&item, Quantity::new(1)).unwrap()],
            notes: None,
        })
        .unwrap()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let order = order_for_table("1");
        assert!(OrderFilter::default().matches(&order));
    }

    #[test]
    fn filter_on_table_number() {
        let order = order_for_table("1");
        let hit = OrderFilter {
            table_number: Some("1".to_string()),
            ..OrderFilter::default()
        };
        let miss = OrderFilter {
            table_number: Some("2".to_string()),
            ..OrderFilter::default()
        };
        assert!(hit.matches(&order));
        assert!(!miss.matches(&order));
    }

    #[test]
    fn filter_is_conjunctive() {
        let mut order = order_for_table("1");
        order.mark_paid();

        let filter = OrderFilter {
            status: Some(OrderStatus::Paid),
            table_number: Some("1".to_string()),
            paid: Some(false),
        };
        // status and table match, paid does not
        assert!(!filter.matches(&order));
    }

    #[test]
    fn filter_on_status_and_paid() {
        let order = order_for_table("3");
        let filter = OrderFilter {
            status: Some(OrderStatus::Placed),
            paid: Some(false),
            ..OrderFilter::default()
        };
        assert!(filter.matches(&order));
    }
}
