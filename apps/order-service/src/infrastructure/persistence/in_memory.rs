//! In-memory repositories backed by `RwLock<HashMap>`.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::collection::Collection;
use crate::domain::menu::{MenuItem, MenuRepository};
use crate::domain::orders::{Order, OrderFilter, OrderRepository};
use crate::domain::shared::{DomainError, MenuItemId, OrderId};

/// In-memory implementation of `MenuRepository`.
#[derive(Debug, Default)]
pub struct InMemoryMenuRepository {
    items: RwLock<HashMap<String, MenuItem>>,
}

impl InMemoryMenuRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    /// Get the number of menu items in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().unwrap().len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.read().unwrap().is_empty()
    }

    /// Clear all menu items from the repository.
    pub fn clear(&self) {
        let mut items = self.items.write().unwrap();
        items.clear();
    }

    /// Add a menu item to the repository (for test setup).
    pub fn add(&self, item: MenuItem) {
        let mut items = self.items.write().unwrap();
        items.insert(item.id().to_string(), item);
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn save(&self, item: &MenuItem) -> Result<(), DomainError> {
        let mut items = self.items.write().unwrap();
        items.insert(item.id().to_string(), item.clone());
        tracing::debug!(collection = %Collection::MenuItems, id = %item.id(), "Menu item saved");
        Ok(())
    }

    async fn find_by_id(&self, id: &MenuItemId) -> Result<Option<MenuItem>, DomainError> {
        let items = self.items.read().unwrap();
        Ok(items.get(id.as_str()).cloned())
    }

    async fn find_available(&self, id: &MenuItemId) -> Result<Option<MenuItem>, DomainError> {
        let items = self.items.read().unwrap();
        Ok(items
            .get(id.as_str())
            .filter(|item| item.is_available())
            .cloned())
    }

    async fn list(&self) -> Result<Vec<MenuItem>, DomainError> {
        let items = self.items.read().unwrap();
        let mut all: Vec<MenuItem> = items.values().cloned().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(all)
    }
}

/// In-memory implementation of `OrderRepository`.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<String, Order>>,
}

impl InMemoryOrderRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }

    /// Get the number of orders in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.read().unwrap().len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.read().unwrap().is_empty()
    }

    /// Clear all orders from the repository.
    pub fn clear(&self) {
        let mut orders = self.orders.write().unwrap();
        orders.clear();
    }

    /// Add an order to the repository (for test setup).
    pub fn add(&self, order: Order) {
        let mut orders = self.orders.write().unwrap();
        orders.insert(order.id().to_string(), order);
    }

    fn collect_sorted<F>(&self, predicate: F) -> Vec<Order>
    where
        F: Fn(&Order) -> bool,
    {
        let orders = self.orders.read().unwrap();
        let mut matched: Vec<Order> = orders.values().filter(|o| predicate(o)).cloned().collect();
        // newest first
        matched.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        matched
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: &Order) -> Result<(), DomainError> {
        let mut orders = self.orders.write().unwrap();
        orders.insert(order.id().to_string(), order.clone());
        tracing::debug!(collection = %Collection::Orders, id = %order.id(), "Order saved");
        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let orders = self.orders.read().unwrap();
        Ok(orders.get(id.as_str()).cloned())
    }

    async fn find(&self, filter: &OrderFilter) -> Result<Vec<Order>, DomainError> {
        Ok(self.collect_sorted(|o| filter.matches(o)))
    }

    async fn find_unpaid(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.collect_sorted(|o| !o.paid()))
    }
}
