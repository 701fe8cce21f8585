//! Menu Repository Trait
//!
//! Persistence abstraction for menu items, implemented by adapters in the
//! infrastructure layer.

use async_trait::async_trait;

use super::menu_item::MenuItem;
use crate::domain::shared::{DomainError, MenuItemId};

/// Repository trait for menu item persistence.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Save a menu item (insert or replace).
    ///
    /// # Errors
    ///
    /// Returns an infrastructure error if persistence fails.
    async fn save(&self, item: &MenuItem) -> Result<(), DomainError>;

    /// Find a menu item by id, available or not.
    ///
    /// # Errors
    ///
    /// Returns an infrastructure error if the query fails.
    async fn find_by_id(&self, id: &MenuItemId) -> Result<Option<MenuItem>, DomainError>;

    /// Find a menu item by id, filtered to `is_available = true`.
    ///
    /// Unavailable items resolve to `None`, exactly like missing ones.
    ///
    /// # Errors
    ///
    /// Returns an infrastructure error if the query fails.
    async fn find_available(&self, id: &MenuItemId) -> Result<Option<MenuItem>, DomainError>;

    /// List all menu items, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an infrastructure error if the query fails.
    async fn list(&self) -> Result<Vec<MenuItem>, DomainError>;
}
