//! Menu item entity and its create/patch commands.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{DomainError, MenuItemId, Money};

/// Command to create a new menu item.
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    /// Food or drink name.
    pub name: String,
    /// Short description.
    pub description: Option<String>,
    /// Current price (must be non-negative).
    pub price: Money,
    /// Category like Starter/Main/Dessert/Drink.
    pub category: Option<String>,
    /// Whether the item can be ordered.
    pub is_available: bool,
}

/// Sparse partial update for a menu item.
///
/// Only present fields are applied; an empty patch is a no-op the caller
/// can detect via [`MenuItemPatch::is_empty`]. Dynamic payloads never reach
/// the entity directly.
#[derive(Debug, Clone, Default)]
pub struct MenuItemPatch {
    /// New name, if changing.
    pub name: Option<String>,
    /// New description, if changing.
    pub description: Option<String>,
    /// New price, if changing (must be non-negative).
    pub price: Option<Money>,
    /// New category, if changing.
    pub category: Option<String>,
    /// New availability flag, if changing.
    pub is_available: Option<bool>,
}

impl MenuItemPatch {
    /// Returns true if no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.is_available.is_none()
    }
}

/// A menu item customers can order.
///
/// Owned by the menu catalog. Orders reference it by id but copy name and
/// price into their own line items at placement, so later edits here never
/// touch historical orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    id: MenuItemId,
    name: String,
    description: Option<String>,
    price: Money,
    category: Option<String>,
    is_available: bool,
}

impl MenuItem {
    /// Create a new menu item from a command, generating an id.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the price is negative.
    pub fn create(cmd: NewMenuItem) -> Result<Self, DomainError> {
        cmd.price.validate_as_price()?;

        Ok(Self {
            id: MenuItemId::generate(),
            name: cmd.name,
            description: cmd.description,
            price: cmd.price,
            category: cmd.category,
            is_available: cmd.is_available,
        })
    }

    /// Apply a sparse patch, validating any new price.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the patch carries a negative price.
    /// No field is applied on failure.
    pub fn apply_patch(&mut self, patch: &MenuItemPatch) -> Result<(), DomainError> {
        if let Some(price) = patch.price {
            price.validate_as_price()?;
        }

        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = &patch.category {
            self.category = Some(category.clone());
        }
        if let Some(is_available) = patch.is_available {
            self.is_available = is_available;
        }

        Ok(())
    }

    /// Get the item id.
    #[must_use]
    pub const fn id(&self) -> &MenuItemId {
        &self.id
    }

    /// Get the item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the current price.
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Get the category.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Whether the item can currently be ordered.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.is_available
    }
}
