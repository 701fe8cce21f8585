//! HTTP request DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::dto::{PlaceOrderDto, RequestedLineDto};
use crate::domain::menu::{MenuItemPatch, NewMenuItem};
use crate::domain::shared::Money;

/// Request to create a menu item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMenuItemRequest {
    /// Food or drink name.
    pub name: String,
    /// Short description.
    pub description: Option<String>,
    /// Price (non-negative).
    pub price: Decimal,
    /// Category like Starter/Main/Dessert/Drink.
    pub category: Option<String>,
    /// Whether the item can be ordered. Defaults to true.
    #[serde(default = "default_available")]
    pub is_available: bool,
}

const fn default_available() -> bool {
    true
}

impl CreateMenuItemRequest {
    /// Convert into the domain command.
    #[must_use]
    pub fn into_command(self) -> NewMenuItem {
        NewMenuItem {
            name: self.name,
            description: self.description,
            price: Money::new(self.price),
            category: self.category,
            is_available: self.is_available,
        }
    }
}

/// Sparse request to update a menu item. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMenuItemRequest {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New price (non-negative).
    pub price: Option<Decimal>,
    /// New category.
    pub category: Option<String>,
    /// New availability flag.
    pub is_available: Option<bool>,
}

impl UpdateMenuItemRequest {
    /// Convert into the domain patch.
    #[must_use]
    pub fn into_patch(self) -> MenuItemPatch {
        MenuItemPatch {
            name: self.name,
            description: self.description,
            price: self.price.map(Money::new),
            category: self.category,
            is_available: self.is_available,
        }
    }
}

/// One requested line in an order placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderItemRequest {
    /// Menu item to order (opaque id).
    pub menu_item_id: String,
    /// Requested quantity (at least 1).
    pub quantity: u32,
}

/// Request to place an order against a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    /// Table number or identifier.
    pub table_number: String,
    /// Requested items (must be non-empty).
    pub items: Vec<PlaceOrderItemRequest>,
    /// Free-form notes for the kitchen.
    pub notes: Option<String>,
}

impl PlaceOrderRequest {
    /// Convert into the application DTO.
    #[must_use]
    pub fn into_dto(self) -> PlaceOrderDto {
        PlaceOrderDto {
            table_number: self.table_number,
            items: self
                .items
                .into_iter()
                .map(|line| RequestedLineDto {
                    menu_item_id: line.menu_item_id,
                    quantity: line.quantity,
                })
                .collect(),
            notes: self.notes,
        }
    }
}

/// Request to move an order to a new lifecycle status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    /// Target status; one of placed, preparing, ready, served, paid,
    /// cancelled. Case-sensitive.
    pub status: String,
}

/// Query parameters for listing orders. All criteria are optional and
/// combine conjunctively.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOrdersQuery {
    /// Filter on lifecycle status.
    pub status: Option<String>,
    /// Filter on table number.
    pub table: Option<String>,
    /// Filter on the paid flag.
    pub paid: Option<bool>,
}
