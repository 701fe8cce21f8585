//! Menu item DTOs for API boundaries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::menu::MenuItem;

/// Menu item as exposed at the boundary.
///
/// Ids are opaque strings and the price is a 2-decimal value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemDto {
    /// Opaque item id.
    pub id: String,
    /// Food or drink name.
    pub name: String,
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current price.
    pub price: Decimal,
    /// Category like Starter/Main/Dessert/Drink.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Whether the item can be ordered.
    pub is_available: bool,
}

impl MenuItemDto {
    /// Build a DTO from the entity.
    #[must_use]
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            id: item.id().to_string(),
            name: item.name().to_string(),
            description: item.description().map(ToString::to_string),
            price: item.price().round2().amount(),
            category: item.category().map(ToString::to_string),
            is_available: item.is_available(),
        }
    }
}

/// Outcome of a partial menu item update.
#[derive(Debug, Clone)]
pub enum MenuUpdateOutcome {
    /// The patch was empty; nothing was written.
    Unchanged,
    /// The patch was applied; the refreshed item.
    Updated(MenuItemDto),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::NewMenuItem;
    use crate::domain::shared::Money;
    use rust_decimal_macros::dec;

    #[test]
    fn dto_mirrors_entity() {
        let item = MenuItem::create(NewMenuItem {
            name: "Tiramisu".to_string(),
            description: Some("House made".to_string()),
            price: Money::new(dec!(6.5)),
            category: Some("Dessert".to_string()),
            is_available: true,
        })
        .unwrap();

        let dto = MenuItemDto::from_item(&item);

        assert_eq!(dto.id, item.id().as_str());
        assert_eq!(dto.name, "Tiramisu");
        assert_eq!(dto.price, dec!(6.50));
        assert!(dto.is_available);
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let item = MenuItem::create(NewMenuItem {
            name: "Water".to_string(),
            description: None,
            price: Money::ZERO,
            category: None,
            is_available: true,
        })
        .unwrap();

        let json = serde_json::to_value(MenuItemDto::from_item(&item)).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("category").is_none());
    }
}
