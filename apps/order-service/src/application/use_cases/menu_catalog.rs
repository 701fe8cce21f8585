//! Menu Catalog Use Case

use std::sync::Arc;

use crate::application::dto::{MenuItemDto, MenuUpdateOutcome};
use crate::domain::menu::{MenuItem, MenuItemPatch, MenuRepository, NewMenuItem};
use crate::domain::shared::{DomainError, MenuItemId};

/// Use case for listing, creating and patching menu items.
pub struct MenuCatalogUseCase<M>
where
    M: MenuRepository,
{
    menu_repo: Arc<M>,
}

impl<M> MenuCatalogUseCase<M>
where
    M: MenuRepository,
{
    /// Create a new MenuCatalogUseCase.
    pub fn new(menu_repo: Arc<M>) -> Self {
        Self { menu_repo }
    }

    /// List all menu items.
    ///
    /// # Errors
    ///
    /// Returns an infrastructure error if the query fails.
    pub async fn list(&self) -> Result<Vec<MenuItemDto>, DomainError> {
        let items = self.menu_repo.list().await?;
        Ok(items.iter().map(MenuItemDto::from_item).collect())
    }

    /// Create a menu item and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative price, or an
    /// infrastructure error if persistence fails.
    pub async fn create(&self, cmd: NewMenuItem) -> Result<MenuItemDto, DomainError> {
        let item = MenuItem::create(cmd)?;
        self.menu_repo.save(&item).await?;

        tracing::info!(menu_item_id = %item.id(), name = item.name(), "Menu item created");
        Ok(MenuItemDto::from_item(&item))
    }

    /// Apply a sparse patch to a menu item.
    ///
    /// An empty patch touches nothing and reports `Unchanged`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id does not resolve, a validation error
    /// for a negative price, or an infrastructure error from the store.
    pub async fn update(
        &self,
        id: &MenuItemId,
        patch: MenuItemPatch,
    ) -> Result<MenuUpdateOutcome, DomainError> {
        if patch.is_empty() {
            return Ok(MenuUpdateOutcome::Unchanged);
        }

        let mut item = self
            .menu_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("menu item", id.as_str()))?;

        item.apply_patch(&patch)?;
        self.menu_repo.save(&item).await?;

        tracing::info!(menu_item_id = %id, "Menu item updated");
        Ok(MenuUpdateOutcome::Updated(MenuItemDto::from_item(&item)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Money;
    use crate::infrastructure::persistence::InMemoryMenuRepository;
    use rust_decimal_macros::dec;

    fn catalog() -> MenuCatalogUseCase<InMemoryMenuRepository> {
        MenuCatalogUseCase::new(Arc::new(InMemoryMenuRepository::new()))
    }

    fn new_item(name: &str, price: Money) -> NewMenuItem {
        NewMenuItem {
            name: name.to_string(),
            description: None,
            price,
            category: None,
            is_available: true,
        }
    }

    #[tokio::test]
    async fn create_and_list() {
        let catalog = catalog();

        catalog
            .create(new_item("Margherita", Money::new(dec!(10.00))))
            .await
            .unwrap();
        catalog
            .create(new_item("Cola", Money::new(dec!(2.50))))
            .await
            .unwrap();

        let items = catalog.list().await.unwrap();
        assert_eq!(items.len(), 2);
        // sorted by name
        assert_eq!(items[0].name, "Cola");
        assert_eq!(items[1].name, "Margherita");
    }

    #[tokio::test]
    async fn create_rejects_negative_price() {
        let catalog = catalog();
        let err = catalog
            .create(new_item("Broken", Money::new(dec!(-5.00))))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(catalog.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_applies_patch() {
        let catalog = catalog();
        let created = catalog
            .create(new_item("Margherita", Money::new(dec!(10.00))))
            .await
            .unwrap();

        let outcome = catalog
            .update(
                &MenuItemId::new(created.id),
                MenuItemPatch {
                    price: Some(Money::new(dec!(11.00))),
                    ..MenuItemPatch::default()
                },
            )
            .await
            .unwrap();

        match outcome {
            MenuUpdateOutcome::Updated(dto) => assert_eq!(dto.price, dec!(11.00)),
            MenuUpdateOutcome::Unchanged => panic!("expected update"),
        }
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let catalog = catalog();
        let err = catalog
            .update(
                &MenuItemId::new("missing"),
                MenuItemPatch {
                    is_available: Some(false),
                    ..MenuItemPatch::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn empty_patch_is_unchanged_even_for_unknown_id() {
        // The no-op short-circuits before any lookup, like the original
        // backend which reported {"updated": false} without touching the
        // store.
        let catalog = catalog();
        let outcome = catalog
            .update(&MenuItemId::new("missing"), MenuItemPatch::default())
            .await
            .unwrap();
        assert!(matches!(outcome, MenuUpdateOutcome::Unchanged));
    }
}
