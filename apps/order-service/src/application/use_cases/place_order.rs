//! Place Order Use Case

use std::sync::Arc;

use crate::application::dto::{OrderDto, PlaceOrderDto};
use crate::domain::menu::MenuRepository;
use crate::domain::orders::{Order, OrderLineItem, OrderRepository, PlaceOrderCommand};
use crate::domain::shared::{DomainError, MenuItemId, Quantity};

/// Use case for placing an order against a table.
///
/// Placement is all-or-nothing: every requested line must resolve to an
/// available menu item before anything is written, so a failed request
/// never leaves a partial order behind.
pub struct PlaceOrderUseCase<M, O>
where
    M: MenuRepository,
    O: OrderRepository,
{
    menu_repo: Arc<M>,
    order_repo: Arc<O>,
}

impl<M, O> PlaceOrderUseCase<M, O>
where
    M: MenuRepository,
    O: OrderRepository,
{
    /// Create a new PlaceOrderUseCase.
    pub fn new(menu_repo: Arc<M>, order_repo: Arc<O>) -> Self {
        Self {
            menu_repo,
            order_repo,
        }
    }

    /// Execute the use case.
    ///
    /// Looks up every requested item filtered to `is_available = true`,
    /// captures a price/name snapshot per line, computes totals, and
    /// persists the order as `placed` and unpaid.
    ///
    /// # Errors
    ///
    /// - Validation error for an empty item list or a zero quantity.
    /// - `NotFound` naming the offending id when an item is missing or
    ///   unavailable.
    /// - Infrastructure error if the store fails; nothing partial is ever
    ///   written.
    pub async fn execute(&self, request: PlaceOrderDto) -> Result<OrderDto, DomainError> {
        if request.items.is_empty() {
            return Err(DomainError::validation("items", "no items provided"));
        }

        let mut lines = Vec::with_capacity(request.items.len());
        for requested in &request.items {
            let id = MenuItemId::new(&requested.menu_item_id);
            let item = self
                .menu_repo
                .find_available(&id)
                .await?
                .ok_or_else(|| DomainError::not_found("menu item", id.as_str()))?;

            lines.push(OrderLineItem::snapshot(
                &item,
                Quantity::new(requested.quantity),
            )?);
        }

        let order = Order::place(PlaceOrderCommand {
            table_number: request.table_number,
            lines,
            notes: request.notes,
        })?;

        self.order_repo.save(&order).await?;

        tracing::info!(
            order_id = %order.id(),
            table_number = order.table_number(),
            total = %order.total(),
            "Order placed"
        );

        Ok(OrderDto::from_order(&order))
    }
}
