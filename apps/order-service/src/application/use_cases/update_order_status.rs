//! Update Order Status Use Case

use std::str::FromStr;
use std::sync::Arc;

use crate::application::dto::OrderDto;
use crate::domain::orders::{OrderRepository, OrderStatus};
use crate::domain::shared::{DomainError, OrderId};

/// Use case for moving an order through the lifecycle.
///
/// The target status is validated against the flat status set; beyond
/// that, any valid status may be set from any current one (permissive by
/// design, no transition table).
pub struct UpdateOrderStatusUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> UpdateOrderStatusUseCase<O>
where
    O: OrderRepository,
{
    /// Create a new UpdateOrderStatusUseCase.
    pub fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a status outside the valid set
    /// (the order is left untouched), `NotFound` for an unknown order id,
    /// or an infrastructure error from the store.
    pub async fn execute(&self, order_id: &OrderId, status: &str) -> Result<OrderDto, DomainError> {
        let status = OrderStatus::from_str(status)?;

        let mut order = self
            .order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| DomainError::not_found("order", order_id.as_str()))?;

        order.set_status(status);
        self.order_repo.save(&order).await?;

        tracing::info!(order_id = %order_id, status = %status, "Order status updated");
        Ok(OrderDto::from_order(&order))
    }
}
