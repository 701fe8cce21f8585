//! Mark Order Paid Use Case

use std::sync::Arc;

use crate::application::dto::OrderDto;
use crate::domain::orders::OrderRepository;
use crate::domain::shared::{DomainError, OrderId};

/// Use case for settling an order.
///
/// Unconditionally flips `paid = true` and sets `status = paid` together,
/// regardless of where the order currently sits in the lifecycle.
pub struct MarkOrderPaidUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> MarkOrderPaidUseCase<O>
where
    O: OrderRepository,
{
    /// Create a new MarkOrderPaidUseCase.
    pub fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown order id, or an infrastructure
    /// error from the store.
    pub async fn execute(&self, order_id: &OrderId) -> Result<OrderDto, DomainError> {
        let mut order = self
            .order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| DomainError::not_found("order", order_id.as_str()))?;

        order.mark_paid();
        self.order_repo.save(&order).await?;

        tracing::info!(order_id = %order_id, total = %order.total(), "Order paid");
        Ok(OrderDto::from_order(&order))
    }
}
