//! Billing Overview Use Case

use std::sync::Arc;

use crate::application::dto::{BillingOverviewDto, OrderDto};
use crate::domain::orders::OrderRepository;
use crate::domain::shared::{DomainError, Money};

/// Use case for the front-of-house settlement view.
///
/// Collects every unpaid order (any status, including cancelled) and the
/// amount left to collect across them.
pub struct BillingOverviewUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> BillingOverviewUseCase<O>
where
    O: OrderRepository,
{
    /// Create a new BillingOverviewUseCase.
    pub fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    /// Execute the use case.
    ///
    /// `total_to_collect` is the sum of `total` over exactly the returned
    /// orders, rounded to 2 decimal places.
    ///
    /// # Errors
    ///
    /// Returns an infrastructure error if the store fails.
    pub async fn execute(&self) -> Result<BillingOverviewDto, DomainError> {
        let unpaid = self.order_repo.find_unpaid().await?;

        let total_to_collect = unpaid
            .iter()
            .fold(Money::ZERO, |acc, order| acc + order.total())
            .round2();

        Ok(BillingOverviewDto {
            orders: unpaid.iter().map(OrderDto::from_order).collect(),
            total_to_collect: total_to_collect.amount(),
        })
    }
}
