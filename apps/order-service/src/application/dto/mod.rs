//! Data transfer objects for API boundaries.

mod menu_dto;
mod order_dto;

pub use menu_dto::{MenuItemDto, MenuUpdateOutcome};
pub use order_dto::{BillingOverviewDto, OrderDto, OrderLineDto, PlaceOrderDto, RequestedLineDto};
