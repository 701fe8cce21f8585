//! Application use cases orchestrating the domain through repository ports.

mod billing_overview;
mod mark_order_paid;
mod menu_catalog;
mod place_order;
mod update_order_status;

pub use billing_overview::BillingOverviewUseCase;
pub use mark_order_paid::MarkOrderPaidUseCase;
pub use menu_catalog::MenuCatalogUseCase;
pub use place_order::PlaceOrderUseCase;
pub use update_order_status::UpdateOrderStatusUseCase;
