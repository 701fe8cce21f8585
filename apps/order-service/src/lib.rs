// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Order Service - Restaurant Ordering Backend
//!
//! Tracks a menu catalog, accepts table orders with immutable price
//! snapshots, moves orders through the preparation/service lifecycle, and
//! aggregates unpaid totals for billing.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (entities, value objects, repository
//!   ports)
//!   - `menu`: Menu item entity, sparse patching, catalog repository port
//!   - `orders`: Order aggregate, line item snapshots, status lifecycle,
//!     order repository port
//!   - `shared`: Ids, money, quantity, timestamp, domain errors
//!
//! - **Application**: Use cases and orchestration
//!   - `use_cases`: MenuCatalog, PlaceOrder, UpdateOrderStatus,
//!     MarkOrderPaid, BillingOverview
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `http`: Axum REST controller and error mapping
//!   - `persistence`: Repository implementations and collection names

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and boundary DTOs.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::menu::{MenuItem, MenuItemPatch, MenuRepository, NewMenuItem};
pub use domain::orders::{
    Order, OrderFilter, OrderLineItem, OrderRepository, OrderStatus, PlaceOrderCommand,
};
pub use domain::shared::{DomainError, MenuItemId, Money, OrderId, Quantity, Timestamp};

// Application re-exports
pub use application::dto::{BillingOverviewDto, MenuItemDto, OrderDto, PlaceOrderDto};
pub use application::use_cases::{
    BillingOverviewUseCase, MarkOrderPaidUseCase, MenuCatalogUseCase, PlaceOrderUseCase,
    UpdateOrderStatusUseCase,
};

// Infrastructure re-exports
pub use infrastructure::http::{ApiError, AppState, create_router};
pub use infrastructure::persistence::{InMemoryMenuRepository, InMemoryOrderRepository};
