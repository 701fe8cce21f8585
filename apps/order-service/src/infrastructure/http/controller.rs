//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to application use cases.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};

use crate::application::dto::{MenuUpdateOutcome, OrderDto};
use crate::application::use_cases::{
    BillingOverviewUseCase, MarkOrderPaidUseCase, MenuCatalogUseCase, PlaceOrderUseCase,
    UpdateOrderStatusUseCase,
};
use crate::domain::menu::MenuRepository;
use crate::domain::orders::{OrderFilter, OrderRepository, OrderStatus};
use crate::domain::shared::{MenuItemId, OrderId};

use super::error::ApiError;
use super::request::{
    CreateMenuItemRequest, ListOrdersQuery, PlaceOrderRequest, UpdateMenuItemRequest,
    UpdateOrderStatusRequest,
};
use super::response::{HealthResponse, MenuUnchangedResponse, RootResponse};

/// Application state shared across handlers.
pub struct AppState<M, O>
where
    M: MenuRepository,
    O: OrderRepository,
{
    /// Use case for the menu catalog.
    pub menu_catalog: Arc<MenuCatalogUseCase<M>>,
    /// Use case for placing orders.
    pub place_order: Arc<PlaceOrderUseCase<M, O>>,
    /// Use case for lifecycle transitions.
    pub update_order_status: Arc<UpdateOrderStatusUseCase<O>>,
    /// Use case for settling orders.
    pub mark_order_paid: Arc<MarkOrderPaidUseCase<O>>,
    /// Use case for the billing overview.
    pub billing_overview: Arc<BillingOverviewUseCase<O>>,
    /// Order repository for filtered queries.
    pub order_repo: Arc<O>,
    /// Application version.
    pub version: String,
}

impl<M, O> Clone for AppState<M, O>
where
    M: MenuRepository,
    O: OrderRepository,
{
    fn clone(&self) -> Self {
        Self {
            menu_catalog: Arc::clone(&self.menu_catalog),
            place_order: Arc::clone(&self.place_order),
            update_order_status: Arc::clone(&self.update_order_status),
            mark_order_paid: Arc::clone(&self.mark_order_paid),
            billing_overview: Arc::clone(&self.billing_overview),
            order_repo: Arc::clone(&self.order_repo),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<M, O>(state: AppState<M, O>) -> Router
where
    M: MenuRepository + 'static,
    O: OrderRepository + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/menu", get(list_menu).post(create_menu_item))
        .route("/menu/{id}", patch(update_menu_item))
        .route("/orders", post(place_order).get(list_orders))
        .route("/orders/{id}/status", patch(update_order_status))
        .route("/orders/{id}/pay", patch(mark_order_paid))
        .route("/billing", get(billing_overview))
        .with_state(state)
}

/// Service banner endpoint.
async fn root<M, O>(State(_state): State<AppState<M, O>>) -> impl IntoResponse
where
    M: MenuRepository,
    O: OrderRepository,
{
    Json(RootResponse {
        message: "Restaurant order service".to_string(),
    })
}

/// Health check endpoint.
async fn health_check<M, O>(State(state): State<AppState<M, O>>) -> impl IntoResponse
where
    M: MenuRepository,
    O: OrderRepository,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// List the full menu, sorted by name.
async fn list_menu<M, O>(
    State(state): State<AppState<M, O>>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MenuRepository,
    O: OrderRepository,
{
    let items = state.menu_catalog.list().await?;
    Ok(Json(items))
}

/// Create a menu item.
async fn create_menu_item<M, O>(
    State(state): State<AppState<M, O>>,
    Json(request): Json<CreateMenuItemRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MenuRepository,
    O: OrderRepository,
{
    let item = state.menu_catalog.create(request.into_command()).await?;
    Ok(Json(item))
}

/// Apply a sparse patch to a menu item.
///
/// A successful patch returns the refreshed item as the body; an empty
/// patch returns `{"updated": false}` without touching the store.
async fn update_menu_item<M, O>(
    State(state): State<AppState<M, O>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateMenuItemRequest>,
) -> Result<axum::response::Response, ApiError>
where
    M: MenuRepository,
    O: OrderRepository,
{
    let outcome = state
        .menu_catalog
        .update(&MenuItemId::new(id), request.into_patch())
        .await?;

    let response = match outcome {
        MenuUpdateOutcome::Unchanged => {
            Json(MenuUnchangedResponse { updated: false }).into_response()
        }
        MenuUpdateOutcome::Updated(item) => Json(item).into_response(),
    };
    Ok(response)
}

/// Place an order against a table.
async fn place_order<M, O>(
    State(state): State<AppState<M, O>>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MenuRepository,
    O: OrderRepository,
{
    let order = state.place_order.execute(request.into_dto()).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// List orders, newest first, optionally filtered.
async fn list_orders<M, O>(
    State(state): State<AppState<M, O>>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MenuRepository,
    O: OrderRepository,
{
    // an empty status value means "no filter", like an absent parameter
    let status = query
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(OrderStatus::from_str)
        .transpose()?;

    let filter = OrderFilter {
        status,
        table_number: query.table,
        paid: query.paid,
    };

    let orders = state.order_repo.find(&filter).await?;
    let dtos: Vec<OrderDto> = orders.iter().map(OrderDto::from_order).collect();
    Ok(Json(dtos))
}

/// Move an order to a new lifecycle status.
async fn update_order_status<M, O>(
    State(state): State<AppState<M, O>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MenuRepository,
    O: OrderRepository,
{
    let order = state
        .update_order_status
        .execute(&OrderId::new(id), &request.status)
        .await?;
    Ok(Json(order))
}

/// Settle an order.
async fn mark_order_paid<M, O>(
    State(state): State<AppState<M, O>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MenuRepository,
    O: OrderRepository,
{
    let order = state.mark_order_paid.execute(&OrderId::new(id)).await?;
    Ok(Json(order))
}

/// Aggregate unpaid orders for settlement.
async fn billing_overview<M, O>(
    State(state): State<AppState<M, O>>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MenuRepository,
    O: OrderRepository,
{
    let overview = state.billing_overview.execute().await?;
    Ok(Json(overview))
}
