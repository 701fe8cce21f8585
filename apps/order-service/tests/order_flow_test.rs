//! End-to-end tests for the table-service flow.
//!
//! Drives the HTTP API from menu setup through order placement, lifecycle
//! transitions, payment, and billing.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use order_service::application::use_cases::{
    BillingOverviewUseCase, MarkOrderPaidUseCase, MenuCatalogUseCase, PlaceOrderUseCase,
    UpdateOrderStatusUseCase,
};
use order_service::infrastructure::http::{AppState, create_router};
use order_service::infrastructure::persistence::{
    InMemoryMenuRepository, InMemoryOrderRepository,
};

fn test_app() -> axum::Router {
    let menu_repo = Arc::new(InMemoryMenuRepository::new());
    let order_repo = Arc::new(InMemoryOrderRepository::new());

    let state = AppState {
        menu_catalog: Arc::new(MenuCatalogUseCase::new(Arc::clone(&menu_repo))),
        place_order: Arc::new(PlaceOrderUseCase::new(
            Arc::clone(&menu_repo),
            Arc::clone(&order_repo),
        )),
        update_order_status: Arc::new(UpdateOrderStatusUseCase::new(Arc::clone(&order_repo))),
        mark_order_paid: Arc::new(MarkOrderPaidUseCase::new(Arc::clone(&order_repo))),
        billing_overview: Arc::new(BillingOverviewUseCase::new(Arc::clone(&order_repo))),
        order_repo,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    create_router(state)
}

async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<&Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_menu_item(app: &axum::Router, name: &str, price: &str) -> String {
    let (status, json) = send(
        app,
        "POST",
        "/menu",
        Some(&json!({"name": name, "price": price, "category": "Main"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["id"].as_str().unwrap().to_string()
}

async fn place_order(app: &axum::Router, table: &str, item_id: &str, quantity: u32) -> Value {
    let (status, json) = send(
        app,
        "POST",
        "/orders",
        Some(&json!({
            "table_number": table,
            "items": [{"menu_item_id": item_id, "quantity": quantity}]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json
}

#[tokio::test]
async fn full_table_service_flow() {
    let app = test_app();

    // Menu setup: one pizza at 10.00
    let item_id = create_menu_item(&app, "Margherita", "10.00").await;

    // Table 5 orders two of them
    let order = place_order(&app, "5", &item_id, 2).await;
    let order_id = order["id"].as_str().unwrap().to_string();

    assert_eq!(order["sub_total"], json!("20.00"));
    assert_eq!(order["tax"], json!("0.00"));
    assert_eq!(order["total"], json!("20.00"));
    assert_eq!(order["status"], json!("placed"));
    assert_eq!(order["paid"], json!(false));
    assert_eq!(order["items"][0]["name"], json!("Margherita"));
    assert_eq!(order["items"][0]["unit_price"], json!("10.00"));

    // Kitchen progresses the order
    for status in ["preparing", "ready", "served"] {
        let (code, json) = send(
            &app,
            "PATCH",
            &format!("/orders/{order_id}/status"),
            Some(&json!({"status": status})),
        )
        .await;
        assert_eq!(code, StatusCode::OK);
        assert_eq!(json["status"], Value::String(status.to_string()));
        assert_eq!(json["paid"], json!(false));
    }

    // Billing sees the open order
    let (code, billing) = send(&app, "GET", "/billing", None).await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(billing["orders"].as_array().unwrap().len(), 1);
    assert_eq!(billing["total_to_collect"], json!("20.00"));

    // Settle the table
    let (code, paid) = send(&app, "PATCH", &format!("/orders/{order_id}/pay"), None).await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(paid["paid"], json!(true));
    assert_eq!(paid["status"], json!("paid"));

    // Billing is clear again
    let (_, billing) = send(&app, "GET", "/billing", None).await;
    assert!(billing["orders"].as_array().unwrap().is_empty());
    assert_eq!(billing["total_to_collect"], json!("0.00"));
}

#[tokio::test]
async fn billing_sums_across_tables() {
    let app = test_app();
    let pizza = create_menu_item(&app, "Margherita", "10.00").await;
    let cola = create_menu_item(&app, "Cola", "2.50").await;

    place_order(&app, "1", &pizza, 1).await;
    place_order(&app, "2", &cola, 3).await;

    let (_, billing) = send(&app, "GET", "/billing", None).await;
    assert_eq!(billing["orders"].as_array().unwrap().len(), 2);
    assert_eq!(billing["total_to_collect"], json!("17.50"));
}

#[tokio::test]
async fn order_snapshot_survives_menu_reprice() {
    let app = test_app();
    let item_id = create_menu_item(&app, "Margherita", "10.00").await;
    let order = place_order(&app, "5", &item_id, 1).await;
    let order_id = order["id"].as_str().unwrap();

    // Reprice the pizza after the order exists
    let (code, patched) = send(
        &app,
        "PATCH",
        &format!("/menu/{item_id}"),
        Some(&json!({"price": "99.00"})),
    )
    .await;
    assert_eq!(code, StatusCode::OK);
    // success returns the updated item document itself
    assert_eq!(patched["price"], json!("99.00"));
    assert!(patched.get("updated").is_none());

    // The existing order still carries the old price
    let (_, orders) = send(&app, "GET", "/orders", None).await;
    let stored = orders
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["id"] == json!(order_id))
        .unwrap();
    assert_eq!(stored["total"], json!("10.00"));
    assert_eq!(stored["items"][0]["unit_price"], json!("10.00"));
}

#[tokio::test]
async fn orders_can_be_filtered_by_status_and_paid() {
    let app = test_app();
    let item_id = create_menu_item(&app, "Cola", "2.50").await;

    let open = place_order(&app, "1", &item_id, 1).await;
    let settled = place_order(&app, "2", &item_id, 1).await;
    let settled_id = settled["id"].as_str().unwrap();

    send(&app, "PATCH", &format!("/orders/{settled_id}/pay"), None).await;

    let (_, unpaid) = send(&app, "GET", "/orders?paid=false", None).await;
    assert_eq!(unpaid.as_array().unwrap().len(), 1);
    assert_eq!(unpaid[0]["id"], open["id"]);

    let (_, paid) = send(&app, "GET", "/orders?status=paid", None).await;
    assert_eq!(paid.as_array().unwrap().len(), 1);
    assert_eq!(paid[0]["id"], settled["id"]);
}

#[tokio::test]
async fn rejects_bad_requests_with_stable_error_codes() {
    let app = test_app();

    // Negative price
    let (code, body) = send(
        &app,
        "POST",
        "/menu",
        Some(&json!({"name": "Broken", "price": "-1.00"})),
    )
    .await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("VALIDATION_ERROR"));

    // Empty order
    let (code, body) = send(
        &app,
        "POST",
        "/orders",
        Some(&json!({"table_number": "1", "items": []})),
    )
    .await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("VALIDATION_ERROR"));

    // Unknown menu item in an order
    let (code, body) = send(
        &app,
        "POST",
        "/orders",
        Some(&json!({
            "table_number": "1",
            "items": [{"menu_item_id": "missing", "quantity": 1}]
        })),
    )
    .await;
    assert_eq!(code, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("NOT_FOUND"));

    // Capitalized status is rejected (statuses are case-sensitive)
    let (code, body) = send(
        &app,
        "PATCH",
        "/orders/whatever/status",
        Some(&json!({"status": "Placed"})),
    )
    .await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn unavailable_items_cannot_be_ordered() {
    let app = test_app();
    let item_id = create_menu_item(&app, "Seasonal Special", "15.00").await;

    // Take the item off the menu
    let (code, _) = send(
        &app,
        "PATCH",
        &format!("/menu/{item_id}"),
        Some(&json!({"is_available": false})),
    )
    .await;
    assert_eq!(code, StatusCode::OK);

    // It still shows in the catalog but cannot be ordered
    let (_, menu) = send(&app, "GET", "/menu", None).await;
    assert_eq!(menu.as_array().unwrap().len(), 1);

    let (code, body) = send(
        &app,
        "POST",
        "/orders",
        Some(&json!({
            "table_number": "1",
            "items": [{"menu_item_id": item_id, "quantity": 1}]
        })),
    )
    .await;
    assert_eq!(code, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("NOT_FOUND"));
}
