//! Order Service Binary
//!
//! Starts the restaurant order service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin order-service
//! ```
//!
//! # Environment Variables
//!
//! - `PORT`: HTTP server port (default: 8000)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use order_service::application::use_cases::{
    BillingOverviewUseCase, MarkOrderPaidUseCase, MenuCatalogUseCase, PlaceOrderUseCase,
    UpdateOrderStatusUseCase,
};
use order_service::infrastructure::http::{AppState, create_router};
use order_service::infrastructure::persistence::{InMemoryMenuRepository, InMemoryOrderRepository};
use tokio::net::TcpListener;
use tokio::signal;

/// Default HTTP server port.
const DEFAULT_PORT: u16 = 8000;

/// Parsed configuration from environment variables.
struct ServiceConfig {
    port: u16,
}

/// Concrete type alias for the place order use case.
type ConcretePlaceOrderUseCase = PlaceOrderUseCase<InMemoryMenuRepository, InMemoryOrderRepository>;

/// Application use cases wired together for dependency injection.
struct UseCases {
    menu_catalog: Arc<MenuCatalogUseCase<InMemoryMenuRepository>>,
    place_order: Arc<ConcretePlaceOrderUseCase>,
    update_order_status: Arc<UpdateOrderStatusUseCase<InMemoryOrderRepository>>,
    mark_order_paid: Arc<MarkOrderPaidUseCase<InMemoryOrderRepository>>,
    billing_overview: Arc<BillingOverviewUseCase<InMemoryOrderRepository>>,
    order_repo: Arc<InMemoryOrderRepository>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting order service");

    let config = parse_config();
    log_config(&config);

    let use_cases = create_use_cases();
    let state = AppState {
        menu_catalog: Arc::clone(&use_cases.menu_catalog),
        place_order: Arc::clone(&use_cases.place_order),
        update_order_status: Arc::clone(&use_cases.update_order_status),
        mark_order_paid: Arc::clone(&use_cases.mark_order_paid),
        billing_overview: Arc::clone(&use_cases.billing_overview),
        order_repo: Arc::clone(&use_cases.order_repo),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;

    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET   /health");
    tracing::info!("  GET   /menu          POST  /menu");
    tracing::info!("  PATCH /menu/{{id}}");
    tracing::info!("  POST  /orders        GET   /orders");
    tracing::info!("  PATCH /orders/{{id}}/status");
    tracing::info!("  PATCH /orders/{{id}}/pay");
    tracing::info!("  GET   /billing");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Order service stopped");
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_err() {
        load_dotenv_from_ancestors();
    }
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses static directive strings that are compile-time constants guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "order_service=info"
                    .parse()
                    .expect("static directive 'order_service=info' is valid"),
            ),
        )
        .init();
}

/// Parse configuration from environment variables.
fn parse_config() -> ServiceConfig {
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| DEFAULT_PORT.to_string())
        .parse()
        .unwrap_or(DEFAULT_PORT);

    ServiceConfig { port }
}

/// Log the parsed configuration.
fn log_config(config: &ServiceConfig) {
    tracing::info!(port = config.port, "Configuration loaded");
}

/// Create all application use cases with their dependencies.
fn create_use_cases() -> UseCases {
    let menu_repo = Arc::new(InMemoryMenuRepository::new());
    let order_repo = Arc::new(InMemoryOrderRepository::new());

    UseCases {
        menu_catalog: Arc::new(MenuCatalogUseCase::new(Arc::clone(&menu_repo))),
        place_order: Arc::new(PlaceOrderUseCase::new(
            Arc::clone(&menu_repo),
            Arc::clone(&order_repo),
        )),
        update_order_status: Arc::new(UpdateOrderStatusUseCase::new(Arc::clone(&order_repo))),
        mark_order_paid: Arc::new(MarkOrderPaidUseCase::new(Arc::clone(&order_repo))),
        billing_overview: Arc::new(BillingOverviewUseCase::new(Arc::clone(&order_repo))),
        order_repo,
    }
}

/// Walk ancestor directories looking for a .env file.
fn load_dotenv_from_ancestors() {
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed. Failure to install
/// handlers means the process cannot respond to termination signals, so it
/// is better to fail fast during startup.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
