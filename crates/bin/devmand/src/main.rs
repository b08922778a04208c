//! # devmand — devman daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`devman.toml` + environment overrides)
//! - Initialize structured logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, bind a TCP port, and serve until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tracing_subscriber::EnvFilter;

use devman_adapter_http_axum::state::AppState;
use devman_adapter_storage_sqlite_sqlx::{
    SqliteClientRepository, SqliteDeviceRepository, SqliteEventRepository,
};
use devman_app::services::client_service::ClientService;
use devman_app::services::dashboard_service::DashboardService;
use devman_app::services::device_service::DeviceService;
use devman_app::services::event_service::EventService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = devman_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Services — repositories are cheap pool handles, so services that
    // share a table each get their own instance.
    let client_service = ClientService::new(SqliteClientRepository::new(pool.clone()));
    let device_service = DeviceService::new(
        SqliteClientRepository::new(pool.clone()),
        SqliteDeviceRepository::new(pool.clone()),
    );
    let event_service = EventService::new(
        SqliteDeviceRepository::new(pool.clone()),
        SqliteEventRepository::new(pool.clone()),
    );
    let dashboard_service = DashboardService::new(SqliteEventRepository::new(pool));

    // HTTP
    let state = AppState::new(
        client_service,
        device_service,
        event_service,
        dashboard_service,
    );
    let app = devman_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "devmand listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown handler");
    }
}
