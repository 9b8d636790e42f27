//! kiosk-gateway server entry point.
//!
//! Starts the Axum HTTP server for the clinic status board: room
//! snapshot endpoints, catalog CRUD, and the admin session gate.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use kiosk_gateway::api;
use kiosk_gateway::app_state::AppState;
use kiosk_gateway::config::KioskConfig;
use kiosk_gateway::persistence::PostgresStore;
use kiosk_gateway::service::{CatalogService, RoomService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = KioskConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting kiosk-gateway");

    // Open the storage handle (pool + migrations)
    let store = PostgresStore::connect(&config).await?;

    // Build service layer
    let room_service = Arc::new(RoomService::new(store.clone()));
    let catalog_service = Arc::new(CatalogService::new(store));

    // Build application state
    let app_state = AppState {
        room_service,
        catalog_service,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
