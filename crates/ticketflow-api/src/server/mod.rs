//! Server setup and initialization
//!
//! Provides the application builder and server runner. The entity store
//! backend (in-memory fake or external REST store) is chosen from
//! configuration here.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use ticketflow_common::{AppConfig, AppError, StoreMode};
use ticketflow_service::ServiceContextBuilder;
use ticketflow_store::{
    MemAuditLogStore, MemTicketStore, MemUserDirectory, RestAuditLogStore, RestClient,
    RestStoreConfig, RestTicketStore, RestUserDirectory,
};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware.
///
/// Health routes stay outside the rate-limited API router so probes always
/// get through.
pub fn create_app(state: AppState) -> Router {
    let api = apply_middleware_with_config(
        create_router(),
        &state.config().rate_limit,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    Router::new().merge(health).merge(api).with_state(state)
}

/// Initialize all dependencies and create AppState
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let builder = match config.store.mode {
        StoreMode::Memory => {
            info!("Using embedded in-memory entity store");
            ServiceContextBuilder::new()
                .ticket_repo(Arc::new(MemTicketStore::new()))
                .audit_repo(Arc::new(MemAuditLogStore::new()))
                .user_directory(Arc::new(MemUserDirectory::with_demo_roster()))
        }
        StoreMode::Rest => {
            let rest_config =
                RestStoreConfig::try_from(&config.store).map_err(AppError::Domain)?;
            info!(base_url = %rest_config.base_url, "Using external REST entity store");
            let client = RestClient::new(&rest_config).map_err(AppError::Domain)?;
            ServiceContextBuilder::new()
                .ticket_repo(Arc::new(RestTicketStore::new(client.clone())))
                .audit_repo(Arc::new(RestAuditLogStore::new(client.clone())))
                .user_directory(Arc::new(RestUserDirectory::new(client)))
        }
    };

    let service_context = builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config)?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
