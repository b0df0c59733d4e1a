//! Item Service Library
//!
//! This crate owns the in-memory item collection and exposes CRUD over HTTP.
//! It can be run as a standalone server or mounted in-process by the gateway.

pub mod config;
pub mod handlers;
pub mod openapi;
pub mod repository;
pub mod service;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::repository::ItemStore;
use crate::service::ItemManager;
use crate::state::AppState;

/// Path the item routes are mounted under, in both standalone and gateway mode.
pub const MOUNT_PATH: &str = "/items";

/// Build application state backed by a fresh, empty in-memory store.
pub fn default_state() -> AppState {
    let repo = Arc::new(ItemStore::new());
    AppState::new(Arc::new(ItemManager::new(repo)))
}

/// Run the item service as a standalone HTTP server.
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = axum::Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi::ApiDoc::openapi()))
        .nest(MOUNT_PATH, handlers::item_routes().with_state(default_state()))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Item service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
