//! API Gateway Library
//!
//! Mounts the item and user service routers in a single process and
//! aggregates their interface documentation behind one Swagger UI page.

pub mod config;
pub mod handlers;
pub mod openapi;
pub mod routes;

use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::create_router;

/// Build the full application with fresh, empty in-memory stores.
pub fn app() -> Router {
    create_router(item_service_lib::default_state(), user_service_lib::default_state())
}

/// Run the gateway HTTP server.
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = app().layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
