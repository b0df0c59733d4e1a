//! Route configuration.

use axum::{response::Json, routing::get, Router};
use utoipa_swagger_ui::{Config, SwaggerUi};

use item_service_lib::state::AppState as ItemState;
use user_service_lib::state::AppState as UserState;

use crate::handlers::health_routes;
use crate::openapi::merged_openapi;

/// Create the main router, mounting both service routers in-process.
///
/// The Swagger UI page is configured with both per-service document URLs so
/// it offers a service selector, mirroring the per-service documents the
/// nested routers serve themselves.
pub fn create_router(items: ItemState, users: UserState) -> Router {
    Router::new()
        // Health check
        .nest("/health", health_routes())
        // Merged interface description
        .route("/openapi.json", get(openapi_json))
        // Swagger UI with one entry per service
        .merge(
            SwaggerUi::new("/docs")
                .config(Config::new(["/users/openapi.json", "/items/openapi.json"])),
        )
        // Resource services
        .nest(
            user_service_lib::MOUNT_PATH,
            user_service_lib::handlers::user_routes().with_state(users),
        )
        .nest(
            item_service_lib::MOUNT_PATH,
            item_service_lib::handlers::item_routes().with_state(items),
        )
}

/// Serve the merged OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(merged_openapi())
}
