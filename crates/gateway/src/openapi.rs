//! Merged OpenAPI documentation.

use utoipa::OpenApi;

/// Top-level document the per-service documents are merged into.
#[derive(OpenApi)]
#[openapi(info(
    title = "Main API",
    description = "Aggregated item and user resource services"
))]
pub struct ApiDoc;

/// Merge both service documents into the gateway document.
pub fn merged_openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(item_service_lib::openapi::ApiDoc::openapi());
    doc.merge(user_service_lib::openapi::ApiDoc::openapi());
    doc
}
