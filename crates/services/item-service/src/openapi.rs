//! OpenAPI documentation for the item service.

use utoipa::OpenApi;

use crate::handlers::item_handler::DeleteAck;
use domain::Item;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(title = "Item Service", description = "CRUD over the in-memory item collection"),
    paths(
        crate::handlers::item_handler::create_item,
        crate::handlers::item_handler::list_items,
        crate::handlers::item_handler::get_item,
        crate::handlers::item_handler::update_item,
        crate::handlers::item_handler::delete_item,
    ),
    components(schemas(Item, DeleteAck)),
    tags(
        (name = "Items", description = "Item management endpoints"),
    )
)]
pub struct ApiDoc;
