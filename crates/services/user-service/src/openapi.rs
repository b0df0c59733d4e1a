//! OpenAPI documentation for the user service.

use utoipa::OpenApi;

use domain::User;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(title = "User Service", description = "CRUD over the in-memory user collection"),
    paths(
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
    ),
    components(schemas(User)),
    tags(
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;
