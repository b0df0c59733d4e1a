//! User domain entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User record. The `id` field is the unique key within a user store.
///
/// Updates replace the whole record; the replacement's `id` must match the
/// identifier the update targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique user identifier
    pub id: i64,
    /// Login name
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
    /// Email address
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    /// Optional display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}
