//! Item domain entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Item record. The `id` field is the unique key within an item store.
///
/// Updates replace the whole record; there is no partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Item {
    /// Unique item identifier
    pub id: i64,
    /// Item display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price
    pub price: f64,
    /// Optional tax amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
}
