//! Service layer for item business logic.

mod item_service;

pub use item_service::{ItemManager, ItemService};
