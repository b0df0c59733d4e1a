//! HTTP handlers for the item service.

pub mod item_handler;

pub use item_handler::item_routes;
