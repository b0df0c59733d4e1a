//! Application state for dependency injection.

use std::sync::Arc;

use crate::service::ItemService;

/// State shared across item handlers.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(items: Arc<dyn ItemService>) -> Self {
        Self { items }
    }
}
