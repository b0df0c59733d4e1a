//! Item service - CRUD contract over the item store.

use async_trait::async_trait;
use std::sync::Arc;

use domain::{DomainResult, Item, OptionExt};

use crate::repository::ItemRepository;

/// Item service trait for dependency injection.
#[async_trait]
pub trait ItemService: Send + Sync {
    /// Add a new item; its ID must not already be taken
    async fn create_item(&self, item: Item) -> DomainResult<Item>;

    /// List all items in insertion order
    async fn list_items(&self) -> DomainResult<Vec<Item>>;

    /// Get an item by ID
    async fn get_item(&self, id: i64) -> DomainResult<Item>;

    /// Replace the record stored under `id`
    async fn update_item(&self, id: i64, item: Item) -> DomainResult<Item>;

    /// Remove and return the record stored under `id`
    async fn delete_item(&self, id: i64) -> DomainResult<Item>;
}

/// Concrete implementation of ItemService using the repository.
pub struct ItemManager {
    repo: Arc<dyn ItemRepository>,
}

impl ItemManager {
    /// Create new item service instance with repository
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ItemService for ItemManager {
    async fn create_item(&self, item: Item) -> DomainResult<Item> {
        self.repo.insert(item).await
    }

    async fn list_items(&self) -> DomainResult<Vec<Item>> {
        self.repo.list().await
    }

    async fn get_item(&self, id: i64) -> DomainResult<Item> {
        self.repo.find_by_id(id).await?.ok_or_not_found("Item")
    }

    async fn update_item(&self, id: i64, item: Item) -> DomainResult<Item> {
        self.repo.replace(id, item).await
    }

    async fn delete_item(&self, id: i64) -> DomainResult<Item> {
        self.repo.remove(id).await
    }
}
