//! In-memory item repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use domain::{DomainError, DomainResult, Item};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Item repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find an item by ID
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Item>>;

    /// List all items in insertion order
    async fn list(&self) -> DomainResult<Vec<Item>>;

    /// Insert a new item; fails if its ID is already taken
    async fn insert(&self, item: Item) -> DomainResult<Item>;

    /// Replace the record stored under `id` with `item`
    async fn replace(&self, id: i64, item: Item) -> DomainResult<Item>;

    /// Remove and return the record stored under `id`
    async fn remove(&self, id: i64) -> DomainResult<Item>;
}

/// Key-indexed collection that remembers insertion order for listing.
#[derive(Debug, Default)]
struct OrderedItems {
    by_id: HashMap<i64, Item>,
    order: Vec<i64>,
}

/// Concrete in-memory implementation of ItemRepository.
///
/// Every operation runs its whole check-then-act sequence under a single
/// lock guard, so ID uniqueness holds across concurrent requests.
#[derive(Debug, Default)]
pub struct ItemStore {
    inner: RwLock<OrderedItems>,
}

impl ItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned() -> DomainError {
    DomainError::internal("item store lock poisoned")
}

#[async_trait]
impl ItemRepository for ItemStore {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Item>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned())?;
        Ok(inner.by_id.get(&id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Item>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned())?;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.by_id.get(id))
            .cloned()
            .collect())
    }

    async fn insert(&self, item: Item) -> DomainResult<Item> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;
        if inner.by_id.contains_key(&item.id) {
            return Err(DomainError::duplicate("Item with this ID"));
        }
        inner.order.push(item.id);
        inner.by_id.insert(item.id, item.clone());
        Ok(item)
    }

    async fn replace(&self, id: i64, item: Item) -> DomainResult<Item> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;
        if !inner.by_id.contains_key(&id) {
            return Err(DomainError::not_found("Item"));
        }
        inner.by_id.insert(id, item.clone());
        Ok(item)
    }

    async fn remove(&self, id: i64) -> DomainResult<Item> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;
        match inner.by_id.remove(&id) {
            Some(item) => {
                inner.order.retain(|stored| *stored != id);
                Ok(item)
            }
            None => Err(DomainError::not_found("Item")),
        }
    }
}
