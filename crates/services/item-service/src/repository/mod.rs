//! Repository layer for data access.

mod item_repository;

pub use item_repository::{ItemRepository, ItemStore};

#[cfg(any(test, feature = "test-utils"))]
pub use item_repository::MockItemRepository;
