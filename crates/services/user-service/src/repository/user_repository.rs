//! In-memory user repository.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use domain::{DomainError, DomainResult, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>>;

    /// List all users, ordered by ID
    async fn list(&self) -> DomainResult<Vec<User>>;

    /// Insert a new user; fails if its ID is already taken
    async fn insert(&self, user: User) -> DomainResult<User>;

    /// Replace the record stored under `id` with `user`
    async fn replace(&self, id: i64, user: User) -> DomainResult<User>;

    /// Remove and return the record stored under `id`
    async fn remove(&self, id: i64) -> DomainResult<User>;
}

/// Concrete in-memory implementation of UserRepository.
///
/// Every operation runs its whole check-then-act sequence under a single
/// lock guard, so ID uniqueness holds across concurrent requests.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<BTreeMap<i64, User>>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned() -> DomainError {
    DomainError::internal("user store lock poisoned")
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let users = self.users.read().map_err(|_| lock_poisoned())?;
        Ok(users.get(&id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let users = self.users.read().map_err(|_| lock_poisoned())?;
        Ok(users.values().cloned().collect())
    }

    async fn insert(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().map_err(|_| lock_poisoned())?;
        if users.contains_key(&user.id) {
            return Err(DomainError::duplicate("User"));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn replace(&self, id: i64, user: User) -> DomainResult<User> {
        let mut users = self.users.write().map_err(|_| lock_poisoned())?;
        if !users.contains_key(&id) {
            return Err(DomainError::not_found("User"));
        }
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn remove(&self, id: i64) -> DomainResult<User> {
        let mut users = self.users.write().map_err(|_| lock_poisoned())?;
        users.remove(&id).ok_or_else(|| DomainError::not_found("User"))
    }
}
