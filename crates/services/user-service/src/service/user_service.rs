//! User service - CRUD contract over the user store.

use async_trait::async_trait;
use std::sync::Arc;

use domain::{DomainError, DomainResult, OptionExt, User};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Add a new user; its ID must not already be taken
    async fn create_user(&self, user: User) -> DomainResult<User>;

    /// List all users
    async fn list_users(&self) -> DomainResult<Vec<User>>;

    /// Get a user by ID
    async fn get_user(&self, id: i64) -> DomainResult<User>;

    /// Replace the record stored under `id`; the replacement's `id` must
    /// match the target identifier
    async fn update_user(&self, id: i64, user: User) -> DomainResult<User>;

    /// Remove and return the record stored under `id`
    async fn delete_user(&self, id: i64) -> DomainResult<User>;
}

/// Concrete implementation of UserService using the repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, user: User) -> DomainResult<User> {
        self.repo.insert(user).await
    }

    async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.repo.list().await
    }

    async fn get_user(&self, id: i64) -> DomainResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found("User")
    }

    async fn update_user(&self, id: i64, user: User) -> DomainResult<User> {
        // Existence is checked first so an absent target reports NotFound
        // even when the identifiers also disagree.
        self.repo.find_by_id(id).await?.ok_or_not_found("User")?;

        if user.id != id {
            return Err(DomainError::id_mismatch("User ID mismatch"));
        }

        self.repo.replace(id, user).await
    }

    async fn delete_user(&self, id: i64) -> DomainResult<User> {
        self.repo.remove(id).await
    }
}
