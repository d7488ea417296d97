//! Repository layer for database operations.
//!
//! [`UserRepository`] is the storage seam: the service layer only talks to
//! the trait, so the PostgreSQL implementation can be swapped for the
//! in-memory one in tests.

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{User, UserInput};

#[cfg(test)]
pub mod in_memory;
pub mod user_repository;

pub use user_repository::PgUserRepository;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every row, in whatever order the storage engine yields them.
    async fn find_all(&self) -> Result<Vec<User>, ApiError>;

    /// Insert a row and return the id the storage engine assigned to it.
    async fn insert(&self, input: &UserInput) -> Result<i32, ApiError>;

    /// Overwrite name and email of the row with `id`. Returns rows affected.
    async fn update(&self, id: i32, input: &UserInput) -> Result<u64, ApiError>;

    /// Remove the row with `id`. Returns rows affected.
    async fn delete(&self, id: i32) -> Result<u64, ApiError>;
}
