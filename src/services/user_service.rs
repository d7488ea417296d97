//! User service for the four CRUD operations.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::constants::ERR_USER_NOT_FOUND;
use crate::errors::ApiError;
use crate::models::{User, UserInput};
use crate::repositories::UserRepository;
use crate::utils::log_sanitizer::mask_email;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let users = self.repository.find_all().await?;
        debug!("Fetched {} users", users.len());
        Ok(users)
    }

    /// Insert a user. The returned id is the one the storage engine assigned.
    pub async fn create_user(&self, input: UserInput) -> Result<User, ApiError> {
        let id = self.repository.insert(&input).await?;
        info!(
            "Created user {} with email {}",
            id,
            mask_email(&input.email)
        );
        Ok(input.into_user(id))
    }

    /// Overwrite name and email of an existing user.
    ///
    /// Existence is decided by the affected-row count, not a prior lookup.
    pub async fn update_user(&self, id: i32, input: UserInput) -> Result<User, ApiError> {
        let affected = self.repository.update(id, &input).await?;
        if affected == 0 {
            warn!("Update failed: User not found with id: {}", id);
            return Err(ApiError::NotFound(format!("{}: {}", ERR_USER_NOT_FOUND, id)));
        }
        info!("Updated user {}", id);
        Ok(input.into_user(id))
    }

    pub async fn delete_user(&self, id: i32) -> Result<(), ApiError> {
        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            warn!("Delete failed: User not found with id: {}", id);
            return Err(ApiError::NotFound(format!("{}: {}", ERR_USER_NOT_FOUND, id)));
        }
        info!("Deleted user {}", id);
        Ok(())
    }
}
