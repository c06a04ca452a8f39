//! User Command Handlers

use chrono::Utc;
use std::sync::Arc;

use crate::application::commands::{RegisterUser, UpdateUser};
use crate::application::error::{require_id, require_non_empty, ApplicationError};
use crate::application::ports::{NewUser, UserRecord, UserRepositoryPort};

// ============================================================================
// RegisterUser
// ============================================================================

/// RegisterUser Handler
pub struct RegisterUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl RegisterUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: RegisterUser) -> Result<UserRecord, ApplicationError> {
        require_non_empty(&command.email, "email(string) is required")?;

        let user = self
            .user_repo
            .create(&NewUser {
                first_name: command.first_name,
                last_name: command.last_name,
                email: command.email,
            })
            .await?;

        tracing::info!(user_id = user.id, email = %user.email, "User registered");

        Ok(user)
    }
}

// ============================================================================
// UpdateUser
// ============================================================================

/// UpdateUser Handler
pub struct UpdateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl UpdateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: UpdateUser) -> Result<UserRecord, ApplicationError> {
        require_id(command.principal_id)?;

        let mut user = self
            .user_repo
            .find_by_id(command.principal_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", command.principal_id))?;

        if command.id != user.id {
            tracing::warn!(
                principal_id = command.principal_id,
                requested_id = command.id,
                "User update rejected: id mismatch"
            );
            return Err(ApplicationError::unauthorized());
        }

        user.first_name = command.first_name;
        user.last_name = command.last_name;
        user.email = command.email;
        user.updated_at = Utc::now();

        self.user_repo.update(&user).await?;

        tracing::info!(user_id = user.id, "User updated");

        Ok(user)
    }
}
