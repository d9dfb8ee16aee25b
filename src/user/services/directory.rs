//! Service layer for user account creation, update, and retrieval.

use crate::user::{
    domain::{EmailAddress, User, UserDomainError, UserId, UserName},
    ports::{UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    name: String,
    email: String,
}

impl CreateUserRequest {
    /// Creates a request with the required account fields.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Request payload for a partial user update. Unset fields are left
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserRequest {
    user_id: UserId,
    name: Option<String>,
    email: Option<String>,
}

impl UpdateUserRequest {
    /// Creates an empty update for the given user.
    #[must_use]
    pub const fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            name: None,
            email: None,
        }
    }

    /// Sets a replacement display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a replacement email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Service-level errors for user directory operations.
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
    /// The referenced user does not exist.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),
}

/// Result type for user directory service operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// User directory orchestration service.
#[derive(Clone)]
pub struct UserDirectoryService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> UserDirectoryService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new user directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new user account.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError`] when input validation fails or the
    /// email address is already taken.
    pub async fn create_user(&self, request: CreateUserRequest) -> UserDirectoryResult<User> {
        let name = UserName::new(request.name)?;
        let email = EmailAddress::new(request.email)?;
        let user = User::new(name, email, &*self.clock);
        self.repository.store(&user).await?;
        Ok(user)
    }

    /// Applies a partial update to an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::UnknownUser`] when the user does not
    /// exist, or the usual validation and repository errors otherwise.
    pub async fn update_user(&self, request: UpdateUserRequest) -> UserDirectoryResult<User> {
        let new_name = request.name.map(UserName::new).transpose()?;
        let new_email = request.email.map(EmailAddress::new).transpose()?;

        let mut user = self
            .repository
            .find_by_id(request.user_id)
            .await?
            .ok_or(UserDirectoryError::UnknownUser(request.user_id))?;

        if let Some(name) = new_name {
            user.rename(name, &*self.clock);
        }
        if let Some(email) = new_email {
            user.change_email(email, &*self.clock);
        }

        self.repository.update(&user).await?;
        Ok(user)
    }

    /// Retrieves a user by identifier.
    ///
    /// Returns `Ok(None)` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: UserId) -> UserDirectoryResult<Option<User>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Retrieves a user by email address.
    ///
    /// Returns `Ok(None)` when no user holds the address.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when the lookup fails.
    pub async fn find_by_email(&self, email: &EmailAddress) -> UserDirectoryResult<Option<User>> {
        Ok(self.repository.find_by_email(email).await?)
    }

    /// Lists all users, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when the listing fails.
    pub async fn list_users(&self) -> UserDirectoryResult<Vec<User>> {
        Ok(self.repository.list().await?)
    }

    /// Removes a user account.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::UnknownUser`] when the user does not
    /// exist.
    pub async fn delete_user(&self, id: UserId) -> UserDirectoryResult<()> {
        match self.repository.delete(id).await {
            Err(UserRepositoryError::NotFound(missing)) => {
                Err(UserDirectoryError::UnknownUser(missing))
            }
            other => Ok(other?),
        }
    }
}
