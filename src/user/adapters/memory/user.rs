//! In-memory repository for user account tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::ports::{ReferenceLookupError, ReferenceLookupResult, UserLookup};
use crate::user::{
    domain::{EmailAddress, User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: HashMap<UserId, User>,
    email_index: HashMap<String, UserId>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, InMemoryUserState>, UserRepositoryError> {
        self.state
            .read()
            .map_err(|err| UserRepositoryError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write_state(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, InMemoryUserState>, UserRepositoryError> {
        self.state
            .write()
            .map_err(|err| UserRepositoryError::persistence(std::io::Error::other(err.to_string())))
    }
}

/// Sorts users newest first, with the identifier as a deterministic
/// tie-breaker for equal timestamps.
fn sort_newest_first(users: &mut [User]) {
    users.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b.id().into_inner().cmp(&a.id().into_inner()))
    });
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn store(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.write_state()?;
        if state.users.contains_key(&user.id()) {
            return Err(UserRepositoryError::DuplicateUser(user.id()));
        }
        if state.email_index.contains_key(user.email().as_str()) {
            return Err(UserRepositoryError::DuplicateEmail(user.email().clone()));
        }

        state
            .email_index
            .insert(user.email().as_str().to_owned(), user.id());
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.write_state()?;
        let old_user = state
            .users
            .get(&user.id())
            .ok_or(UserRepositoryError::NotFound(user.id()))?
            .clone();

        let email_taken = state
            .email_index
            .get(user.email().as_str())
            .is_some_and(|holder| *holder != user.id());
        if email_taken {
            return Err(UserRepositoryError::DuplicateEmail(user.email().clone()));
        }

        state.email_index.remove(old_user.email().as_str());
        state
            .email_index
            .insert(user.email().as_str().to_owned(), user.id());
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.read_state()?;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        let state = self.read_state()?;
        let user = state
            .email_index
            .get(email.as_str())
            .and_then(|id| state.users.get(id))
            .cloned();
        Ok(user)
    }

    async fn list(&self) -> UserRepositoryResult<Vec<User>> {
        let state = self.read_state()?;
        let mut users: Vec<User> = state.users.values().cloned().collect();
        sort_newest_first(&mut users);
        Ok(users)
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        let mut state = self.write_state()?;
        let removed = state
            .users
            .remove(&id)
            .ok_or(UserRepositoryError::NotFound(id))?;
        state.email_index.remove(removed.email().as_str());
        Ok(())
    }
}

#[async_trait]
impl UserLookup for InMemoryUserRepository {
    async fn user_exists(&self, id: UserId) -> ReferenceLookupResult<bool> {
        let state = self.state.read().map_err(|err| {
            ReferenceLookupError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.users.contains_key(&id))
    }
}
