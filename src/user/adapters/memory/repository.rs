//! In-memory repository for credential tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{PasswordDigest, User, UserId, Username},
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
    name_index: HashMap<Username, UserId>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(
        &self,
        name: &Username,
        password_digest: &PasswordDigest,
    ) -> UserRepositoryResult<User> {
        let mut state = self.state.write().map_err(poisoned)?;

        if state.name_index.contains_key(name) {
            return Err(UserRepositoryError::DuplicateUsername(name.clone()));
        }

        let user = User::new(UserId::new(), name.clone(), *password_digest);
        state.name_index.insert(name.clone(), user.id());
        state.users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn find_by_name(&self, name: &Username) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(poisoned)?;
        let user = state
            .name_index
            .get(name)
            .and_then(|id| state.users.get(id))
            .cloned();
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn update_password_digest(
        &self,
        id: UserId,
        password_digest: &PasswordDigest,
    ) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let existing = state
            .users
            .get_mut(&id)
            .ok_or(UserRepositoryError::NotFound(id))?;
        *existing = User::new(existing.id(), existing.name().clone(), *password_digest);
        Ok(())
    }
}
