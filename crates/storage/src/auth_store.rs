//! Persisted login state: the bearer token and the user it was issued for.

use std::sync::Arc;

use caligula_core::model::{Session, User};

use crate::repository::{KeyValueRepository, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Reads and writes the session over a key/value repository.
///
/// Reads never fail: a missing, unreadable or malformed value means
/// "not logged in".
#[derive(Clone)]
pub struct AuthStore {
    repo: Arc<dyn KeyValueRepository>,
}

impl AuthStore {
    #[must_use]
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self {
        Self { repo }
    }

    /// Persist the token and user. The token format is not checked.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if either value cannot be written.
    pub async fn set_auth(&self, access: &str, user: &User) -> Result<(), StorageError> {
        let user_json =
            serde_json::to_string(user).map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.repo.set_value(TOKEN_KEY, access).await?;
        self.repo.set_value(USER_KEY, &user_json).await?;
        tracing::debug!(username = %user.username, "stored session");
        Ok(())
    }

    /// Remove both keys. Safe to call when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub async fn clear_auth(&self) -> Result<(), StorageError> {
        self.repo.remove_value(TOKEN_KEY).await?;
        self.repo.remove_value(USER_KEY).await?;
        Ok(())
    }

    pub async fn get_user(&self) -> Option<User> {
        let raw = self.read(USER_KEY).await?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed stored user");
                None
            }
        }
    }

    pub async fn get_token(&self) -> Option<String> {
        self.read(TOKEN_KEY).await
    }

    /// Token and user together; `None` unless both are present and valid.
    pub async fn load_session(&self) -> Option<Session> {
        let token = self.get_token().await?;
        let user = self.get_user().await?;
        Some(Session::new(token, user))
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.repo.get_value(key).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read local state");
                None
            }
        }
    }
}
