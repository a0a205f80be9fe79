use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::model::ids::UserId;

/// Identity returned by the backend on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
}

impl User {
    #[must_use]
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

/// An authenticated session: bearer token plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    access_token: String,
    user: User,
}

impl Session {
    #[must_use]
    pub fn new(access_token: impl Into<String>, user: User) -> Self {
        Self {
            access_token: access_token.into(),
            user,
        }
    }

    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub fn into_user(self) -> User {
        self.user
    }
}

/// Normalizes a dev-login name the way the backend stores it.
///
/// # Errors
///
/// Returns `ModelError::EmptyUsername` if nothing is left after trimming.
pub fn normalize_username(raw: &str) -> Result<String, ModelError> {
    let name = raw.trim().to_lowercase();
    if name.is_empty() {
        return Err(ModelError::EmptyUsername);
    }
    Ok(name)
}
