use std::sync::Arc;

use caligula_core::model::{User, normalize_username};
use storage::AuthStore;

use crate::api::{PracticeApi, TokenHandle};
use crate::error::{ApiError, AuthError};

/// Owns the session lifecycle: restore at startup, login, logout.
///
/// Keeps the persisted store and the client's token slot in step.
#[derive(Clone)]
pub struct AuthService {
    api: Arc<dyn PracticeApi>,
    store: AuthStore,
    token: TokenHandle,
}

impl AuthService {
    #[must_use]
    pub fn new(api: Arc<dyn PracticeApi>, store: AuthStore, token: TokenHandle) -> Self {
        Self { api, store, token }
    }

    /// Load the persisted session and install its token.
    ///
    /// Returns `None` when nothing usable is stored.
    pub async fn restore(&self) -> Option<User> {
        let Some(session) = self.store.load_session().await else {
            self.token.set(None);
            return None;
        };
        self.token.set(Some(session.access_token().to_string()));
        tracing::info!(username = %session.user().username, "restored session");
        Some(session.into_user())
    }

    /// Dev-login (no password) and persist the resulting session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::LoginRejected` when the backend refuses the login
    /// or its reply lacks a token or user, `AuthError::Api` when the backend
    /// cannot be reached, and `AuthError::Storage` when the session cannot be
    /// persisted.
    pub async fn login(&self, username: &str) -> Result<User, AuthError> {
        let username = normalize_username(username)?;
        let response = match self.api.dev_login(&username).await {
            Ok(response) => response,
            Err(ApiError::Http { status, message }) => {
                tracing::warn!(%status, detail = %message, "dev-login refused");
                return Err(AuthError::LoginRejected);
            }
            Err(err) => return Err(err.into()),
        };
        let session = response.into_session().ok_or(AuthError::LoginRejected)?;

        self.store
            .set_auth(session.access_token(), session.user())
            .await?;
        self.token.set(Some(session.access_token().to_string()));
        tracing::info!(username = %session.user().username, "logged in");
        Ok(session.into_user())
    }

    /// Forget the session. The in-memory token is dropped even if the store
    /// cannot be cleared.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the persisted keys cannot be removed.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.token.set(None);
        self.store.clear_auth().await?;
        tracing::info!("logged out");
        Ok(())
    }

    /// Ask the backend who the current token belongs to.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` if the token is missing, expired or rejected.
    pub async fn whoami(&self) -> Result<User, AuthError> {
        Ok(self.api.me().await?)
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.get().is_some()
    }
}
