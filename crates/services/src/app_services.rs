use std::sync::Arc;

use storage::{AuthStore, Storage};

use crate::api::{ApiClient, PracticeApi, TokenHandle};
use crate::auth_service::AuthService;
use crate::config::ApiConfig;
use crate::error::AppServicesError;

/// Assembles the app-facing services around one shared token slot.
#[derive(Clone)]
pub struct AppServices {
    config: ApiConfig,
    api: Arc<dyn PracticeApi>,
    auth: Arc<AuthService>,
}

impl AppServices {
    #[must_use]
    pub fn new(config: ApiConfig, storage: &Storage) -> Self {
        let token = TokenHandle::new();
        let api: Arc<dyn PracticeApi> = Arc::new(ApiClient::new(&config, token.clone()));
        let auth = Arc::new(AuthService::new(
            Arc::clone(&api),
            AuthStore::new(Arc::clone(&storage.local_state)),
            token,
        ));
        Self { config, api, auth }
    }

    /// Build services whose session is persisted in `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, config: ApiConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(config, &storage))
    }

    #[must_use]
    pub fn dev_users(&self) -> Vec<String> {
        self.config.dev_users.clone()
    }

    #[must_use]
    pub fn api(&self) -> Arc<dyn PracticeApi> {
        Arc::clone(&self.api)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }
}
