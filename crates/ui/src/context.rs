use std::sync::Arc;

use services::{AuthService, PracticeApi};

/// What the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn api(&self) -> Arc<dyn PracticeApi>;
    fn auth(&self) -> Arc<AuthService>;

    /// Usernames offered as one-click dev logins.
    fn dev_users(&self) -> Vec<String>;
}

#[derive(Clone)]
pub struct AppContext {
    api: Arc<dyn PracticeApi>,
    auth: Arc<AuthService>,
    dev_users: Arc<[String]>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            api: app.api(),
            auth: app.auth(),
            dev_users: app.dev_users().into(),
        }
    }

    #[must_use]
    pub fn api(&self) -> Arc<dyn PracticeApi> {
        Arc::clone(&self.api)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn dev_users(&self) -> &[String] {
        &self.dev_users
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
