use std::env;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_DEV_USERS: [&str; 2] = ["zack", "mary"];

/// Where the backend lives and which dev accounts the login screen offers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub dev_users: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            dev_users: DEFAULT_DEV_USERS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ApiConfig {
    /// Reads `CALIGULA_API_BASE` and `CALIGULA_DEV_USERS`, falling back to the
    /// local development defaults for anything unset or blank.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base_url) = env::var("CALIGULA_API_BASE")
            .ok()
            .filter(|value| !value.trim().is_empty())
        {
            config.base_url = base_url.trim().to_string();
        }
        if let Ok(raw) = env::var("CALIGULA_DEV_USERS") {
            let users = parse_user_list(&raw);
            if !users.is_empty() {
                config.dev_users = users;
            }
        }
        config
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn parse_user_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}
