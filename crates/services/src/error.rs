//! Shared error types for the services crate.

use thiserror::Error;

use caligula_core::ModelError;
use storage::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ApiClient`.
///
/// `Http` displays as the backend's `detail` message, or `HTTP <status>` when
/// the error body carries none.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("{message}")]
    Http {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status(),
            ApiError::Decode(_) => None,
        }
    }
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("Login failed")]
    LoginRejected,
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
