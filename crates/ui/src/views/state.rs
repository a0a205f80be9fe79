use services::{ApiError, AuthError};

pub const NO_TENSE_SELECTED: &str = "Select at least one tense.";
pub const NO_NEW_WORDS: &str = "No new words this time. Try again.";

/// The single inline message shown above the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// Rejected locally before any request was sent.
    Validation(&'static str),
    /// A request failed: transport error, non-2xx status or bad body.
    Request(String),
    /// The request worked but produced nothing useful.
    Empty(&'static str),
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ViewError::Validation(message) | ViewError::Empty(message) => *message,
            ViewError::Request(message) => message.as_str(),
        }
    }

    /// Soft hints are styled differently from failures.
    #[must_use]
    pub fn is_hint(&self) -> bool {
        matches!(self, ViewError::Empty(_))
    }
}

impl From<ApiError> for ViewError {
    fn from(err: ApiError) -> Self {
        ViewError::Request(err.to_string())
    }
}

impl From<AuthError> for ViewError {
    fn from(err: AuthError) -> Self {
        ViewError::Request(err.to_string())
    }
}
