use thiserror::Error;

/// Errors raised while parsing or validating domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    #[error("unknown tense: {0}")]
    UnknownTense(String),
    #[error("unknown person: {0}")]
    UnknownPerson(String),
    #[error("username cannot be empty")]
    EmptyUsername,
}
