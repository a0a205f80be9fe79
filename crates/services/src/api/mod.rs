//! Typed access to the practice backend.

mod client;
pub mod types;

use async_trait::async_trait;

use caligula_core::model::{PracticeSpec, SpecId, Tense, User, Word};

use crate::error::ApiError;

pub use client::{ApiClient, TokenHandle};
pub use types::{
    AddNewWordsResponse, GenerateRequest, GenerateResponse, GenerationTrace, LoginResponse,
    NewWord, WordFeatures,
};

/// One method per backend endpoint.
///
/// Every call except `dev_login` is authenticated with the current session
/// token when one is installed.
#[async_trait]
pub trait PracticeApi: Send + Sync {
    /// `POST /auth/dev-login/`
    async fn dev_login(&self, username: &str) -> Result<LoginResponse, ApiError>;

    /// `GET /me/`
    async fn me(&self) -> Result<User, ApiError>;

    /// `GET /words/`
    async fn list_words(&self) -> Result<Vec<Word>, ApiError>;

    /// `POST /words/`
    async fn add_word(&self, word: &NewWord) -> Result<Word, ApiError>;

    /// `GET /practice/next-spec/`
    async fn next_spec(&self) -> Result<PracticeSpec, ApiError>;

    /// `GET /practice/batch-specs/?tenses=...`
    async fn batch_specs(&self, tenses: &[Tense]) -> Result<Vec<PracticeSpec>, ApiError>;

    /// `POST /llm/generate/`
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError>;

    /// `POST /words/:id/score/`
    async fn score(
        &self,
        spec_id: &SpecId,
        tense: Option<Tense>,
        correct: bool,
    ) -> Result<(), ApiError>;

    /// `POST /words/add-new/`
    async fn add_new_words(&self) -> Result<AddNewWordsResponse, ApiError>;

    /// `POST /words/reset-stats/`
    async fn reset_stats(&self) -> Result<(), ApiError>;
}
