use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

use caligula_core::model::{PracticeSpec, SpecId, Tense, User, Word, tense_query};

use crate::api::PracticeApi;
use crate::api::types::{
    AddNewWordsResponse, GenerateRequest, GenerateResponse, LoginRequest, LoginResponse,
    MeResponse, NewWord, ScoreRequest, WordEntryDto,
};
use crate::config::ApiConfig;
use crate::error::ApiError;

/// Shared slot for the bearer token.
///
/// The auth service writes it on login/logout/restore; the client reads it on
/// every request.
#[derive(Clone, Debug, Default)]
pub struct TokenHandle(Arc<RwLock<Option<String>>>);

impl TokenHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: Option<String>) {
        let mut guard = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *guard = token;
    }

    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// JSON-over-HTTP client for the practice backend.
///
/// No retries, timeouts or caching: transport failures surface as
/// `ApiError::Transport` unchanged.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: TokenHandle,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: &ApiConfig, token: TokenHandle) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Issue a request and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` for non-success statuses (message taken from the
    /// body's `detail`, else `HTTP <status>`), `ApiError::Transport` when the
    /// request cannot be sent, and `ApiError::Decode` when the reply is not the
    /// expected JSON.
    pub async fn api_fetch<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.request(method.clone(), path, true);
        if let Some(body) = body {
            request = request.json(body);
        }
        let (status, bytes) = send(request).await?;
        if !status.is_success() {
            return Err(error_from_body(status, &bytes));
        }
        tracing::debug!(%method, path, %status, "api_fetch ok");
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// GET shorthand for `api_fetch`.
    ///
    /// # Errors
    ///
    /// Same as `api_fetch`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.api_fetch::<T, ()>(Method::GET, path, None).await
    }

    /// POST `body` (or `{}`) as JSON.
    ///
    /// An empty or non-JSON success body decodes as `{}`.
    ///
    /// # Errors
    ///
    /// Same as `api_fetch`.
    pub async fn post_json<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.post(path, body, true).await
    }

    async fn post<T, B>(&self, path: &str, body: Option<&B>, authenticated: bool) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path, authenticated);
        let request = match body {
            Some(body) => request.json(body),
            None => request.json(&serde_json::json!({})),
        };
        let (status, bytes) = send(request).await?;
        if !status.is_success() {
            return Err(error_from_body(status, &bytes));
        }
        tracing::debug!(path, %status, "post_json ok");
        let value = serde_json::from_slice::<Value>(&bytes)
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Ok(serde_json::from_value(value)?)
    }

    fn request(&self, method: Method, path: &str, authenticated: bool) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if authenticated {
            if let Some(token) = self.token.get() {
                request = request.bearer_auth(token);
            }
        }
        request
    }
}

async fn send(request: RequestBuilder) -> Result<(StatusCode, Vec<u8>), ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let bytes = response.bytes().await?;
    Ok((status, bytes.to_vec()))
}

/// Builds the error for a non-success reply from its `detail` field.
fn error_from_body(status: StatusCode, body: &[u8]) -> ApiError {
    let detail = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(Value::as_str)
                .map(ToString::to_string)
        })
        .filter(|detail| !detail.is_empty());
    let message = detail.unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
    tracing::warn!(%status, %message, "backend request failed");
    ApiError::Http { status, message }
}

#[async_trait]
impl PracticeApi for ApiClient {
    async fn dev_login(&self, username: &str) -> Result<LoginResponse, ApiError> {
        self.post("/auth/dev-login/", Some(&LoginRequest { username }), false)
            .await
    }

    async fn me(&self) -> Result<User, ApiError> {
        let response: MeResponse = self.get_json("/me/").await?;
        Ok(response.user)
    }

    async fn list_words(&self) -> Result<Vec<Word>, ApiError> {
        let entries: Vec<WordEntryDto> = self.get_json("/words/").await?;
        Ok(entries.into_iter().map(Word::from).collect())
    }

    async fn add_word(&self, word: &NewWord) -> Result<Word, ApiError> {
        let entry: WordEntryDto = self
            .api_fetch(Method::POST, "/words/", Some(word))
            .await?;
        Ok(Word::from(entry))
    }

    async fn next_spec(&self) -> Result<PracticeSpec, ApiError> {
        self.get_json("/practice/next-spec/").await
    }

    async fn batch_specs(&self, tenses: &[Tense]) -> Result<Vec<PracticeSpec>, ApiError> {
        let path = format!("/practice/batch-specs/?tenses={}", tense_query(tenses));
        self.get_json(&path).await
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
        self.post_json("/llm/generate/", Some(request)).await
    }

    async fn score(
        &self,
        spec_id: &SpecId,
        tense: Option<Tense>,
        correct: bool,
    ) -> Result<(), ApiError> {
        let path = format!("/words/{}/score/", spec_id.as_str());
        let _: IgnoredAny = self
            .post_json(&path, Some(&ScoreRequest { tense, correct }))
            .await?;
        Ok(())
    }

    async fn add_new_words(&self) -> Result<AddNewWordsResponse, ApiError> {
        self.post_json::<_, ()>("/words/add-new/", None).await
    }

    async fn reset_stats(&self) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .post_json::<_, ()>("/words/reset-stats/", None)
            .await?;
        Ok(())
    }
}
