//! Scriptable backend for controller and view tests.

use std::mem::discriminant;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::Notify;

use caligula_core::model::{
    PartOfSpeech, Person, PracticeSpec, SpecId, Tense, User, UserId, Word, WordId,
};
use services::{
    AddNewWordsResponse, ApiError, AuthService, GenerateRequest, GenerateResponse, LoginResponse,
    NewWord, PracticeApi, StatusCode, TokenHandle,
};
use storage::{AuthStore, InMemoryRepository};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    DevLogin(String),
    Me,
    ListWords,
    AddWord(String),
    NextSpec,
    BatchSpecs(Vec<Tense>),
    Generate,
    Score(SpecId, Option<Tense>, bool),
    AddNewWords,
    ResetStats,
}

#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    failing: Mutex<Vec<Call>>,
    login: Mutex<Option<LoginResponse>>,
    words: Mutex<Vec<Word>>,
    next_spec: Mutex<Option<PracticeSpec>>,
    specs: Mutex<Vec<PracticeSpec>>,
    generated: Mutex<GenerateResponse>,
    new_words: Mutex<Option<Vec<String>>>,
    gates: Mutex<Vec<(Call, Arc<Notify>)>>,
}

pub fn word(id: u64, text: &str) -> Word {
    Word {
        id: WordId::new(id),
        text: text.to_string(),
        part_of_speech: PartOfSpeech::Verb,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        stats: Default::default(),
    }
}

pub fn spec(id: u64, lemma: &str, tense: Tense) -> PracticeSpec {
    PracticeSpec {
        id: SpecId::number(id),
        lemma: lemma.to_string(),
        part_of_speech: PartOfSpeech::Verb,
        person: Some(Person::FirstSingular),
        tense: Some(tense),
    }
}

/// Auth service over an empty in-memory store; the store is returned for
/// inspection.
pub fn auth_service(api: Arc<FakeApi>) -> (AuthService, AuthStore) {
    let store = AuthStore::new(Arc::new(InMemoryRepository::new()));
    let auth = AuthService::new(api, store.clone(), TokenHandle::new());
    (auth, store)
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Every call of this kind fails with HTTP 500 "boom".
    pub fn fail_on(&self, call: Call) {
        self.failing.lock().unwrap().push(call);
    }

    pub fn accept_login(&self, username: &str, token: &str) {
        *self.login.lock().unwrap() = Some(LoginResponse {
            access: Some(token.to_string()),
            user: Some(User::new(UserId::new(1), username)),
        });
    }

    pub fn set_words(&self, words: Vec<Word>) {
        *self.words.lock().unwrap() = words;
    }

    pub fn set_specs(&self, specs: Vec<PracticeSpec>) {
        *self.specs.lock().unwrap() = specs;
    }

    pub fn set_next_spec(&self, spec: PracticeSpec) {
        *self.next_spec.lock().unwrap() = Some(spec);
    }

    pub fn set_generated(&self, body: serde_json::Value) {
        *self.generated.lock().unwrap() = serde_json::from_value(body).unwrap();
    }

    pub fn set_new_words(&self, words: Option<Vec<String>>) {
        *self.new_words.lock().unwrap() = words;
    }

    /// The next call of this kind is recorded right away but only answers
    /// once the returned gate is notified. `list_words` answers with the list
    /// as it was when called.
    pub fn hold_next(&self, call: Call) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.lock().unwrap().push((call, Arc::clone(&gate)));
        gate
    }

    async fn pass_gate(&self, call: &Call) {
        let gate = {
            let mut gates = self.gates.lock().unwrap();
            gates
                .iter()
                .position(|(held, _)| discriminant(held) == discriminant(call))
                .map(|pos| gates.remove(pos).1)
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        let fails = self
            .failing
            .lock()
            .unwrap()
            .iter()
            .any(|failing| discriminant(failing) == discriminant(&call));
        self.calls.lock().unwrap().push(call);
        if fails {
            return Err(ApiError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "boom".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PracticeApi for FakeApi {
    async fn dev_login(&self, username: &str) -> Result<LoginResponse, ApiError> {
        self.record(Call::DevLogin(username.to_string()))?;
        Ok(self.login.lock().unwrap().clone().unwrap_or_default())
    }

    async fn me(&self) -> Result<User, ApiError> {
        self.record(Call::Me)?;
        Ok(User::new(UserId::new(1), "zack"))
    }

    async fn list_words(&self) -> Result<Vec<Word>, ApiError> {
        self.record(Call::ListWords)?;
        let words = self.words.lock().unwrap().clone();
        self.pass_gate(&Call::ListWords).await;
        Ok(words)
    }

    async fn add_word(&self, new_word: &NewWord) -> Result<Word, ApiError> {
        self.record(Call::AddWord(new_word.text.clone()))?;
        let mut words = self.words.lock().unwrap();
        let created = word(words.len() as u64 + 1, &new_word.text);
        words.push(created.clone());
        Ok(created)
    }

    async fn next_spec(&self) -> Result<PracticeSpec, ApiError> {
        self.record(Call::NextSpec)?;
        Ok(self
            .next_spec
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| spec(1, "fare", Tense::Presente)))
    }

    async fn batch_specs(&self, tenses: &[Tense]) -> Result<Vec<PracticeSpec>, ApiError> {
        self.record(Call::BatchSpecs(tenses.to_vec()))?;
        Ok(self.specs.lock().unwrap().clone())
    }

    async fn generate(&self, _request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
        self.record(Call::Generate)?;
        Ok(self.generated.lock().unwrap().clone())
    }

    async fn score(
        &self,
        spec_id: &SpecId,
        tense: Option<Tense>,
        correct: bool,
    ) -> Result<(), ApiError> {
        let call = Call::Score(spec_id.clone(), tense, correct);
        self.pass_gate(&call).await;
        self.record(call)
    }

    async fn add_new_words(&self) -> Result<AddNewWordsResponse, ApiError> {
        self.record(Call::AddNewWords)?;
        self.pass_gate(&Call::AddNewWords).await;
        let new_words = self.new_words.lock().unwrap().clone();
        Ok(AddNewWordsResponse { new_words })
    }

    async fn reset_stats(&self) -> Result<(), ApiError> {
        self.pass_gate(&Call::ResetStats).await;
        self.record(Call::ResetStats)
    }
}
