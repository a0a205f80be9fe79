//! Request and response bodies for each backend endpoint.
//!
//! Responses are decoded into these shapes at the boundary and converted to
//! domain types before leaving the services crate.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use caligula_core::model::{
    GENERAL_STATS_KEY, GeneratedSentence, PartOfSpeech, Person, PracticeSpec, Session, Tense,
    TenseStats, User, Word, WordId,
};

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
}

/// Dev-login reply. A login only counts when both `access` and `user` are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl LoginResponse {
    #[must_use]
    pub fn into_session(self) -> Option<Session> {
        match (self.access, self.user) {
            (Some(access), Some(user)) if !access.is_empty() => Some(Session::new(access, user)),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct MeResponse {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WordDto {
    #[serde(default)]
    pub id: Option<u64>,
    pub text: String,
    #[serde(default)]
    pub pos: PartOfSpeech,
    pub created_at: DateTime<Utc>,
}

/// One row of `GET /words/`: the user's link to a word plus its counters.
#[derive(Debug, Deserialize)]
pub(crate) struct WordEntryDto {
    pub id: u64,
    pub word: WordDto,
    #[serde(default)]
    pub stats: Option<BTreeMap<String, TenseStats>>,
    #[serde(default)]
    pub miss_count: Option<u32>,
    #[serde(default)]
    pub hit_count: Option<u32>,
}

impl From<WordEntryDto> for Word {
    fn from(entry: WordEntryDto) -> Self {
        let stats = match entry.stats {
            Some(stats) => stats,
            None => {
                let legacy = TenseStats::new(
                    entry.hit_count.unwrap_or_default(),
                    entry.miss_count.unwrap_or_default(),
                );
                let mut stats = BTreeMap::new();
                if legacy.attempts() > 0 {
                    stats.insert(GENERAL_STATS_KEY.to_string(), legacy);
                }
                stats
            }
        };
        Word {
            id: WordId::new(entry.word.id.unwrap_or(entry.id)),
            text: entry.word.text,
            part_of_speech: entry.word.pos,
            created_at: entry.word.created_at,
            stats,
        }
    }
}

/// Which forms the backend should generate for a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFeatures {
    pub tenses: Vec<Tense>,
    pub persons: Vec<Person>,
}

/// Body of `POST /words/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewWord {
    pub text: String,
    pub pos: PartOfSpeech,
    pub features: WordFeatures,
}

impl NewWord {
    /// A verb practiced in the given tenses for every person.
    #[must_use]
    pub fn verb(text: impl Into<String>, tenses: &[Tense]) -> Self {
        Self {
            text: text.into(),
            pos: PartOfSpeech::Verb,
            features: WordFeatures {
                tenses: tenses.to_vec(),
                persons: Person::ALL.to_vec(),
            },
        }
    }
}

/// Body of `POST /llm/generate/`: a whole batch, or the single-item form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GenerateRequest {
    Batch { specs: Vec<PracticeSpec> },
    Single { spec: PracticeSpec },
}

/// Reply of `POST /llm/generate/`.
///
/// `json` is whatever the model produced, so it is kept loose and read through
/// `sentences` / `single_sentence`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub sent: Option<Value>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub json: Option<Value>,
    #[serde(default)]
    pub usage: Option<Value>,
}

/// Pretty-printed request/response pair shown in the developer panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationTrace {
    pub sent: String,
    pub received: String,
}

impl GenerateResponse {
    /// Well-formed entries of `json.sentences`; malformed entries are skipped.
    #[must_use]
    pub fn sentences(&self) -> Vec<GeneratedSentence> {
        self.json
            .as_ref()
            .and_then(|json| json.get("sentences"))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The `{it, en}` pair returned for a single-spec request.
    #[must_use]
    pub fn single_sentence(&self) -> Option<(String, String)> {
        let json = self.json.as_ref()?;
        let it = json.get("it")?.as_str()?;
        let en = json.get("en")?.as_str()?;
        Some((it.to_string(), en.to_string()))
    }

    #[must_use]
    pub fn trace(&self) -> GenerationTrace {
        let sent = self.sent.as_ref().map(pretty).unwrap_or_default();
        let received = pretty(&serde_json::json!({
            "response": self.response,
            "json": self.json,
            "usage": self.usage,
        }));
        GenerationTrace { sent, received }
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tense: Option<Tense>,
    pub correct: bool,
}

/// Reply of `POST /words/add-new/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddNewWordsResponse {
    #[serde(default)]
    pub new_words: Option<Vec<String>>,
}

impl AddNewWordsResponse {
    #[must_use]
    pub fn into_new_words(self) -> Vec<String> {
        self.new_words.unwrap_or_default()
    }
}
