use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unique identifier for a Word
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(u64);

impl WordId {
    /// Creates a new `WordId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Unique identifier for a User
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Creates a new `UserId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordId({})", self.0)
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier carried by a practice spec and echoed back by generated sentences.
///
/// The backend issues numeric ids (the word id) while generated sentences may
/// echo them as strings, so both JSON forms are accepted. Equality compares the
/// textual form; serialization keeps the form that was received.
#[derive(Clone)]
pub struct SpecId {
    raw: String,
    numeric: bool,
}

impl SpecId {
    #[must_use]
    pub fn text(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            numeric: false,
        }
    }

    #[must_use]
    pub fn number(value: u64) -> Self {
        Self {
            raw: value.to_string(),
            numeric: true,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The word this spec was generated for, when the id is numeric.
    #[must_use]
    pub fn word_id(&self) -> Option<WordId> {
        self.raw.parse::<u64>().ok().map(WordId::new)
    }
}

impl PartialEq for SpecId {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for SpecId {}

impl Hash for SpecId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Debug for SpecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpecId({})", self.raw)
    }
}

impl fmt::Display for SpecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<WordId> for SpecId {
    fn from(id: WordId) -> Self {
        Self::number(id.value())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SpecIdRepr {
    Number(u64),
    Text(String),
}

impl Serialize for SpecId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.raw.parse::<u64>() {
            Ok(value) if self.numeric => SpecIdRepr::Number(value).serialize(serializer),
            _ => SpecIdRepr::Text(self.raw.clone()).serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SpecId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match SpecIdRepr::deserialize(deserializer)? {
            SpecIdRepr::Number(value) => Self::number(value),
            SpecIdRepr::Text(raw) => Self::text(raw),
        })
    }
}
