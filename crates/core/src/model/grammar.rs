use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

//
// ─── TENSE ────────────────────────────────────────────────────────────────────
//

/// Verb tenses the backend can conjugate for.
///
/// Wire names are the snake_case Italian names (`passato_prossimo`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Presente,
    PassatoProssimo,
    Imperfetto,
    Futuro,
}

impl Tense {
    pub const ALL: [Tense; 4] = [
        Tense::Presente,
        Tense::PassatoProssimo,
        Tense::Imperfetto,
        Tense::Futuro,
    ];

    /// The name used in query strings, score bodies and stats keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tense::Presente => "presente",
            Tense::PassatoProssimo => "passato_prossimo",
            Tense::Imperfetto => "imperfetto",
            Tense::Futuro => "futuro",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tense::Presente => "Presente",
            Tense::PassatoProssimo => "Passato prossimo",
            Tense::Imperfetto => "Imperfetto",
            Tense::Futuro => "Futuro",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tense {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Tense::ALL
            .into_iter()
            .find(|tense| tense.as_str() == value.trim())
            .ok_or_else(|| ModelError::UnknownTense(value.to_string()))
    }
}

/// Joins tenses into the comma list accepted by the batch endpoint.
#[must_use]
pub fn tense_query(tenses: &[Tense]) -> String {
    tenses
        .iter()
        .map(|tense| tense.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

//
// ─── PERSON ───────────────────────────────────────────────────────────────────
//

/// Grammatical person and number, encoded on the wire as `1s` .. `3p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    #[serde(rename = "1s")]
    FirstSingular,
    #[serde(rename = "2s")]
    SecondSingular,
    #[serde(rename = "3s")]
    ThirdSingular,
    #[serde(rename = "1p")]
    FirstPlural,
    #[serde(rename = "2p")]
    SecondPlural,
    #[serde(rename = "3p")]
    ThirdPlural,
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Person::FirstSingular => "1s",
            Person::SecondSingular => "2s",
            Person::ThirdSingular => "3s",
            Person::FirstPlural => "1p",
            Person::SecondPlural => "2p",
            Person::ThirdPlural => "3p",
        }
    }

    /// Italian subject pronoun shown next to the prompt.
    #[must_use]
    pub fn pronoun(self) -> &'static str {
        match self {
            Person::FirstSingular => "io",
            Person::SecondSingular => "tu",
            Person::ThirdSingular => "lui/lei",
            Person::FirstPlural => "noi",
            Person::SecondPlural => "voi",
            Person::ThirdPlural => "loro",
        }
    }
}

impl FromStr for Person {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Person::ALL
            .into_iter()
            .find(|person| person.code() == value.trim())
            .ok_or_else(|| ModelError::UnknownPerson(value.to_string()))
    }
}

//
// ─── PART OF SPEECH ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Verb,
    Noun,
    Adj,
    Adv,
    #[default]
    #[serde(other)]
    Other,
}

impl PartOfSpeech {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Adj => "adj",
            PartOfSpeech::Adv => "adv",
            PartOfSpeech::Other => "other",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tense_parses_wire_names() {
        assert_eq!("passato_prossimo".parse::<Tense>(), Ok(Tense::PassatoProssimo));
        assert_eq!(
            "remoto".parse::<Tense>(),
            Err(ModelError::UnknownTense("remoto".into()))
        );
    }

    #[test]
    fn tense_query_joins_with_commas() {
        assert_eq!(
            tense_query(&[Tense::Presente, Tense::Futuro]),
            "presente,futuro"
        );
        assert_eq!(tense_query(&[]), "");
    }

    #[test]
    fn unknown_part_of_speech_falls_back_to_other() {
        let pos: PartOfSpeech = serde_json::from_str("\"pronoun\"").unwrap();
        assert_eq!(pos, PartOfSpeech::Other);
        let verb: PartOfSpeech = serde_json::from_str("\"verb\"").unwrap();
        assert_eq!(verb, PartOfSpeech::Verb);
    }

    #[test]
    fn person_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Person::FirstPlural).unwrap(), "\"1p\"");
        assert_eq!("3s".parse::<Person>().unwrap().pronoun(), "lui/lei");
    }
}
