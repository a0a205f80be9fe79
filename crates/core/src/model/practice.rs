use serde::{Deserialize, Serialize};

use crate::model::grammar::{PartOfSpeech, Person, Tense};
use crate::model::ids::SpecId;

/// One requested form: which lemma to use, and for verbs which person/tense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeSpec {
    pub id: SpecId,
    pub lemma: String,
    #[serde(rename = "pos", default)]
    pub part_of_speech: PartOfSpeech,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tense: Option<Tense>,
}

/// A sentence produced by the generation endpoint for one spec id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSentence {
    pub id: SpecId,
    pub it: String,
    pub en: String,
}

/// A queued exercise: the spec it came from, the Italian target and the
/// English prompt shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeItem {
    pub spec: PracticeSpec,
    pub it: String,
    pub en: String,
}

impl PracticeItem {
    #[must_use]
    pub fn new(spec: PracticeSpec, it: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            spec,
            it: it.into(),
            en: en.into(),
        }
    }
}

/// Result of matching generated sentences back to their specs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pairing {
    pub items: Vec<PracticeItem>,
    /// Ids of sentences that had no spec left to pair with.
    pub unmatched: Vec<SpecId>,
}

/// Pairs each sentence with the first unused spec that carries the same id.
///
/// Batches can hold the same word twice, so a spec is consumed once paired and
/// duplicates pair in order. Sentences without a spec are dropped and reported
/// in `Pairing::unmatched`. Output order follows the sentences.
#[must_use]
pub fn pair_sentences(specs: &[PracticeSpec], sentences: Vec<GeneratedSentence>) -> Pairing {
    let mut used = vec![false; specs.len()];
    let mut pairing = Pairing::default();

    for sentence in sentences {
        let slot = (0..specs.len()).find(|&idx| !used[idx] && specs[idx].id == sentence.id);
        match slot {
            Some(idx) => {
                used[idx] = true;
                pairing.items.push(PracticeItem::new(
                    specs[idx].clone(),
                    sentence.it,
                    sentence.en,
                ));
            }
            None => pairing.unmatched.push(sentence.id),
        }
    }

    pairing
}
