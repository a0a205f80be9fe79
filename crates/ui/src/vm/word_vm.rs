use std::str::FromStr;

use caligula_core::model::{GENERAL_STATS_KEY, Tense, Word};

use crate::vm::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordRowVm {
    pub id: u64,
    pub text: String,
    pub pos_label: &'static str,
    pub totals_label: String,
    pub tense_labels: Vec<String>,
    pub created_label: String,
}

#[must_use]
pub fn map_word_rows(words: &[Word]) -> Vec<WordRowVm> {
    words.iter().map(map_word_row).collect()
}

fn map_word_row(word: &Word) -> WordRowVm {
    let totals = word.totals();
    let tense_labels = word
        .stats
        .iter()
        .filter(|(key, _)| key.as_str() != GENERAL_STATS_KEY)
        .map(|(key, stats)| {
            let name = Tense::from_str(key).map_or(key.as_str(), |tense| tense.label());
            format!("{name} {}/{}", stats.hits, stats.attempts())
        })
        .collect();

    WordRowVm {
        id: word.id.value(),
        text: word.text.clone(),
        pos_label: word.part_of_speech.as_str(),
        totals_label: format!("miss:{} · hit:{}", totals.misses, totals.hits),
        tense_labels,
        created_label: format_datetime(word.created_at),
    }
}
