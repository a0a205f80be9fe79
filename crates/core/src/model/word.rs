use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::grammar::PartOfSpeech;
use crate::model::ids::WordId;

/// Stats key the backend uses when a score carries no tense.
pub const GENERAL_STATS_KEY: &str = "general";

/// Hit/miss counters for one tense of one word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenseStats {
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub misses: u32,
}

impl TenseStats {
    #[must_use]
    pub fn new(hits: u32, misses: u32) -> Self {
        Self { hits, misses }
    }

    #[must_use]
    pub fn attempts(self) -> u32 {
        self.hits.saturating_add(self.misses)
    }
}

/// A word in the user's list, as last fetched from the backend.
///
/// Read-only on the client; refreshed wholesale on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub id: WordId,
    pub text: String,
    pub part_of_speech: PartOfSpeech,
    pub created_at: DateTime<Utc>,
    pub stats: BTreeMap<String, TenseStats>,
}

impl Word {
    /// Sum of the per-tense counters.
    #[must_use]
    pub fn totals(&self) -> TenseStats {
        self.stats
            .values()
            .fold(TenseStats::default(), |acc, stats| TenseStats {
                hits: acc.hits.saturating_add(stats.hits),
                misses: acc.misses.saturating_add(stats.misses),
            })
    }

    #[must_use]
    pub fn stats_for(&self, key: &str) -> TenseStats {
        self.stats.get(key).copied().unwrap_or_default()
    }
}
