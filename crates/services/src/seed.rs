use caligula_core::model::Tense;

use crate::api::{NewWord, PracticeApi};
use crate::error::ApiError;

/// Verbs added to an empty word list so a fresh account has something to practice.
pub const SEED_LEMMAS: [&str; 4] = ["fare", "andare", "parlare", "avere"];

/// Adds the seed verbs (presente, all persons) when the user's list is empty.
///
/// Returns how many words were added; zero when the list already had words.
///
/// # Errors
///
/// Returns the first `ApiError` hit while listing or adding words.
pub async fn ensure_seed_words(api: &dyn PracticeApi) -> Result<usize, ApiError> {
    let existing = api.list_words().await?;
    if !existing.is_empty() {
        return Ok(0);
    }

    for lemma in SEED_LEMMAS {
        api.add_word(&NewWord::verb(lemma, &[Tense::Presente]))
            .await?;
    }
    tracing::info!(count = SEED_LEMMAS.len(), "seeded empty word list");
    Ok(SEED_LEMMAS.len())
}
