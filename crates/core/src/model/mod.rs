mod grammar;
mod ids;
mod practice;
mod user;
mod word;

pub use grammar::{PartOfSpeech, Person, Tense, tense_query};
pub use ids::{SpecId, UserId, WordId};
pub use practice::{GeneratedSentence, Pairing, PracticeItem, PracticeSpec, pair_sentences};
pub use user::{Session, User, normalize_username};
pub use word::{GENERAL_STATS_KEY, TenseStats, Word};
