//! Answer checking for typed translations.

/// Punctuation ignored when comparing an answer with its target sentence.
pub const IGNORED_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Outcome of comparing a typed answer with the expected sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerVerdict {
    Correct,
    Incorrect,
}

impl AnswerVerdict {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, AnswerVerdict::Correct)
    }
}

/// Strips ignored punctuation, trims surrounding whitespace, lowercases.
///
/// Inner whitespace and accents are kept: `perché` and `perche` differ.
#[must_use]
pub fn normalize_answer(text: &str) -> String {
    text.chars()
        .filter(|ch| !IGNORED_PUNCTUATION.contains(ch))
        .collect::<String>()
        .trim()
        .to_lowercase()
}

#[must_use]
pub fn check_answer(input: &str, target: &str) -> AnswerVerdict {
    if normalize_answer(input) == normalize_answer(target) {
        AnswerVerdict::Correct
    } else {
        AnswerVerdict::Incorrect
    }
}
