//! Hint command
//!
//! Lists every dictionary word a root word can still produce.

use crate::core::{GameSession, check, points, word_length};
use crate::dictionary::WordListDictionary;
use rayon::prelude::*;

/// Playable words for one root word
#[derive(Debug, Clone)]
pub struct HintResult {
    pub root_word: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    /// Score earned by finding every word without a single rejection
    pub max_score: i64,
}

impl HintResult {
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Find every word that would be accepted, skipping those already used
///
/// # Examples
/// ```
/// use word_scramble::commands::find_words;
/// use word_scramble::dictionary::WordListDictionary;
///
/// let dictionary = WordListDictionary::new("en", ["silk", "worm", "zebra", "silkworm", "ox"]);
/// let hints = find_words("silkworm", &[], &dictionary, "en");
///
/// assert_eq!(hints.words, vec!["silk", "worm"]);
/// assert_eq!(hints.max_score, 8);
/// ```
#[must_use]
pub fn find_words(
    root_word: &str,
    used_words: &[String],
    dictionary: &WordListDictionary,
    language: &str,
) -> HintResult {
    let candidates: Vec<&str> = dictionary.words().collect();

    let mut words: Vec<String> = candidates
        .par_iter()
        .filter(|&&word| check(word, root_word, used_words, dictionary, language).is_ok())
        .map(|&word| word.to_string())
        .collect();

    words.sort_by(|a, b| {
        word_length(b)
            .cmp(&word_length(a))
            .then_with(|| a.cmp(b))
    });
    let max_score = words.iter().map(|word| points(word)).sum();

    HintResult {
        root_word: root_word.to_string(),
        words,
        max_score,
    }
}

/// Words the player has not found yet in this session
#[must_use]
pub fn remaining_words(session: &GameSession<WordListDictionary>) -> HintResult {
    find_words(
        session.root_word(),
        session.used_words(),
        session.dictionary(),
        session.language(),
    )
}
