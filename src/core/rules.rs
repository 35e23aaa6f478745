//! Submission rules
//!
//! Each rule is a pure predicate over a normalized word. `check` runs them in
//! their fixed order and reports the first one that fails.

use super::LetterPool;
use crate::dictionary::Dictionary;
use std::fmt;

/// Shortest word a player may submit
pub const MIN_WORD_LENGTH: usize = 3;

/// Language tag passed to the dictionary when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Why a submission was turned down
///
/// Variants are listed in the order the rules are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RejectionReason {
    #[error("word is too short")]
    TooShort,
    #[error("word is the root word")]
    IsRootWord,
    #[error("word was already used")]
    AlreadyUsed,
    #[error("word cannot be built from the root word's letters")]
    NotDerivable,
    #[error("word is not in the dictionary")]
    NotARealWord,
}

impl RejectionReason {
    /// All reasons, in evaluation order
    pub const ALL: [Self; 5] = [
        Self::TooShort,
        Self::IsRootWord,
        Self::AlreadyUsed,
        Self::NotDerivable,
        Self::NotARealWord,
    ];

    /// Short headline for the alert shown to the player
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Word is too short",
            Self::IsRootWord => "That's the original word",
            Self::AlreadyUsed => "You've already used that",
            Self::NotDerivable => "That's not possible",
            Self::NotARealWord => "That word is made up",
        }
    }

    /// Explanation for the alert shown to the player
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::TooShort => {
                format!("Please use words at least {MIN_WORD_LENGTH} letters long!")
            }
            Self::IsRootWord => "Please use a different word!".to_string(),
            Self::AlreadyUsed => "Please use a new word!".to_string(),
            Self::NotDerivable => format!("You need to use letters only from '{root_word}'!"),
            Self::NotARealWord => {
                "You must use real words from the English language!".to_string()
            }
        }
    }

    /// Title and message pair for the presentation layer
    #[must_use]
    pub fn alert(self, root_word: &str) -> Alert {
        Alert {
            title: self.title(),
            message: self.message(root_word),
        }
    }
}

/// Human-readable rejection, ready to be shown as a dismissible dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: String,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Lowercase and strip surrounding whitespace, newlines included
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize("\t\r\n"), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Length of a word in letters, which is also its score value
#[inline]
#[must_use]
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

#[must_use]
pub fn is_long_enough(word: &str) -> bool {
    word_length(word) >= MIN_WORD_LENGTH
}

#[must_use]
pub fn is_not_root(word: &str, root_word: &str) -> bool {
    word != root_word
}

#[must_use]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// Whether `word` can be spelled with the letters of `root_word`, each used at most once
#[must_use]
pub fn is_derivable(word: &str, root_word: &str) -> bool {
    LetterPool::new(root_word).can_spell(word)
}

/// Run every rule in order against an already normalized word
///
/// # Errors
///
/// Returns the first `RejectionReason` whose rule fails.
pub fn check<D: Dictionary + ?Sized>(
    word: &str,
    root_word: &str,
    used_words: &[String],
    dictionary: &D,
    language: &str,
) -> Result<(), RejectionReason> {
    if !is_long_enough(word) {
        return Err(RejectionReason::TooShort);
    }
    if !is_not_root(word, root_word) {
        return Err(RejectionReason::IsRootWord);
    }
    if !is_original(word, used_words) {
        return Err(RejectionReason::AlreadyUsed);
    }
    if !is_derivable(word, root_word) {
        return Err(RejectionReason::NotDerivable);
    }
    if !dictionary.is_real_word(word, language) {
        return Err(RejectionReason::NotARealWord);
    }
    Ok(())
}
